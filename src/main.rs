use axum::{
    routing::{get, post},
    Extension, Router,
};
use fetchd::jobs::coordinator::Coordinator;
use fetchd::jobs::handlers::{handle_job_status, handle_submit_job};
use fetchd::jobs::protocol::{ENDPOINT_JOB_STATUS, ENDPOINT_SUBMIT_JOB};
use fetchd::jobs::queue::JobQueue;
use fetchd::store::MemoryResultStore;
use fetchd::worker::{FetchWorker, WorkerConfig};
use std::net::SocketAddr;
use std::time::Duration;

struct AppConfig {
    bind_addr: SocketAddr,
    worker: WorkerConfig,
}

fn parse_args(args: &[String]) -> Result<AppConfig, String> {
    let mut config = AppConfig {
        bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        worker: WorkerConfig::default(),
    };

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--bind" | "--workers" | "--fetch-timeout-secs" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| format!("{} requires a value", flag))?;
                match flag {
                    "--bind" => {
                        config.bind_addr = value
                            .parse()
                            .map_err(|_| format!("invalid bind address '{}'", value))?;
                    }
                    "--workers" => {
                        config.worker.workers = value
                            .parse()
                            .map_err(|_| format!("invalid worker count '{}'", value))?;
                    }
                    _ => {
                        let secs: u64 = value
                            .parse()
                            .map_err(|_| format!("invalid timeout '{}'", value))?;
                        config.worker.fetch_timeout = Duration::from_secs(secs);
                    }
                }
                i += 2;
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
    }

    if config.worker.workers == 0 {
        return Err("--workers must be greater than 0".to_string());
    }

    Ok(config)
}

fn print_usage(program: &str) {
    eprintln!(
        "Usage: {} [--bind <addr:port>] [--workers <n>] [--fetch-timeout-secs <n>]",
        program
    );
    eprintln!("Example: {} --bind 127.0.0.1:3000 --workers 4", program);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_usage(&args[0]);
        std::process::exit(0);
    }

    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}", message);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    };

    // 1. Shared state: result store, queue, coordinator.
    let store = MemoryResultStore::new();
    let queue = JobQueue::new();
    let coordinator = Coordinator::new(queue.clone(), store.clone());

    // 2. Worker pool:
    let workers = FetchWorker::new(queue.clone(), store.clone(), config.worker.clone());
    workers.start();

    // 3. HTTP router:
    let app = Router::new()
        .route(ENDPOINT_SUBMIT_JOB, post(handle_submit_job::<MemoryResultStore>))
        .route(ENDPOINT_JOB_STATUS, get(handle_job_status::<MemoryResultStore>))
        .layer(Extension(coordinator));

    // 4. Spawn stats reporter:
    let stats_queue = queue.clone();
    let stats_store = store.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(30));

        loop {
            interval.tick().await;
            let (queued, running, done) = stats_queue.status_counts();
            tracing::info!(
                "Job stats: {} queued, {} running, {} done, {} stored outcomes, oldest queued {}ms",
                queued,
                running,
                done,
                stats_store.record_count(),
                stats_queue.oldest_queued_age_ms().unwrap_or(0)
            );
        }
    });

    // 5. Start HTTP server:
    tracing::info!(
        "fetchd listening on {} ({} workers, {}s fetch timeout)",
        config.bind_addr,
        config.worker.workers,
        config.worker.fetch_timeout.as_secs()
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================
// ARGUMENT PARSING TESTS
// ============================================================
