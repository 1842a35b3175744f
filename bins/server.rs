use std::process::ExitCode;

use dotenvy::dotenv;
use tokio::runtime::{Builder, Runtime};
use tracing::{error, info};
use uuid::Uuid;

fn init_logging() {
    // .env is loaded first so RUST_LOG and LOG_FORMAT take effect
    dotenv().ok();
    // LOG_FORMAT=json for log shippers, human-readable otherwise
    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => common::utils::logging::init_logging_json(),
        _ => common::utils::logging::init_logging_default(),
    }
    info!(service = "vipcortes", event = "logger_init", "tracing subscriber initialized");
}

/// Multi-threaded runtime; `worker_threads` of `None` keeps tokio's default.
fn build_runtime(worker_threads: Option<usize>) -> std::io::Result<Runtime> {
    let mut builder = Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads {
        builder.worker_threads(w);
    }
    builder.build()
}

fn main() -> ExitCode {
    init_logging();

    // Process context attached to lifecycle events
    let instance_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    // Panics inside handlers would otherwise only reach stderr
    std::panic::set_hook(Box::new(move |info| {
        error!(service = "vipcortes", event = "panic", %instance_id, pid, message = %info, "unhandled panic");
    }));

    // Thread count comes from config.toml (or CONFIG_PATH); a broken file stops startup
    let worker_threads = match configs::AppConfig::load_or_default() {
        Ok(cfg) => cfg.server.worker_threads,
        Err(e) => {
            error!(service = "vipcortes", event = "config_invalid", error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let rt = match build_runtime(worker_threads) {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "vipcortes", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service = "vipcortes",
        event = "start",
        %instance_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "booking backend starting"
    );

    // The server runs in its own task; Ctrl+C wins the race and drops it
    rt.block_on(async move {
        let server_task = tokio::spawn(async move {
            server::run().await.inspect_err(|e| {
                error!(service = "vipcortes", event = "run_failed", error = %e, "server::run returned error");
            })
        });

        tokio::select! {
            res = server_task => match res {
                Ok(Ok(())) => {
                    info!(service = "vipcortes", event = "stop", %instance_id, pid, "server stopped normally");
                    ExitCode::SUCCESS
                }
                // logged inside the task
                Ok(Err(_)) => ExitCode::FAILURE,
                Err(e) => {
                    error!(service = "vipcortes", event = "task_join_error", error = %e, "server task join error");
                    ExitCode::FAILURE
                }
            },
            _ = tokio::signal::ctrl_c() => {
                // Open file writes finish via temp-file rename, so dropping
                // in-flight requests leaves no partial collection behind.
                info!(service = "vipcortes", event = "shutdown_signal", %instance_id, pid, "received Ctrl+C, shutting down");
                ExitCode::SUCCESS
            }
        }
    })
}
