use std::process::ExitCode;

use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn main() -> ExitCode {
    // .env first so RUST_LOG / DATABASE_URL / CONFIG_PATH apply
    dotenv().ok();
    let cfg = configs::AppConfig::load_or_env();
    match &cfg {
        Ok(cfg) => server::startup::init_logging(cfg),
        Err(_) => common::utils::logging::init_logging_default(),
    }
    info!(service = "pizzeria", event = "logger_init", "tracing subscriber initialized");

    let instance_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(service = "pizzeria", event = "panic", %instance_id, pid, message = %info, "unhandled panic occurred");
    }));

    // 线程数：优先配置文件，其次 TOKIO_WORKER_THREADS
    let worker_threads = match &cfg {
        Ok(cfg) => cfg.server.worker_threads,
        Err(_) => std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()),
    };

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads {
        builder.worker_threads(w);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "pizzeria", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service = "pizzeria",
        event = "start",
        %instance_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "pizzeria server starting"
    );

    rt.block_on(async move {
        let server_task = tokio::spawn(async move {
            server::run().await.inspect_err(|e| {
                error!(service = "pizzeria", event = "run_failed", error = %e, "server::run returned error");
            })
        });

        tokio::select! {
            res = server_task => match res {
                Ok(Ok(())) => {
                    info!(service = "pizzeria", event = "stop", %instance_id, pid, "server stopped normally");
                    ExitCode::SUCCESS
                }
                // logged inside the task
                Ok(Err(_)) => ExitCode::FAILURE,
                Err(e) => {
                    error!(service = "pizzeria", event = "task_join_error", error = %e, "server task join error");
                    ExitCode::FAILURE
                }
            },
            _ = tokio::signal::ctrl_c() => {
                info!(service = "pizzeria", event = "shutdown_signal", %instance_id, pid, "received Ctrl+C, shutting down");
                ExitCode::SUCCESS
            }
        }
    })
}
