use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

use game_server::{
    config::Config, create_routes, gesture_service::GestureService,
    session_manager::SessionManager,
};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Snake Water Gun server...");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    if config.game_seed.is_some() {
        info!("Using fixed base seed, opponents are reproducible");
    }

    let session_manager = Arc::new(SessionManager::new(config.game_seed));
    let gesture_service = Arc::new(GestureService::new(config.gesture_enabled));

    let routes = create_routes(session_manager.clone(), gesture_service);

    // Start cleanup task
    let cleanup_session_manager = session_manager.clone();
    let session_timeout = config.session_timeout();
    let cleanup_interval = config.cleanup_interval();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(cleanup_interval);
        loop {
            interval.tick().await;
            cleanup_session_manager.cleanup_idle_sessions(session_timeout);
        }
    });

    info!("Server starting on {}:{}", config.host, config.port);

    let (addr, server) = match warp::serve(routes)
        .try_bind_with_graceful_shutdown((config.host, config.port), shutdown_signal())
    {
        Ok(bound) => bound,
        Err(e) => {
            error!("Failed to bind {}:{}: {}", config.host, config.port, e);
            std::process::exit(1);
        }
    };

    info!(
        "Server started successfully on {}. Press Ctrl+C to stop.",
        addr
    );
    server.await;
    info!(
        "Server shutdown complete, {} sessions dropped.",
        session_manager.active_sessions_count()
    );
}

async fn shutdown_signal() {
    // Wait for SIGINT (Ctrl+C) or SIGTERM
    #[cfg(unix)]
    {
        use signal::unix::{SignalKind, signal};

        match (
            signal(SignalKind::interrupt()),
            signal(SignalKind::terminate()),
        ) {
            (Ok(mut sigint), Ok(mut sigterm)) => {
                tokio::select! {
                    _ = sigint.recv() => {
                        info!("Received SIGINT, shutting down gracefully...");
                    }
                    _ = sigterm.recv() => {
                        info!("Received SIGTERM, shutting down gracefully...");
                    }
                }
            }
            _ => {
                error!("Failed to install signal handlers, falling back to Ctrl+C");
                wait_for_ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    wait_for_ctrl_c().await;
}

async fn wait_for_ctrl_c() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down gracefully..."),
        Err(e) => error!("Failed to listen for Ctrl+C: {}", e),
    }
}
