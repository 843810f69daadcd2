use clap::Parser;

use showsync::{cli, config, http};
use showsync::http::route::{ADMIN_START_PATH, ADMIN_STOP_PATH, VIEWER_PATH};
use showsync::sync::SyncStore;

/// Wait for the first Ctrl+C (graceful shutdown).
/// A second Ctrl+C while in-flight transfers drain exits immediately.
async fn wait_for_shutdown() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Server stopping...");
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\nshowsync: forced exit");
            std::process::exit(1);
        }
    });
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
        )
        .init();

    let args = cli::Args::parse();

    let file_config = config::find_config_file(args.config.as_deref())
        .and_then(|path| {
            match config::load_config(&path) {
                Ok(cfg) => {
                    tracing::debug!("Loaded config from {}", path.display());
                    Some(cfg)
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config file: {}", e);
                    None
                }
            }
        });

    let config = config::Config::resolve(file_config, &args);

    if !config.root.is_dir() {
        eprintln!("error: serving root is not a directory: {}", config.root.display());
        std::process::exit(1);
    }

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("error: failed to bind {}: {}", addr, e);
            std::process::exit(1);
        });

    let base = format!("http://localhost:{}", config.port);
    tracing::info!("{}", "-".repeat(40));
    tracing::info!("Server starting on {} (serving {})", base, config.root.display());
    tracing::info!("1. Put video in: {}", config.media_path().join(format!("{}.mp4", config.song_id)).display());
    tracing::info!("2. Open Viewer:  {}{}", base, VIEWER_PATH);
    tracing::info!("3. START TRACK:  {}{}", base, ADMIN_START_PATH);
    tracing::info!("   STOP TRACK:   {}{}", base, ADMIN_STOP_PATH);
    tracing::info!("{}", "-".repeat(40));

    // Non-fatal: the viewer page still loads, it just has nothing to play.
    let media_path = config.media_path();
    if !media_path.is_dir() {
        tracing::warn!("'{}' folder not found. Please create it.", media_path.display());
    }

    let state = http::state::AppState::new(SyncStore::new(config.song_id.clone()), config.root.clone());
    let app = http::build_router(state);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await
    {
        tracing::error!("HTTP server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Goodbye.");
}
