pub mod models;
pub mod serializers;
pub mod services;
pub mod subsystems;
pub mod traits;
pub mod urls;
pub mod views;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio_graceful_shutdown::{BoxedError, SubsystemBuilder, Toplevel};
use tracing::info;

use crate::services::chat_api_groq::GroqChatApi;
use crate::services::extractor::Extractor;
use crate::services::settings::{AppConfig, load_config};
use crate::subsystems::server::ServerSubsystem;
use crate::traits::chat_api::ChatApi;

/// Shared, read-only state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<Extractor>,
}

/// High-level entrypoint: load config, init logging, run server
pub async fn run_with_config_path(path: &str) -> anyhow::Result<()> {
    // Load YAML config
    let cfg: AppConfig =
        load_config(path).map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path, e))?;

    // Initialize structured logging (default to info if RUST_LOG not set)
    let log_spec = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_spec))
        .with_target(false)
        .compact()
        .try_init();

    run_server(cfg).await
}

/// Server runner: initializes services and serves requests until shutdown
pub async fn run_server(cfg: AppConfig) -> anyhow::Result<()> {
    info!("server mode starting");

    // Initialize shared services from config. The upstream credential is
    // resolved once here and reused for every request.
    let chat_api: Arc<dyn ChatApi> = Arc::new(
        GroqChatApi::from_config(&cfg.llm)
            .map_err(|e| anyhow::anyhow!("chat api init failed: {}", e))?,
    );
    let extractor = Arc::new(Extractor::builder().chat_api(chat_api).build());

    let addr: SocketAddr = cfg.server_addr().context("invalid server address")?;
    let router = urls::router(AppState { extractor });

    let server = ServerSubsystem::builder().addr(addr).router(router).build();
    Toplevel::<BoxedError>::new(move |s| async move {
        s.start(SubsystemBuilder::new("server", move |h| server.run(h)));
    })
    .catch_signals()
    .handle_shutdown_requests(Duration::from_secs(10))
    .await
    .map_err(Into::into)
}
