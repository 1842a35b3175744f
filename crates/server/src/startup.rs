use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use axum::Router;
use configs::AppConfig;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::{auth::PasswordHasher, storage::Storage, AppServices};

use crate::routes;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Select the storage backend and wire the services into a router.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let data_dir = PathBuf::from(&cfg.storage.data_dir);
    let storage = Storage::select(&cfg.database, &data_dir).await?;
    let services = Arc::new(AppServices::new(&storage, PasswordHasher::default()));
    Ok(routes::build_router(services, build_cors()))
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();

    let cfg = AppConfig::load_or_default()?;
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
