//! HiringBrand differentiation API server
//!
//! Run with: cargo run -p hiringbrand-web

use std::net::SocketAddr;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Listen address override, e.g. `0.0.0.0:8080`.
const ADDR_ENV: &str = "HIRINGBRAND_ADDR";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hiringbrand=debug,info")),
        )
        .init();

    info!("Starting HiringBrand differentiation API...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let state = hiringbrand_web::state::AppState::from_env()?;
    let app = hiringbrand_web::router::build_router(state);

    let addr: SocketAddr = match std::env::var(ADDR_ENV) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{ADDR_ENV} is not a socket address: {raw}"))?,
        Err(_) => SocketAddr::from(([127, 0, 0, 1], 3001)),
    };

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
