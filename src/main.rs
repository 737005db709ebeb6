use std::error::Error;

use tool_rental::api::{AppState, create_router};
use tool_rental::config::CatalogLoader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_CATALOG: &str = "./config/tools.yaml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tool_rental=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("TOOL_RENTAL_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into());
    let catalog_path =
        std::env::var("TOOL_RENTAL_CATALOG").unwrap_or_else(|_| DEFAULT_CATALOG.into());

    // Fail fast if the catalog is missing or invalid
    let state = AppState::from_loader(CatalogLoader::new(&catalog_path))?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, catalog = %catalog_path, "Tool rental service listening");
    axum::serve(listener, app).await?;

    Ok(())
}
