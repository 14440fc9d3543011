#![recursion_limit = "512"]

pub mod api;
pub mod config;
pub mod error;
pub mod logic;
pub mod model;
pub mod seed;
pub mod store;

// Export API types
pub use api::handlers;
pub use api::routes;

pub use error::{OrderError, OrderResult};
pub use logic::{Catalog, DeliveryOffset, FixedOffset, MakeEntry, OrderService, RandomOffset};
pub use model::*;
pub use store::{InMemoryStore, OrderStore};

use std::sync::Arc;

/// Build the order service described by the configuration, backed by the in-memory store.
pub fn build_service(config: &crate::config::AppConfig) -> OrderService<InMemoryStore> {
    OrderService::new(InMemoryStore::new(), seed::standard_catalog())
        .with_inventory_check(config.inventory.enabled)
}

/// Router with its state attached, ready to serve.
pub fn build_app<S: OrderStore + 'static>(service: Arc<OrderService<S>>, banner: String) -> axum::Router {
    routes::create_router(banner).with_state(service)
}

pub async fn run_server() -> anyhow::Result<()> {
    use axum::serve;
    use tokio::net::TcpListener;

    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let config = crate::config::AppConfig::load()?;
    let service = Arc::new(build_service(&config));

    if std::env::var("LOAD_SEED_DATA").unwrap_or_default() == "true" {
        let seeded = seed::load_seed_data(&*service).await?;
        log::info!("Loaded {} seed orders", seeded);
    }

    let app = build_app(service, config.api.banner.clone());

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    log::info!(
        "Car ordering API running on http://{} (inventory check {})",
        bind_address,
        if config.inventory.enabled { "on" } else { "off" }
    );

    serve(listener, app).await?;

    Ok(())
}
