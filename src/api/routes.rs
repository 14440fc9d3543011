use axum::{routing::get, Router};

use crate::api::handlers::{self, AppState};
use crate::store::traits::OrderStore;

pub fn create_router<S: OrderStore + 'static>(banner: String) -> Router<AppState<S>> {
    Router::new()
        .route(
            "/",
            get(move || {
                let banner = banner.clone();
                async move { banner }
            }),
        )
        // Health check
        .route("/health", get(handlers::health_check::<S>))
        // API Documentation
        .route("/docs/openapi.json", get(handlers::get_openapi_spec))
        // Car orders
        .route(
            "/api/cars",
            get(handlers::list_orders::<S>).post(handlers::create_order::<S>),
        )
        // Inventory lookups (static segments take priority over :id)
        .route("/api/cars/makes", get(handlers::list_makes::<S>))
        .route("/api/cars/colors", get(handlers::list_colors::<S>))
        .route("/api/cars/models/:make", get(handlers::list_models::<S>))
        .route(
            "/api/cars/:id",
            get(handlers::get_order::<S>)
                .put(handlers::update_order::<S>)
                .delete(handlers::delete_order::<S>),
        )
}
