use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use crate::api::rest::handlers;
use crate::domain::service::Service;

/// Mount the perk endpoints on `router`. The service reaches handlers
/// through an `Extension` layer.
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        // GET /perks - list, or filter when `title` is present
        // POST /perks - create
        .route(
            "/perks",
            get(handlers::list_perks).post(handlers::create_perk),
        )
        // Static segment, wins over /perks/{id}
        .route("/perks/filter", get(handlers::filter_perks))
        .route(
            "/perks/{id}",
            get(handlers::get_perk)
                .patch(handlers::update_perk_title)
                .put(handlers::update_perk_title)
                .delete(handlers::delete_perk),
        )
        .layer(Extension(service))
}
