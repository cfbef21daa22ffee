use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::appeals::handlers;
use crate::features::appeals::services::AppealService;

/// Create routes for the appeals feature
///
/// Public: subscribers submit appeals without authenticating.
pub fn routes(service: Arc<AppealService>) -> Router {
    Router::new()
        .route("/appeals", post(handlers::create_appeal))
        .with_state(service)
}
