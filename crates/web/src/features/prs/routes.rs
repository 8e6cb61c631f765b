use axum::{Router, middleware, routing::get};

use super::handlers::{create_pr, list_prs};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_prs).post(create_pr))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
