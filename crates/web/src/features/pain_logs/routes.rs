use axum::{Router, middleware, routing::get};

use super::handlers::{create_pain_log, list_pain_logs};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_pain_logs).post(create_pain_log))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
