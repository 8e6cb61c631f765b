use axum::{Router, middleware, routing::get};

use super::handlers::{create_form_check, list_form_checks};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_form_checks).post(create_form_check))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
