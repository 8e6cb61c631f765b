use axum::{Router, middleware, routing::get};

use super::handlers::{create_workout, list_workouts};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_workouts).post(create_workout))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
