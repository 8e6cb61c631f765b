use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{create_gym, delete_gym, get_gym, gym_leaderboard, list_gyms, update_gym};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_gyms))
        .route("/", post(create_gym))
        .route("/:gym_id", get(get_gym))
        .route("/:gym_id", put(update_gym))
        .route("/:gym_id", delete(delete_gym))
        .route("/:gym_id/leaderboard", get(gym_leaderboard))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
