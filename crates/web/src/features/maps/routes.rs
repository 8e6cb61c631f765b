use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{nearby_gyms, place_details, save_place};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/nearby", get(nearby_gyms))
        .route("/place/:place_id", get(place_details))
        .route("/place/:place_id/save", post(save_place))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
