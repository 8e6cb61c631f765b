use axum::extract::FromRef;
use storage::Database;

use crate::clients::places::PlacesClient;
use crate::middleware::auth::JwtKeys;

/// Shared application state. Each collaborator is extractable on its own
/// through `FromRef`, so handlers only name what they use.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub jwt: JwtKeys,
    pub places: PlacesClient,
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        state.jwt.clone()
    }
}

impl FromRef<AppState> for PlacesClient {
    fn from_ref(state: &AppState) -> Self {
        state.places.clone()
    }
}
