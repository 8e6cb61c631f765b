use axum::{
    Extension, Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{Database, models::Alert};

use crate::error::WebError;
use crate::middleware::auth::CurrentUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/alerts",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "The caller's plateau alerts, newest first", body = Vec<Alert>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "alerts"
)]
pub async fn list_alerts(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Response, WebError> {
    let alerts = services::list_alerts(db.pool(), user.user_id).await?;

    Ok(Json(alerts).into_response())
}
