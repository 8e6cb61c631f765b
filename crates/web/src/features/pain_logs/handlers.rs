use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::pain_log::CreatePainLogRequest, models::PainLog};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::CurrentUser;

use super::services;

#[utoipa::path(
    post,
    path = "/api/pain-logs",
    request_body = CreatePainLogRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Pain log recorded", body = PainLog),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "pain-logs"
)]
pub async fn create_pain_log(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<CreatePainLogRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let pain_log = services::create_pain_log(db.pool(), user.user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(pain_log)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/pain-logs",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "The caller's pain logs, newest first", body = Vec<PainLog>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "pain-logs"
)]
pub async fn list_pain_logs(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Response, WebError> {
    let pain_logs = services::list_pain_logs(db.pool(), user.user_id).await?;

    Ok(Json(pain_logs).into_response())
}
