use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::pr::CreatePersonalRecordRequest, models::PersonalRecord};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::CurrentUser;

use super::services;

#[utoipa::path(
    post,
    path = "/api/prs",
    request_body = CreatePersonalRecordRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Personal record logged", body = PersonalRecord),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "prs"
)]
pub async fn create_pr(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<CreatePersonalRecordRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let pr = services::create_pr(db.pool(), user.user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(pr)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/prs",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "The caller's personal records, newest first", body = Vec<PersonalRecord>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "prs"
)]
pub async fn list_prs(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Response, WebError> {
    let prs = services::list_prs(db.pool(), user.user_id).await?;

    Ok(Json(prs).into_response())
}
