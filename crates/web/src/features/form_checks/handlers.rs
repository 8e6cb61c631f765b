use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::form_check::CreateFormCheckRequest, models::FormCheck};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::CurrentUser;

use super::services;

#[utoipa::path(
    post,
    path = "/api/form-checks",
    request_body = CreateFormCheckRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Form check submitted for processing", body = FormCheck),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "form-checks"
)]
pub async fn create_form_check(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<CreateFormCheckRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let form_check = services::create_form_check(db.pool(), user.user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(form_check)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/form-checks",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "The caller's form checks, newest first", body = Vec<FormCheck>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "form-checks"
)]
pub async fn list_form_checks(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Response, WebError> {
    let form_checks = services::list_form_checks(db.pool(), user.user_id).await?;

    Ok(Json(form_checks).into_response())
}
