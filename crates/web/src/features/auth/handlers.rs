use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::auth::{AuthResponse, LoginRequest, RegisterRequest, UserInfo},
};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::JwtKeys;

use super::services;

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    ),
    tag = "auth"
)]
pub async fn register(
    State(db): State<Database>,
    State(jwt): State<JwtKeys>,
    Json(req): Json<RegisterRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let email = req.email.to_lowercase();
    let password_hash = bcrypt::hash(&req.password, bcrypt::DEFAULT_COST)
        .map_err(|e| WebError::InternalServerError(format!("Failed to hash password: {e}")))?;

    let user = services::create_user(db.pool(), &email, &password_hash).await?;

    let token = jwt.create_token(user.user_id, &user.email)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: UserInfo {
                user_id: user.user_id,
                email: user.email,
            },
        }),
    )
        .into_response())
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = AuthResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(db): State<Database>,
    State(jwt): State<JwtKeys>,
    Json(req): Json<LoginRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let email = req.email.to_lowercase();
    let user = services::find_user_by_email(db.pool(), &email)
        .await?
        .ok_or_else(|| WebError::Unauthorized("Invalid credentials".to_string()))?;

    let password_valid = bcrypt::verify(&req.password, &user.password_hash)
        .map_err(|e| WebError::InternalServerError(format!("Failed to verify password: {e}")))?;

    if !password_valid {
        return Err(WebError::Unauthorized("Invalid credentials".to_string()));
    }

    let token = jwt.create_token(user.user_id, &user.email)?;

    Ok(Json(AuthResponse {
        token,
        user: UserInfo {
            user_id: user.user_id,
            email: user.email,
        },
    })
    .into_response())
}
