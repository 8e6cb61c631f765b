use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::gym::{CreateGymRequest, UpdateGymRequest},
    dto::leaderboard::{LeaderboardEntry, LeaderboardQuery},
    models::Gym,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/gyms",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "List all gyms", body = Vec<Gym>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "gyms"
)]
pub async fn list_gyms(State(db): State<Database>) -> Result<Json<Vec<Gym>>, WebError> {
    let gyms = services::list_gyms(db.pool()).await?;

    Ok(Json(gyms))
}

#[utoipa::path(
    get,
    path = "/api/gyms/{gym_id}",
    params(
        ("gym_id" = Uuid, Path, description = "Gym id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Gym found", body = Gym),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Gym not found")
    ),
    tag = "gyms"
)]
pub async fn get_gym(
    State(db): State<Database>,
    Path(gym_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let gym = services::get_gym(db.pool(), gym_id).await?;

    Ok(Json(gym).into_response())
}

#[utoipa::path(
    post,
    path = "/api/gyms",
    request_body = CreateGymRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Gym created", body = Gym),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "gyms"
)]
pub async fn create_gym(
    State(db): State<Database>,
    Json(req): Json<CreateGymRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let gym = services::create_gym(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(gym)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/gyms/{gym_id}",
    params(
        ("gym_id" = Uuid, Path, description = "Gym id")
    ),
    request_body = UpdateGymRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Gym updated", body = Gym),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Gym not found")
    ),
    tag = "gyms"
)]
pub async fn update_gym(
    State(db): State<Database>,
    Path(gym_id): Path<Uuid>,
    Json(req): Json<UpdateGymRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let gym = services::update_gym(db.pool(), gym_id, &req).await?;

    Ok(Json(gym).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/gyms/{gym_id}",
    params(
        ("gym_id" = Uuid, Path, description = "Gym id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Gym deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Gym not found")
    ),
    tag = "gyms"
)]
pub async fn delete_gym(
    State(db): State<Database>,
    Path(gym_id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_gym(db.pool(), gym_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/gyms/{gym_id}/leaderboard",
    params(
        ("gym_id" = Uuid, Path, description = "Gym id"),
        LeaderboardQuery
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Users ranked by best recorded weight; empty when nothing matches", body = Vec<LeaderboardEntry>),
        (status = 400, description = "Invalid query parameters"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "gyms"
)]
pub async fn gym_leaderboard(
    State(db): State<Database>,
    Path(gym_id): Path<Uuid>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Response, WebError> {
    query.validate().map_err(WebError::BadRequest)?;

    let entries =
        services::gym_leaderboard(db.pool(), gym_id, &query.lift, query.limit).await?;

    Ok(Json(entries).into_response())
}
