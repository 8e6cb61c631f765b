use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use storage::{Database, dto::gym::SaveFromPlaceRequest, models::Gym};
use utoipa::IntoParams;
use validator::Validate;

use crate::clients::places::{PlaceDetails, PlacesClient};
use crate::error::WebError;

use super::services::{self, NearbyGym};

const DEFAULT_RADIUS_METERS: u32 = 5000;

#[derive(Debug, Deserialize, IntoParams)]
pub struct NearbyQuery {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    /// Search radius in meters; defaults to 5000.
    pub radius: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/maps/nearby",
    params(NearbyQuery),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Nearby gyms in upstream order, each flagged with is_saved", body = Vec<NearbyGym>),
        (status = 400, description = "Latitude or longitude missing or not numeric"),
        (status = 401, description = "Unauthorized"),
        (status = 502, description = "Places lookup unavailable")
    ),
    tag = "maps"
)]
pub async fn nearby_gyms(
    State(db): State<Database>,
    State(places): State<PlacesClient>,
    Query(query): Query<NearbyQuery>,
) -> Result<Response, WebError> {
    let (Some(lat), Some(lng)) = (query.lat, query.lng) else {
        return Err(WebError::BadRequest(
            "Latitude and longitude are required".to_string(),
        ));
    };
    let radius = query.radius.unwrap_or(DEFAULT_RADIUS_METERS);

    let found = places.nearby_search(lat, lng, radius).await?;
    let saved = services::saved_place_ids(db.pool()).await?;

    Ok(Json(services::mark_saved(found, &saved)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/maps/place/{place_id}",
    params(
        ("place_id" = String, Path, description = "External place id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Place details", body = PlaceDetails),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Place not known upstream"),
        (status = 502, description = "Places lookup unavailable")
    ),
    tag = "maps"
)]
pub async fn place_details(
    State(places): State<PlacesClient>,
    Path(place_id): Path<String>,
) -> Result<Response, WebError> {
    let details = places
        .place_details(&place_id)
        .await?
        .ok_or(WebError::NotFound)?;

    Ok(Json(details).into_response())
}

#[utoipa::path(
    post,
    path = "/api/maps/place/{place_id}/save",
    params(
        ("place_id" = String, Path, description = "External place id")
    ),
    request_body = SaveFromPlaceRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Gym saved", body = Gym),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Gym already saved for this place")
    ),
    tag = "maps"
)]
pub async fn save_place(
    State(db): State<Database>,
    Path(place_id): Path<String>,
    Json(req): Json<SaveFromPlaceRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let gym = services::save_from_place(db.pool(), &place_id, &req).await?;

    Ok((StatusCode::CREATED, Json(gym)).into_response())
}
