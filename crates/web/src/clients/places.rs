use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Places API returned status {0}")]
    Status(String),
}

type Result<T> = std::result::Result<T, PlacesError>;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlacePhoto {
    pub photo_reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
}

/// A place as reported by the nearby search. Field coverage follows what
/// the Places API actually returns for gyms.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Place {
    pub place_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vicinity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ratings_total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<PlacePhoto>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlaceDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ratings_total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<PlacePhoto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub opening_hours: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct NearbySearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<Place>,
}

#[derive(Debug, Deserialize)]
struct PlaceDetailsResponse {
    status: String,
    result: Option<PlaceDetails>,
}

const DETAILS_FIELDS: &str =
    "name,formatted_address,geometry,photos,opening_hours,rating,user_ratings_total";

/// Client for the third-party places API. The credential is injected here
/// rather than read from ambient process state, so tests can substitute a
/// fake service via the base URL.
#[derive(Clone)]
pub struct PlacesClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl PlacesClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Search for gyms within `radius` meters of a coordinate. Result order
    /// is the upstream ranking, untouched.
    pub async fn nearby_search(&self, lat: f64, lng: f64, radius: u32) -> Result<Vec<Place>> {
        let url = format!("{}/nearbysearch/json", self.base_url);

        let response: NearbySearchResponse = self
            .client
            .get(&url)
            .query(&[
                ("location", format!("{lat},{lng}")),
                ("radius", radius.to_string()),
                ("type", "gym".to_string()),
                ("key", self.api_key.clone()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match response.status.as_str() {
            "OK" | "ZERO_RESULTS" => Ok(response.results),
            status => Err(PlacesError::Status(status.to_string())),
        }
    }

    /// Fetch details for a single place. `None` when the upstream does not
    /// know the id.
    pub async fn place_details(&self, place_id: &str) -> Result<Option<PlaceDetails>> {
        let url = format!("{}/details/json", self.base_url);

        let response: PlaceDetailsResponse = self
            .client
            .get(&url)
            .query(&[
                ("place_id", place_id),
                ("fields", DETAILS_FIELDS),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match response.status.as_str() {
            "OK" => Ok(response.result),
            "ZERO_RESULTS" | "NOT_FOUND" | "INVALID_REQUEST" => Ok(None),
            status => Err(PlacesError::Status(status.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nearby_search_response() {
        let body = r#"{
            "status": "OK",
            "results": [
                {
                    "place_id": "ChIJabc123",
                    "name": "Iron Temple",
                    "vicinity": "12 Main St",
                    "geometry": { "location": { "lat": 52.52, "lng": 13.405 } },
                    "rating": 4.6,
                    "user_ratings_total": 128,
                    "photos": [ { "photo_reference": "ref-1", "width": 400, "height": 300 } ]
                },
                { "place_id": "ChIJdef456" }
            ]
        }"#;

        let parsed: NearbySearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.status, "OK");
        assert_eq!(parsed.results.len(), 2);
        assert_eq!(parsed.results[0].name.as_deref(), Some("Iron Temple"));
        assert!(parsed.results[1].geometry.is_none());
    }

    #[test]
    fn zero_results_parses_as_empty() {
        let body = r#"{ "status": "ZERO_RESULTS", "results": [] }"#;
        let parsed: NearbySearchResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.results.is_empty());
    }

    #[test]
    fn parses_place_details_response() {
        let body = r#"{
            "status": "OK",
            "result": {
                "name": "Iron Temple",
                "formatted_address": "12 Main St, Berlin",
                "geometry": { "location": { "lat": 52.52, "lng": 13.405 } },
                "opening_hours": { "open_now": true }
            }
        }"#;

        let parsed: PlaceDetailsResponse = serde_json::from_str(body).unwrap();
        let details = parsed.result.unwrap();
        assert_eq!(details.name.as_deref(), Some("Iron Temple"));
        assert!(details.opening_hours.is_some());
    }
}
