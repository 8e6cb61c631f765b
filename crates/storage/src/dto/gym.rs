use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating a gym by manual entry.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateGymRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 512, message = "Address is required"))]
    pub address: String,

    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateGymRequest {
    #[validate(length(min = 1, max = 255, message = "Name must not be empty"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 512, message = "Address must not be empty"))]
    pub address: Option<String>,

    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
}

/// Request payload for saving a gym discovered through the places lookup.
/// The external place id comes from the URL path.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveFromPlaceRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 512, message = "Address is required"))]
    pub address: String,

    pub latitude: Decimal,
    pub longitude: Decimal,

    pub photo_reference: Option<String>,
}
