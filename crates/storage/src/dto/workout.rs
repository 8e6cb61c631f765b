use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::common::PaginationParams;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateWorkoutRequest {
    pub date: NaiveDate,

    #[validate(length(min = 1, max = 64, message = "Lift is required"))]
    pub lift: String,

    #[validate(range(min = 1, message = "Sets must be at least 1"))]
    pub sets: i32,

    #[validate(range(min = 1, message = "Reps must be at least 1"))]
    pub reps: i32,

    pub weight: Decimal,

    /// Attaches the workout to a gym. Ignored when the gym does not exist.
    pub gym_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct WorkoutListQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    pub gym_id: Option<Uuid>,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

impl WorkoutListQuery {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams {
            page: self.page,
            limit: self.limit,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.pagination().validate()
    }
}
