use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePersonalRecordRequest {
    #[validate(length(min = 1, max = 64, message = "Lift is required"))]
    pub lift: String,

    #[validate(range(min = 1, message = "Reps must be at least 1"))]
    pub reps: i32,

    pub weight: Decimal,

    pub date: NaiveDate,

    pub gym_id: Option<Uuid>,
}
