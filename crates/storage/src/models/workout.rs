use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A logged training session entry. Workouts are immutable once created;
/// there is no update path.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Workout {
    pub workout_id: Uuid,
    pub user_id: Uuid,
    pub gym_id: Option<Uuid>,
    pub date: NaiveDate,
    pub lift: String,
    pub sets: i32,
    pub reps: i32,
    pub weight: Decimal,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}
