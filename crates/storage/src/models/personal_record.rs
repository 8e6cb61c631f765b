use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PersonalRecord {
    pub pr_id: Uuid,
    pub user_id: Uuid,
    pub gym_id: Option<Uuid>,
    pub lift: String,
    pub reps: i32,
    pub weight: Decimal,
    pub date: NaiveDate,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}
