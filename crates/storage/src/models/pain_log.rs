use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PainEntry {
    pub body_part: String,
    /// Self-reported pain level, 0 to 10.
    pub level: i32,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PainLog {
    pub pain_log_id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    #[schema(value_type = Vec<PainEntry>)]
    pub entries: Json<Vec<PainEntry>>,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}
