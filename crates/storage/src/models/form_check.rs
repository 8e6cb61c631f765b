use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;

/// A submitted form-check video. The video itself lives in object storage
/// under `video_key`; analysis results land in `results` once processed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct FormCheck {
    pub form_check_id: Uuid,
    pub user_id: Uuid,
    pub video_key: String,
    pub status: String,
    #[schema(value_type = Object)]
    pub results: Option<Json<serde_json::Value>>,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}
