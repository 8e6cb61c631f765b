use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;

/// Plateau alert produced by the background analysis worker. The API only
/// reads these; creation happens outside the request path.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Alert {
    pub alert_id: Uuid,
    pub user_id: Uuid,
    pub lift: String,
    pub weeks_stalled: i32,
    pub status: String,
    #[schema(value_type = Object)]
    pub suggested_routine: Json<serde_json::Value>,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}
