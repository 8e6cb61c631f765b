use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::dto::pain_log::CreatePainLogRequest;
use crate::error::Result;
use crate::models::{PainEntry, PainLog};

pub struct PainLogRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PainLogRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: Uuid, req: &CreatePainLogRequest) -> Result<PainLog> {
        let entries: Vec<PainEntry> = req
            .entries
            .iter()
            .map(|e| PainEntry {
                body_part: e.body_part.clone(),
                level: e.level,
                notes: e.notes.clone(),
            })
            .collect();

        let pain_log = sqlx::query_as::<_, PainLog>(
            r#"
            INSERT INTO pain_logs (user_id, date, entries)
            VALUES ($1, $2, $3)
            RETURNING pain_log_id, user_id, date, entries, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(req.date)
        .bind(Json(entries))
        .fetch_one(self.pool)
        .await?;

        Ok(pain_log)
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<PainLog>> {
        let pain_logs = sqlx::query_as::<_, PainLog>(
            r#"
            SELECT pain_log_id, user_id, date, entries, created_at, updated_at
            FROM pain_logs
            WHERE user_id = $1
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(pain_logs)
    }
}
