use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::form_check::CreateFormCheckRequest;
use crate::error::Result;
use crate::models::FormCheck;

pub struct FormCheckRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> FormCheckRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// New submissions start in `processing`; the analysis worker moves them
    /// to `done` or `failed`.
    pub async fn create(&self, user_id: Uuid, req: &CreateFormCheckRequest) -> Result<FormCheck> {
        let form_check = sqlx::query_as::<_, FormCheck>(
            r#"
            INSERT INTO form_checks (user_id, video_key)
            VALUES ($1, $2)
            RETURNING form_check_id, user_id, video_key, status, results,
                      created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(&req.video_key)
        .fetch_one(self.pool)
        .await?;

        Ok(form_check)
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<FormCheck>> {
        let form_checks = sqlx::query_as::<_, FormCheck>(
            r#"
            SELECT form_check_id, user_id, video_key, status, results,
                   created_at, updated_at
            FROM form_checks
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(form_checks)
    }
}
