use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::Alert;

pub struct AlertRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AlertRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Alert>> {
        let alerts = sqlx::query_as::<_, Alert>(
            r#"
            SELECT alert_id, user_id, lift, weeks_stalled, status, suggested_routine,
                   created_at, updated_at
            FROM alerts
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(alerts)
    }
}
