use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::pr::CreatePersonalRecordRequest;
use crate::error::{Result, StorageError};
use crate::models::PersonalRecord;

pub struct PersonalRecordRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PersonalRecordRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a PR. A gym reference pointing at no existing gym surfaces as
    /// a constraint violation rather than a raw database error.
    pub async fn create(
        &self,
        user_id: Uuid,
        req: &CreatePersonalRecordRequest,
    ) -> Result<PersonalRecord> {
        let pr = sqlx::query_as::<_, PersonalRecord>(
            r#"
            INSERT INTO prs (user_id, gym_id, lift, reps, weight, date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING pr_id, user_id, gym_id, lift, reps, weight, date,
                      created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(req.gym_id)
        .bind(&req.lift)
        .bind(req.reps)
        .bind(req.weight)
        .bind(req.date)
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from)
        .map_err(|e| {
            if e.is_foreign_key_violation() {
                StorageError::ConstraintViolation("Gym does not exist".to_string())
            } else {
                e
            }
        })?;

        Ok(pr)
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<PersonalRecord>> {
        let prs = sqlx::query_as::<_, PersonalRecord>(
            r#"
            SELECT pr_id, user_id, gym_id, lift, reps, weight, date,
                   created_at, updated_at
            FROM prs
            WHERE user_id = $1
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(prs)
    }
}
