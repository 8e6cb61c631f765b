use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::Result;

/// One matching workout row with its owner's identity resolved. Grouping
/// and ranking happen in [`crate::services::leaderboard`].
#[derive(Debug, Clone, FromRow)]
pub struct LiftRecordRow {
    pub user_id: Uuid,
    pub email: String,
    pub weight: Decimal,
}

pub struct LeaderboardRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> LeaderboardRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All recorded weights for a gym and lift, joined to their owners.
    /// An unknown gym simply matches nothing.
    pub async fn fetch_lift_records(&self, gym_id: Uuid, lift: &str) -> Result<Vec<LiftRecordRow>> {
        let rows = sqlx::query_as::<_, LiftRecordRow>(
            r#"
            SELECT w.user_id, u.email, w.weight
            FROM workouts w
            INNER JOIN users u ON u.user_id = w.user_id
            WHERE w.gym_id = $1 AND w.lift = $2
            "#,
        )
        .bind(gym_id)
        .bind(lift)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
