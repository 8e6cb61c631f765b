use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::dto::common::PaginationParams;
use crate::dto::workout::CreateWorkoutRequest;
use crate::error::{Result, StorageError};
use crate::models::Workout;

pub struct WorkoutRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WorkoutRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a workout. `gym_id` must already be resolved against an
    /// existing gym (or None) by the caller; a gym deleted between that
    /// check and the insert surfaces as a constraint violation.
    pub async fn create(
        &self,
        user_id: Uuid,
        gym_id: Option<Uuid>,
        req: &CreateWorkoutRequest,
    ) -> Result<Workout> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            INSERT INTO workouts (user_id, gym_id, date, lift, sets, reps, weight)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING workout_id, user_id, gym_id, date, lift, sets, reps, weight,
                      created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(gym_id)
        .bind(req.date)
        .bind(&req.lift)
        .bind(req.sets)
        .bind(req.reps)
        .bind(req.weight)
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

        Ok(workout)
    }

    /// A user's workouts, newest date first, optionally filtered by gym.
    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        gym_id: Option<Uuid>,
        pagination: &PaginationParams,
    ) -> Result<(Vec<Workout>, i64)> {
        let total_items = self.count_for_user(user_id, gym_id).await?;

        let mut query = QueryBuilder::new(
            r#"
            SELECT workout_id, user_id, gym_id, date, lift, sets, reps, weight,
                   created_at, updated_at
            FROM workouts
            WHERE user_id =
            "#,
        );
        query.push_bind(user_id);

        if let Some(gym_id) = gym_id {
            query.push(" AND gym_id = ");
            query.push_bind(gym_id);
        }

        query.push(" ORDER BY date DESC, created_at DESC LIMIT ");
        query.push_bind(pagination.limit() as i64);
        query.push(" OFFSET ");
        query.push_bind(pagination.offset() as i64);

        let workouts: Vec<Workout> = query.build_query_as().fetch_all(self.pool).await?;

        Ok((workouts, total_items))
    }

    async fn count_for_user(&self, user_id: Uuid, gym_id: Option<Uuid>) -> Result<i64> {
        let mut query = QueryBuilder::new("SELECT COUNT(*) FROM workouts WHERE user_id = ");
        query.push_bind(user_id);

        if let Some(gym_id) = gym_id {
            query.push(" AND gym_id = ");
            query.push_bind(gym_id);
        }

        let count = query
            .build_query_scalar::<i64>()
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
