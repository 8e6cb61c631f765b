use sqlx::PgPool;
use storage::{
    dto::common::PaginationParams,
    dto::workout::CreateWorkoutRequest,
    error::Result,
    models::Workout,
    repository::{gym::GymRepository, workout::WorkoutRepository},
};
use uuid::Uuid;

/// Log a workout for a user. A gym reference is kept only when the gym
/// exists; an unknown gym id is dropped rather than rejected.
pub async fn create_workout(
    pool: &PgPool,
    user_id: Uuid,
    req: &CreateWorkoutRequest,
) -> Result<Workout> {
    let gym_id = match req.gym_id {
        Some(gym_id) if GymRepository::new(pool).exists(gym_id).await? => Some(gym_id),
        _ => None,
    };

    let repo = WorkoutRepository::new(pool);
    repo.create(user_id, gym_id, req).await
}

/// A user's workouts, paginated, optionally filtered by gym.
pub async fn list_workouts(
    pool: &PgPool,
    user_id: Uuid,
    gym_id: Option<Uuid>,
    pagination: &PaginationParams,
) -> Result<(Vec<Workout>, i64)> {
    let repo = WorkoutRepository::new(pool);
    repo.list_for_user(user_id, gym_id, pagination).await
}
