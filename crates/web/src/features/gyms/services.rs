use sqlx::PgPool;
use storage::{
    dto::gym::{CreateGymRequest, UpdateGymRequest},
    dto::leaderboard::LeaderboardEntry,
    error::Result,
    models::Gym,
    repository::gym::GymRepository,
    services::leaderboard,
};
use uuid::Uuid;

/// List all gyms
pub async fn list_gyms(pool: &PgPool) -> Result<Vec<Gym>> {
    let repo = GymRepository::new(pool);
    repo.list().await
}

/// Get gym by id
pub async fn get_gym(pool: &PgPool, id: Uuid) -> Result<Gym> {
    let repo = GymRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a gym from manual entry
pub async fn create_gym(pool: &PgPool, req: &CreateGymRequest) -> Result<Gym> {
    let repo = GymRepository::new(pool);
    repo.create(req).await
}

/// Update a gym; absent fields keep their stored values
pub async fn update_gym(pool: &PgPool, id: Uuid, req: &UpdateGymRequest) -> Result<Gym> {
    let repo = GymRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    repo.update(&existing, req).await
}

/// Delete a gym
pub async fn delete_gym(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = GymRepository::new(pool);
    repo.delete(id).await
}

/// Ranked best weights per user for a gym and lift
pub async fn gym_leaderboard(
    pool: &PgPool,
    gym_id: Uuid,
    lift: &str,
    limit: u32,
) -> Result<Vec<LeaderboardEntry>> {
    leaderboard::gym_leaderboard(pool, gym_id, lift, limit).await
}
