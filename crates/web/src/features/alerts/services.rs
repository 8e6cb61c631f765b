use sqlx::PgPool;
use storage::{error::Result, models::Alert, repository::alert::AlertRepository};
use uuid::Uuid;

pub async fn list_alerts(pool: &PgPool, user_id: Uuid) -> Result<Vec<Alert>> {
    let repo = AlertRepository::new(pool);
    repo.list_for_user(user_id).await
}
