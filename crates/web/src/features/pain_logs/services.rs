use sqlx::PgPool;
use storage::{
    dto::pain_log::CreatePainLogRequest,
    error::Result,
    models::PainLog,
    repository::pain_log::PainLogRepository,
};
use uuid::Uuid;

pub async fn create_pain_log(
    pool: &PgPool,
    user_id: Uuid,
    req: &CreatePainLogRequest,
) -> Result<PainLog> {
    let repo = PainLogRepository::new(pool);
    repo.create(user_id, req).await
}

pub async fn list_pain_logs(pool: &PgPool, user_id: Uuid) -> Result<Vec<PainLog>> {
    let repo = PainLogRepository::new(pool);
    repo.list_for_user(user_id).await
}
