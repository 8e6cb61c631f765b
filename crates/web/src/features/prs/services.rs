use sqlx::PgPool;
use storage::{
    dto::pr::CreatePersonalRecordRequest,
    error::Result,
    models::PersonalRecord,
    repository::pr::PersonalRecordRepository,
};
use uuid::Uuid;

pub async fn create_pr(
    pool: &PgPool,
    user_id: Uuid,
    req: &CreatePersonalRecordRequest,
) -> Result<PersonalRecord> {
    let repo = PersonalRecordRepository::new(pool);
    repo.create(user_id, req).await
}

pub async fn list_prs(pool: &PgPool, user_id: Uuid) -> Result<Vec<PersonalRecord>> {
    let repo = PersonalRecordRepository::new(pool);
    repo.list_for_user(user_id).await
}
