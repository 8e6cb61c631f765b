use sqlx::PgPool;
use storage::{
    dto::form_check::CreateFormCheckRequest,
    error::Result,
    models::FormCheck,
    repository::form_check::FormCheckRepository,
};
use uuid::Uuid;

pub async fn create_form_check(
    pool: &PgPool,
    user_id: Uuid,
    req: &CreateFormCheckRequest,
) -> Result<FormCheck> {
    let repo = FormCheckRepository::new(pool);
    repo.create(user_id, req).await
}

pub async fn list_form_checks(pool: &PgPool, user_id: Uuid) -> Result<Vec<FormCheck>> {
    let repo = FormCheckRepository::new(pool);
    repo.list_for_user(user_id).await
}
