use sqlx::PgPool;
use storage::{
    error::Result,
    models::User,
    repository::user::UserRepository,
};

/// Create a user with an already-hashed password.
pub async fn create_user(pool: &PgPool, email: &str, password_hash: &str) -> Result<User> {
    let repo = UserRepository::new(pool);
    repo.create(email, password_hash).await
}

/// Look up a user by (lowercased) email.
pub async fn find_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>> {
    let repo = UserRepository::new(pool);
    repo.find_by_email(email).await
}
