use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// True for Postgres unique-violation errors, such as a second user
    /// registering an email or a second gym saved for one place.
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    /// True for Postgres foreign-key violations, such as a workout or PR
    /// inserted against a gym deleted since the caller looked it up.
    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23503")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    #[derive(Debug)]
    struct CodedDbError(&'static str);

    impl fmt::Display for CodedDbError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "constraint violated")
        }
    }

    impl StdError for CodedDbError {}

    impl sqlx::error::DatabaseError for CodedDbError {
        fn message(&self) -> &str {
            "constraint violated"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.0))
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            sqlx::error::ErrorKind::Other
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }
    }

    fn db_error(code: &'static str) -> StorageError {
        StorageError::Database(sqlx::Error::Database(Box::new(CodedDbError(code))))
    }

    #[test]
    fn recognizes_unique_violation_code() {
        assert!(db_error("23505").is_unique_violation());
        assert!(!db_error("23505").is_foreign_key_violation());
    }

    #[test]
    fn recognizes_foreign_key_violation_code() {
        assert!(db_error("23503").is_foreign_key_violation());
        assert!(!db_error("23503").is_unique_violation());
    }

    #[test]
    fn other_variants_are_neither() {
        assert!(!StorageError::NotFound.is_unique_violation());
        assert!(!StorageError::NotFound.is_foreign_key_violation());
        assert!(!db_error("23502").is_unique_violation());
        assert!(!db_error("23502").is_foreign_key_violation());
    }
}
