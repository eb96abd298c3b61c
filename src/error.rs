use thiserror::Error;

/// Failure surfaced by a repository.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The database rejected the statement because of a unique-key
    /// constraint. For `users` that is the UNIQUE index on `email`.
    #[error("unique constraint violated: {constraint}")]
    ConstraintViolation { constraint: String },
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    /// Classifies a sqlx error, pulling unique-key violations out into
    /// their own variant so callers never match on driver error codes.
    pub fn from_sqlx(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                let constraint = db_err.constraint().unwrap_or("unique").to_string();
                return StorageError::ConstraintViolation { constraint };
            }
        }
        StorageError::Database(err)
    }
}

/// Failure surfaced by the service layer. Storage errors pass through
/// unchanged; only hashing adds a failure mode of its own.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to hash password: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
    #[error("password hashing task failed: {0}")]
    HashTask(#[from] tokio::task::JoinError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
