use sqlx::MySqlPool;

use crate::error::StorageError;
use crate::models::user::User;

/// Data access for the `users` table. Holds the injected pool; cheap to
/// clone, one per process in practice.
#[derive(Clone)]
pub struct UserRepository {
    pool: MySqlPool,
}

impl UserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Inserts one row and returns the database-assigned id. The UNIQUE
    /// index on `email` is the only duplicate check in the system.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<u64, StorageError> {
        let result =
            sqlx::query("INSERT INTO users (name, email, password) VALUES (?, ?, ?)")
                .bind(name)
                .bind(email)
                .bind(password_hash)
                .execute(&self.pool)
                .await
                .map_err(StorageError::from_sqlx)?;
        Ok(result.last_insert_id())
    }

    /// Full-table scan, storage-engine ordering, no pagination.
    pub async fn list(&self) -> Result<Vec<User>, StorageError> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users")
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from_sqlx)?;
        Ok(users)
    }
}
