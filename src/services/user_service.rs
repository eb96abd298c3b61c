use tokio::task;

use crate::error::ServiceError;
use crate::models::user::{NewUser, User};
use crate::repositories::user_repository::UserRepository;

/// bcrypt cost factor for stored passwords, fixed at 10 rounds.
pub const BCRYPT_COST: u32 = 10;

#[derive(Clone)]
pub struct UserService {
    users: UserRepository,
}

impl UserService {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    /// Hashes the plaintext on the blocking thread pool so the CPU-bound
    /// bcrypt step never stalls the async executor, then persists the
    /// record and returns the database-assigned id.
    pub async fn add_user(&self, user: NewUser) -> Result<u64, ServiceError> {
        let NewUser {
            name,
            email,
            password,
        } = user;
        let password_hash =
            task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST)).await??;
        let user_id = self.users.create(&name, &email, &password_hash).await?;
        Ok(user_id)
    }

    /// Pass-through to the repository. Rows come back as stored, bcrypt
    /// hash included.
    pub async fn list_users(&self) -> Result<Vec<User>, ServiceError> {
        Ok(self.users.list().await?)
    }
}
