use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of the `users` table. `password` holds the bcrypt hash as stored;
/// plaintext never reaches this type.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Registration input before hashing. `password` is still plaintext here.
#[derive(Debug, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}
