use serde::{Deserialize, Serialize};

use crate::models::user::User;

/// Registration payload as received. Fields are optional so the handler
/// can answer missing ones with the API's own message instead of a
/// deserialization error.
#[derive(Debug, Deserialize)]
pub struct AddUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl AddUserRequest {
    /// Every field must be present and a non-empty string.
    pub fn has_missing_fields(&self) -> bool {
        fn blank(field: &Option<String>) -> bool {
            field.as_deref().map_or(true, str::is_empty)
        }
        blank(&self.name) || blank(&self.email) || blank(&self.password)
    }
}

#[derive(Serialize)]
pub struct AddUserResponse {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: u64,
}

#[derive(Serialize)]
pub struct UserListResponse {
    pub data: Vec<User>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
