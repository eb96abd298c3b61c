use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Hospital {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub phone_number: String,
}

#[derive(Debug, Deserialize)]
pub struct NewHospital {
    pub name: String,
    pub address: String,
    pub phone_number: String,
}
