use sqlx::MySqlPool;

use crate::error::StorageError;
use crate::models::hospital::NewHospital;

/// Data access for the `hospitals` table. No read path exists; rows are
/// only ever inserted.
#[derive(Clone)]
pub struct HospitalRepository {
    pool: MySqlPool,
}

impl HospitalRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, hospital: &NewHospital) -> Result<u64, StorageError> {
        let result = sqlx::query(
            "INSERT INTO hospitals (name, address, phone_number) VALUES (?, ?, ?)",
        )
        .bind(&hospital.name)
        .bind(&hospital.address)
        .bind(&hospital.phone_number)
        .execute(&self.pool)
        .await
        .map_err(StorageError::from_sqlx)?;
        Ok(result.last_insert_id())
    }
}
