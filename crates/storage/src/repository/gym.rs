use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::gym::{CreateGymRequest, SaveFromPlaceRequest, UpdateGymRequest};
use crate::error::{Result, StorageError};
use crate::models::Gym;

const GYM_COLUMNS: &str = "gym_id, name, address, latitude, longitude, place_id, \
                           photo_reference, created_at, updated_at";

pub struct GymRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> GymRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all gyms
    pub async fn list(&self) -> Result<Vec<Gym>> {
        let gyms = sqlx::query_as::<_, Gym>(&format!(
            "SELECT {GYM_COLUMNS} FROM gyms ORDER BY name"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(gyms)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Gym> {
        let gym = sqlx::query_as::<_, Gym>(&format!(
            "SELECT {GYM_COLUMNS} FROM gyms WHERE gym_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(gym)
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM gyms WHERE gym_id = $1)")
                .bind(id)
                .fetch_one(self.pool)
                .await?;

        Ok(exists)
    }

    pub async fn find_by_place_id(&self, place_id: &str) -> Result<Option<Gym>> {
        let gym = sqlx::query_as::<_, Gym>(&format!(
            "SELECT {GYM_COLUMNS} FROM gyms WHERE place_id = $1"
        ))
        .bind(place_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(gym)
    }

    /// External place ids of every saved gym, for the nearby-lookup dedupe set.
    pub async fn saved_place_ids(&self) -> Result<Vec<String>> {
        let ids: Vec<String> =
            sqlx::query_scalar("SELECT place_id FROM gyms WHERE place_id IS NOT NULL")
                .fetch_all(self.pool)
                .await?;

        Ok(ids)
    }

    /// Create a gym from manual entry. Coordinates default to 0.
    pub async fn create(&self, req: &CreateGymRequest) -> Result<Gym> {
        let gym = sqlx::query_as::<_, Gym>(&format!(
            r#"
            INSERT INTO gyms (name, address, latitude, longitude)
            VALUES ($1, $2, $3, $4)
            RETURNING {GYM_COLUMNS}
            "#
        ))
        .bind(&req.name)
        .bind(&req.address)
        .bind(req.latitude.unwrap_or(Decimal::ZERO))
        .bind(req.longitude.unwrap_or(Decimal::ZERO))
        .fetch_one(self.pool)
        .await?;

        Ok(gym)
    }

    /// Create a gym from an external place lookup. The unique index on
    /// place_id rejects concurrent double-saves that pass the pre-check.
    pub async fn create_from_place(
        &self,
        place_id: &str,
        req: &SaveFromPlaceRequest,
    ) -> Result<Gym> {
        let gym = sqlx::query_as::<_, Gym>(&format!(
            r#"
            INSERT INTO gyms (name, address, latitude, longitude, place_id, photo_reference)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {GYM_COLUMNS}
            "#
        ))
        .bind(&req.name)
        .bind(&req.address)
        .bind(req.latitude)
        .bind(req.longitude)
        .bind(place_id)
        .bind(&req.photo_reference)
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from)
        .map_err(|e| {
            if e.is_unique_violation() {
                StorageError::ConstraintViolation("Gym already saved for this place".to_string())
            } else {
                e
            }
        })?;

        Ok(gym)
    }

    pub async fn update(&self, existing: &Gym, req: &UpdateGymRequest) -> Result<Gym> {
        let gym = sqlx::query_as::<_, Gym>(&format!(
            r#"
            UPDATE gyms
            SET name = $2, address = $3, latitude = $4, longitude = $5, updated_at = now()
            WHERE gym_id = $1
            RETURNING {GYM_COLUMNS}
            "#
        ))
        .bind(existing.gym_id)
        .bind(req.name.as_deref().unwrap_or(&existing.name))
        .bind(req.address.as_deref().unwrap_or(&existing.address))
        .bind(req.latitude.unwrap_or(existing.latitude))
        .bind(req.longitude.unwrap_or(existing.longitude))
        .fetch_one(self.pool)
        .await?;

        Ok(gym)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM gyms WHERE gym_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
