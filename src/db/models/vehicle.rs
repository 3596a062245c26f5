use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::OffsetDateTime;
use validator::Validate;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub dealership_id: Uuid,
    pub client_id: Uuid,
    pub make: String,
    pub model: String,
    pub year: Option<i32>,
    pub plate: Option<String>,
    pub vin: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewVehicle {
    pub dealership_id: Uuid,
    pub client_id: Uuid,
    #[validate(length(min = 1, message = "Make must not be empty"))]
    pub make: String,
    #[validate(length(min = 1, message = "Model must not be empty"))]
    pub model: String,
    #[validate(range(min = 1900, max = 2100, message = "Year out of range"))]
    pub year: Option<i32>,
    pub plate: Option<String>,
    pub vin: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicle {
    pub make: Option<String>,
    pub model: Option<String>,
    #[validate(range(min = 1900, max = 2100, message = "Year out of range"))]
    pub year: Option<i32>,
    pub plate: Option<String>,
    pub vin: Option<String>,
}
