use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a country, the root of the location hierarchy
#[derive(Debug, Clone, FromRow, serde::Serialize)]
pub struct Country {
    pub id: Uuid,
    pub name: String,
    pub iso2: String,
    pub phone_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
