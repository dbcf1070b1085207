use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a city, belonging to exactly one country
#[derive(Debug, Clone, FromRow, serde::Serialize)]
pub struct City {
    pub id: Uuid,
    pub name: String,
    pub country_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
