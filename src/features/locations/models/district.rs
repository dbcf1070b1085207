use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a district.
///
/// country_id is denormalized from the parent city so the full
/// (country, city, district) triple can be checked in one query.
#[derive(Debug, Clone, FromRow, serde::Serialize)]
pub struct District {
    pub id: Uuid,
    pub name: String,
    pub city_id: Uuid,
    pub country_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
