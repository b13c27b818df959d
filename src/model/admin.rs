use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString, sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum AdminRole {
    Principal,
    Supervisor,
    Pedagogical,
}

/// An administrative account. Seeded at startup; no management endpoints
/// exist for admins.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Admin {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
    pub role: AdminRole,
}
