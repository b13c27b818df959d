use serde::Serialize;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Class {
    pub id: String,
    pub name: String,
    pub year: String,
}
