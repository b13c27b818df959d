use serde::Serialize;
use uuid::Uuid;

/// A teaching staff account. The password field holds an argon2 hash and
/// is never serialized into responses.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Teacher {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
}

impl Teacher {
    pub fn new(username: &str, password_hash: &str, name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            password: password_hash.to_string(),
            name: name.to_string(),
        }
    }
}
