use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::role::Role;

/// Login body. Fields are optional so that absent and empty values can
/// share the same "missing required fields" rejection.
#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "teacher1")]
    pub username: Option<String>,
    #[schema(example = "teacher123")]
    pub password: Option<String>,
    #[schema(example = "teacher")]
    pub role: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Id of the teacher or admin this token was issued to.
    pub user_id: String,
    pub sub: String,
    pub role: Role,
    pub exp: usize,
    pub jti: String,
}
