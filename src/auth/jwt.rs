use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::model::role::Role;
use crate::models::Claims;

fn now() -> usize {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize
}

/// Issues a signed bearer token for one authenticated account. The role
/// travels inside the claims, so the server never trusts a role sent by
/// the client after login.
pub fn generate_access_token(
    user_id: &str,
    username: &str,
    role: Role,
    secret: &str,
    ttl_secs: usize,
) -> String {
    let claims = Claims {
        user_id: user_id.to_string(),
        sub: username.to_string(),
        role,
        exp: now() + ttl_secs,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())
}
