use dotenvy::dotenv;
use std::env;
use tracing::Level;

/// Built-in signing secret for development runs without a JWT_SECRET.
/// Startup logs a warning whenever this one is in use.
pub const DEV_JWT_SECRET: &str = "dev-secret-change-me";

#[derive(Clone)]
pub struct Config {
    pub server_addr: String,
    /// "memory" keeps everything in process; any sqlite URL selects the
    /// durable store.
    pub database_url: String,
    pub jwt_secret: String,
    pub access_token_ttl: usize,

    // Rate limiting
    pub rate_login_per_min: u32,
    pub rate_protected_per_min: u32,

    pub api_prefix: String,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "memory".to_string()),
            jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| DEV_JWT_SECRET.to_string()),
            access_token_ttl: env::var("ACCESS_TOKEN_TTL")
                .unwrap_or_else(|_| "28800".to_string()) // default 8 h, one school day
                .parse()
                .unwrap(),

            rate_login_per_min: env::var("RATE_LOGIN_PER_MIN")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .unwrap(),
            rate_protected_per_min: env::var("RATE_PROTECTED_PER_MIN")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .unwrap(),

            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()),
            log_level: env::var("LOG_LEVEL")
                .ok()
                .and_then(|level| level.parse().ok())
                .unwrap_or(Level::DEBUG),
        }
    }

    pub fn jwt_secret_is_default(&self) -> bool {
        self.jwt_secret == DEV_JWT_SECRET
    }
}
