use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::BoxBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
    web::Data,
};
use serde_json::json;
use tracing::debug;

use crate::auth::auth::AuthUser;
use crate::auth::jwt::verify_token;
use crate::config::Config;

/// Validates the bearer token on every protected route and stashes the
/// caller's identity in request extensions for the handlers.
pub async fn auth_middleware(
    req: ServiceRequest,
    next: Next<BoxBody>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let config = match req.app_data::<Data<Config>>() {
        Some(config) => config.clone(),
        None => {
            return Err(actix_web::error::ErrorInternalServerError(
                "App config missing",
            ));
        }
    };

    let header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .map(str::to_owned);

    let Some(header) = header else {
        let resp =
            HttpResponse::Unauthorized().json(json!({ "error": "Missing Authorization header" }));
        return Ok(req.into_response(resp));
    };

    let Some(token) = header.strip_prefix("Bearer ") else {
        let resp =
            HttpResponse::Unauthorized().json(json!({ "error": "Invalid Authorization header" }));
        return Ok(req.into_response(resp));
    };

    match verify_token(token, &config.jwt_secret) {
        Ok(claims) => {
            req.extensions_mut().insert(AuthUser {
                user_id: claims.user_id,
                username: claims.sub,
                role: claims.role,
            });
            next.call(req).await
        }
        Err(reason) => {
            debug!(reason = %reason, "Rejected bearer token");
            let resp =
                HttpResponse::Unauthorized().json(json!({ "error": "Invalid or expired token" }));
            Ok(req.into_response(resp))
        }
    }
}
