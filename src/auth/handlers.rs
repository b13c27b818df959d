use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use tracing::{debug, error, info, instrument};

use crate::auth::auth::AuthUser;
use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::config::Config;
use crate::model::role::Role;
use crate::models::LoginRequest;
use crate::store::Store;

/// Checks credentials against the stored hash and answers with the account
/// (password withheld) plus a bearer token. A missing account, a wrong
/// password and an unrecognized role all get the same 401 so the response
/// does not leak which part failed.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = Object,
         example = json!({"user": {"id": "1", "username": "teacher1", "name": "John Smith"}, "token": "<jwt>"})),
        (status = 400, description = "Missing or empty fields", body = Object,
         example = json!({"error": "Missing required fields"})),
        (status = 401, description = "Unknown account, wrong password or unknown role", body = Object,
         example = json!({"error": "Invalid credentials"}))
    ),
    tag = "Auth"
)]
#[instrument(name = "auth_login", skip_all)]
pub async fn login(
    body: web::Json<LoginRequest>,
    store: web::Data<dyn Store>,
    config: web::Data<Config>,
) -> impl Responder {
    info!("Login request received");

    // Usernames match byte for byte; a padded username is simply unknown.
    let username = body.username.as_deref().unwrap_or("");
    let password = body.password.as_deref().unwrap_or("");
    let role_raw = body.role.as_deref().unwrap_or("");

    if username.is_empty() || password.is_empty() || role_raw.is_empty() {
        info!("Validation failed: missing login fields");
        return HttpResponse::BadRequest().json(json!({ "error": "Missing required fields" }));
    }

    let role = match role_raw.parse::<Role>() {
        Ok(role) => role,
        Err(_) => {
            info!(role = role_raw, "Unknown role in login request");
            return HttpResponse::Unauthorized().json(json!({ "error": "Invalid credentials" }));
        }
    };

    debug!("Fetching account record");

    match role {
        Role::Teacher => match store.teacher_by_username(username).await {
            Ok(Some(teacher)) => {
                if verify_password(password, &teacher.password).is_err() {
                    info!("Invalid credentials: password mismatch");
                    return HttpResponse::Unauthorized()
                        .json(json!({ "error": "Invalid credentials" }));
                }
                let token = generate_access_token(
                    &teacher.id,
                    &teacher.username,
                    Role::Teacher,
                    &config.jwt_secret,
                    config.access_token_ttl,
                );
                info!(user_id = %teacher.id, "Teacher login successful");
                HttpResponse::Ok().json(json!({ "user": teacher, "token": token }))
            }
            Ok(None) => {
                info!("Invalid credentials: no such teacher");
                HttpResponse::Unauthorized().json(json!({ "error": "Invalid credentials" }))
            }
            Err(e) => {
                error!(error = %e, "Store error during teacher login");
                HttpResponse::InternalServerError().json(json!({ "error": "Server error" }))
            }
        },
        Role::Admin => match store.admin_by_username(username).await {
            Ok(Some(admin)) => {
                if verify_password(password, &admin.password).is_err() {
                    info!("Invalid credentials: password mismatch");
                    return HttpResponse::Unauthorized()
                        .json(json!({ "error": "Invalid credentials" }));
                }
                let token = generate_access_token(
                    &admin.id,
                    &admin.username,
                    Role::Admin,
                    &config.jwt_secret,
                    config.access_token_ttl,
                );
                info!(user_id = %admin.id, "Admin login successful");
                HttpResponse::Ok().json(json!({ "user": admin, "token": token }))
            }
            Ok(None) => {
                info!("Invalid credentials: no such admin");
                HttpResponse::Unauthorized().json(json!({ "error": "Invalid credentials" }))
            }
            Err(e) => {
                error!(error = %e, "Store error during admin login");
                HttpResponse::InternalServerError().json(json!({ "error": "Server error" }))
            }
        },
    }
}

/// Re-resolves the caller against the store, so a deleted account stops
/// working even while its token is still within the expiry window.
#[utoipa::path(
    get,
    path = "/api/me",
    responses(
        (status = 200, description = "Current account", body = Object,
         example = json!({"user": {"id": "1", "username": "teacher1", "name": "John Smith"}})),
        (status = 401, description = "Token invalid or account deleted", body = Object,
         example = json!({"error": "Account no longer exists"}))
    ),
    security(("bearer_auth" = [])),
    tag = "Auth"
)]
pub async fn me(auth: AuthUser, store: web::Data<dyn Store>) -> impl Responder {
    let result = match auth.role {
        Role::Teacher => store
            .teacher_by_id(&auth.user_id)
            .await
            .map(|found| found.map(|teacher| json!({ "user": teacher }))),
        Role::Admin => store
            .admin_by_id(&auth.user_id)
            .await
            .map(|found| found.map(|admin| json!({ "user": admin }))),
    };

    match result {
        Ok(Some(body)) => HttpResponse::Ok().json(body),
        Ok(None) => {
            info!(user_id = %auth.user_id, "Token belongs to a deleted account");
            HttpResponse::Unauthorized().json(json!({ "error": "Account no longer exists" }))
        }
        Err(e) => {
            error!(error = %e, "Store error while resolving current account");
            HttpResponse::InternalServerError().json(json!({ "error": "Server error" }))
        }
    }
}
