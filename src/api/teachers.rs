use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use utoipa::{IntoParams, ToSchema};

use crate::auth::auth::AuthUser;
use crate::auth::password::hash_password;
use crate::model::teacher::Teacher;
use crate::store::{Store, StoreError, TeacherPatch};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTeacherRequest {
    #[schema(example = "teacher3")]
    pub username: Option<String>,
    #[schema(example = "s3cret")]
    pub password: Option<String>,
    #[schema(example = "Paula White")]
    pub name: Option<String>,
}

/// Update body; `id` selects the record, every other field is optional
/// and omitted fields keep their stored value.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTeacherRequest {
    #[schema(example = "1")]
    pub id: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct DeleteTeacherQuery {
    pub id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/teachers",
    responses(
        (status = 200, description = "All teacher accounts, passwords withheld", body = Object,
         example = json!([{"id": "1", "username": "teacher1", "name": "John Smith"}])),
        (status = 403, description = "Caller is not an admin", body = Object,
         example = json!({"error": "Admin access required"}))
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
pub async fn list_teachers(
    auth: AuthUser,
    store: web::Data<dyn Store>,
) -> actix_web::Result<impl Responder> {
    auth.require_admin()?;

    match store.list_teachers().await {
        Ok(teachers) => Ok(HttpResponse::Ok().json(teachers)),
        Err(e) => {
            error!(error = %e, "Failed to list teachers");
            Ok(HttpResponse::InternalServerError().json(json!({ "error": "Server error" })))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/teachers",
    request_body = CreateTeacherRequest,
    responses(
        (status = 200, description = "Created account, password withheld", body = Object,
         example = json!({"id": "7f5f0a5e-6c4e-4a54-9ad2-5b3c7a2e9f31", "username": "teacher3", "name": "Paula White"})),
        (status = 400, description = "Missing or empty fields", body = Object,
         example = json!({"error": "Missing required fields"})),
        (status = 409, description = "Username in use", body = Object,
         example = json!({"error": "Username already taken"}))
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
pub async fn create_teacher(
    auth: AuthUser,
    store: web::Data<dyn Store>,
    body: web::Json<CreateTeacherRequest>,
) -> actix_web::Result<impl Responder> {
    auth.require_admin()?;

    // Stored verbatim; login compares usernames byte for byte.
    let username = body.username.as_deref().unwrap_or("");
    let password = body.password.as_deref().unwrap_or("");
    let name = body.name.as_deref().unwrap_or("");

    if username.is_empty() || password.is_empty() || name.is_empty() {
        return Ok(
            HttpResponse::BadRequest().json(json!({ "error": "Missing required fields" }))
        );
    }

    let teacher = Teacher::new(username, &hash_password(password), name);
    match store.insert_teacher(teacher.clone()).await {
        Ok(()) => {
            info!(teacher_id = %teacher.id, "Teacher account created");
            Ok(HttpResponse::Ok().json(teacher))
        }
        Err(StoreError::UsernameTaken) => {
            Ok(HttpResponse::Conflict().json(json!({ "error": "Username already taken" })))
        }
        Err(e) => {
            error!(error = %e, "Failed to create teacher account");
            Ok(HttpResponse::InternalServerError().json(json!({ "error": "Server error" })))
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/teachers",
    request_body = UpdateTeacherRequest,
    responses(
        (status = 200, description = "Updated account, password withheld", body = Object,
         example = json!({"id": "1", "username": "teacher1", "name": "Renamed Teacher"})),
        (status = 400, description = "No id in the body", body = Object,
         example = json!({"error": "Teacher ID required"})),
        (status = 404, description = "No such teacher", body = Object,
         example = json!({"error": "Teacher not found"})),
        (status = 409, description = "Username in use", body = Object,
         example = json!({"error": "Username already taken"}))
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
pub async fn update_teacher(
    auth: AuthUser,
    store: web::Data<dyn Store>,
    body: web::Json<UpdateTeacherRequest>,
) -> actix_web::Result<impl Responder> {
    auth.require_admin()?;

    let body = body.into_inner();
    let id = body.id.as_deref().unwrap_or("");
    if id.is_empty() {
        return Ok(HttpResponse::BadRequest().json(json!({ "error": "Teacher ID required" })));
    }

    let patch = TeacherPatch {
        username: body.username,
        password: body.password.map(|p| hash_password(&p)),
        name: body.name,
    };

    match store.update_teacher(id, patch).await {
        Ok(updated) => {
            info!(teacher_id = id, "Teacher account updated");
            Ok(HttpResponse::Ok().json(updated))
        }
        Err(StoreError::NotFound) => {
            Ok(HttpResponse::NotFound().json(json!({ "error": "Teacher not found" })))
        }
        Err(StoreError::UsernameTaken) => {
            Ok(HttpResponse::Conflict().json(json!({ "error": "Username already taken" })))
        }
        Err(e) => {
            error!(error = %e, teacher_id = id, "Failed to update teacher account");
            Ok(HttpResponse::InternalServerError().json(json!({ "error": "Server error" })))
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/teachers",
    params(DeleteTeacherQuery),
    responses(
        (status = 200, description = "Account removed; absence records stay", body = Object,
         example = json!({"success": true})),
        (status = 400, description = "No id in the query string", body = Object,
         example = json!({"error": "Teacher ID required"})),
        (status = 404, description = "No such teacher", body = Object,
         example = json!({"error": "Teacher not found"}))
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
pub async fn delete_teacher(
    auth: AuthUser,
    store: web::Data<dyn Store>,
    query: web::Query<DeleteTeacherQuery>,
) -> actix_web::Result<impl Responder> {
    auth.require_admin()?;

    let id = query.id.as_deref().unwrap_or("");
    if id.is_empty() {
        return Ok(HttpResponse::BadRequest().json(json!({ "error": "Teacher ID required" })));
    }

    match store.delete_teacher(id).await {
        Ok(()) => {
            info!(teacher_id = id, "Teacher account deleted");
            Ok(HttpResponse::Ok().json(json!({ "success": true })))
        }
        Err(StoreError::NotFound) => {
            Ok(HttpResponse::NotFound().json(json!({ "error": "Teacher not found" })))
        }
        Err(e) => {
            error!(error = %e, teacher_id = id, "Failed to delete teacher account");
            Ok(HttpResponse::InternalServerError().json(json!({ "error": "Server error" })))
        }
    }
}
