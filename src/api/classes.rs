use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use tracing::error;

use crate::store::Store;

/// Class catalog, in seed order. Any authenticated role may read it.
#[utoipa::path(
    get,
    path = "/api/classes",
    responses(
        (status = 200, description = "All classes", body = Object,
         example = json!([{"id": "1", "name": "Class 1", "year": "1st Year"}]))
    ),
    security(("bearer_auth" = [])),
    tag = "Reference"
)]
pub async fn list_classes(store: web::Data<dyn Store>) -> actix_web::Result<impl Responder> {
    match store.list_classes().await {
        Ok(classes) => Ok(HttpResponse::Ok().json(classes)),
        Err(e) => {
            error!(error = %e, "Failed to list classes");
            Ok(HttpResponse::InternalServerError().json(json!({ "error": "Server error" })))
        }
    }
}
