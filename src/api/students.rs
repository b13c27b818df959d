use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use utoipa::IntoParams;

use crate::store::Store;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct StudentQuery {
    pub class_id: Option<String>,
}

/// Student roster, optionally narrowed to one class. An unknown classId
/// is not an error, just an empty list.
#[utoipa::path(
    get,
    path = "/api/students",
    params(StudentQuery),
    responses(
        (status = 200, description = "Students in seed order", body = Object,
         example = json!([{"id": "1", "name": "Alice Brown", "classId": "1"}]))
    ),
    security(("bearer_auth" = [])),
    tag = "Reference"
)]
pub async fn list_students(
    store: web::Data<dyn Store>,
    query: web::Query<StudentQuery>,
) -> actix_web::Result<impl Responder> {
    let class_id = query.class_id.as_deref().filter(|s| !s.is_empty());

    let result = match class_id {
        Some(class_id) => store.students_by_class(class_id).await,
        None => store.list_students().await,
    };

    match result {
        Ok(students) => Ok(HttpResponse::Ok().json(students)),
        Err(e) => {
            error!(error = %e, "Failed to list students");
            Ok(HttpResponse::InternalServerError().json(json!({ "error": "Server error" })))
        }
    }
}
