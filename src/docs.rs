use crate::api::absences::RecordAbsenceRequest;
use crate::api::teachers::{CreateTeacherRequest, UpdateTeacherRequest};
use crate::models::LoginRequest;
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "School Absence Tracking API",
        version = "1.0.0",
        description = r#"
## School Absence Tracking

This API powers an **absence tracking** system for a small school: teachers record student absences per class, date and lesson session, while admins monitor the data and manage teacher accounts.

### 🔹 Key Features
- **Absence Recording**
  - Teachers record absences for their own classes, one student/session at a time
- **Absence Monitoring**
  - Admins filter records by teacher, date range, class or student
- **Teacher Account Management**
  - Admins create, update, list and delete teacher accounts
- **Reference Data**
  - Class catalog and student roster for building selection UIs

### 🔐 Security
All endpoints except login are protected with **JWT Bearer authentication**.
The role inside the token decides what a caller may do: **teachers** record and see their own absences, **admins** see everything and manage accounts.

### 📦 Response Format
- JSON-based RESTful responses
- Every error is a JSON object with a single `error` string

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::auth::handlers::login,
        crate::auth::handlers::me,

        crate::api::absences::record_absence,
        crate::api::absences::list_absences,

        crate::api::classes::list_classes,
        crate::api::students::list_students,

        crate::api::teachers::list_teachers,
        crate::api::teachers::create_teacher,
        crate::api::teachers::update_teacher,
        crate::api::teachers::delete_teacher
    ),
    components(
        schemas(
            LoginRequest,
            RecordAbsenceRequest,
            CreateTeacherRequest,
            UpdateTeacherRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Login and current identity"),
        (name = "Absences", description = "Absence recording and monitoring APIs"),
        (name = "Teachers", description = "Teacher account management APIs"),
        (name = "Reference", description = "Class and student lookup APIs"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
