//! Admin-side teacher account management: list, create, update, delete.

mod common;

use actix_web::test;
use common::{
    admin_token, call, delete, get, login_token, post_json, put_json, spawn_app, teacher_token,
};
use serde_json::json;

// ---------------------------------------------------------------------------
// Role gating
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn teacher_management_is_admin_only() {
    let app = spawn_app().await;
    let token = teacher_token(&app).await;

    let (status, body) = call(&app, get("/api/teachers", &token)).await;
    assert_eq!(status, 403);
    assert_eq!(body["error"], "Admin access required");

    let create = post_json(
        "/api/teachers",
        &token,
        json!({ "username": "x", "password": "y", "name": "z" }),
    );
    let (status, _) = call(&app, create).await;
    assert_eq!(status, 403);

    let update = put_json("/api/teachers", &token, json!({ "id": "1", "name": "Nope" }));
    let (status, _) = call(&app, update).await;
    assert_eq!(status, 403);

    let (status, _) = call(&app, delete("/api/teachers?id=1", &token)).await;
    assert_eq!(status, 403);
}

// ---------------------------------------------------------------------------
// List + create
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn list_returns_seeded_teachers_without_passwords() {
    let app = spawn_app().await;
    let admin = admin_token(&app).await;

    let (status, body) = call(&app, get("/api/teachers", &admin)).await;

    assert_eq!(status, 200);
    let teachers = body.as_array().unwrap();
    assert_eq!(teachers.len(), 2);
    assert_eq!(teachers[0]["username"], "teacher1");
    assert_eq!(teachers[1]["username"], "teacher2");
    for teacher in teachers {
        assert!(teacher.get("password").is_none());
    }
}

#[actix_web::test]
async fn created_teacher_gets_a_generated_id_and_can_log_in() {
    let app = spawn_app().await;
    let admin = admin_token(&app).await;

    let req = post_json(
        "/api/teachers",
        &admin,
        json!({ "username": "teacher3", "password": "pw12345", "name": "New Teacher" }),
    );
    let (status, body) = call(&app, req).await;

    assert_eq!(status, 200);
    let id = body["id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert_ne!(id, "1");
    assert_ne!(id, "2");
    assert!(body.get("password").is_none());

    let (status, body) = call(&app, get("/api/teachers", &admin)).await;
    assert_eq!(status, 200);
    assert_eq!(body.as_array().unwrap().len(), 3);

    // The stored password hash must verify against the plaintext.
    login_token(&app, "teacher3", "pw12345", "teacher").await;
}

#[actix_web::test]
async fn create_rejects_missing_fields_and_duplicate_usernames() {
    let app = spawn_app().await;
    let admin = admin_token(&app).await;

    let incomplete = post_json(
        "/api/teachers",
        &admin,
        json!({ "username": "teacher4", "name": "No Password" }),
    );
    let (status, body) = call(&app, incomplete).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Missing required fields");

    let taken = post_json(
        "/api/teachers",
        &admin,
        json!({ "username": "teacher1", "password": "pw12345", "name": "Impostor" }),
    );
    let (status, body) = call(&app, taken).await;
    assert_eq!(status, 409);
    assert_eq!(body["error"], "Username already taken");
}

#[actix_web::test]
async fn created_usernames_are_stored_verbatim() {
    let app = spawn_app().await;
    let admin = admin_token(&app).await;

    let req = post_json(
        "/api/teachers",
        &admin,
        json!({ "username": " padded ", "password": "pw12345", "name": "Padded Name" }),
    );
    let (status, body) = call(&app, req).await;
    assert_eq!(status, 200);
    assert_eq!(body["username"], " padded ");

    // Only the exact byte sequence logs in.
    login_token(&app, " padded ", "pw12345", "teacher").await;

    let trimmed = test::TestRequest::post().uri("/auth/login").set_json(json!({
        "username": "padded",
        "password": "pw12345",
        "role": "teacher",
    }));
    let (status, body) = call(&app, trimmed).await;
    assert_eq!(status, 401);
    assert_eq!(body["error"], "Invalid credentials");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn update_changes_only_the_supplied_fields() {
    let app = spawn_app().await;
    let admin = admin_token(&app).await;

    let req = put_json("/api/teachers", &admin, json!({ "id": "1", "name": "Renamed Teacher" }));
    let (status, body) = call(&app, req).await;

    assert_eq!(status, 200);
    assert_eq!(body["id"], "1");
    assert_eq!(body["name"], "Renamed Teacher");
    assert_eq!(body["username"], "teacher1");

    // The untouched password still verifies.
    login_token(&app, "teacher1", "teacher123", "teacher").await;
}

#[actix_web::test]
async fn update_rehashes_a_new_password() {
    let app = spawn_app().await;
    let admin = admin_token(&app).await;

    let req = put_json("/api/teachers", &admin, json!({ "id": "1", "password": "changed1" }));
    let (status, _) = call(&app, req).await;
    assert_eq!(status, 200);

    login_token(&app, "teacher1", "changed1", "teacher").await;

    let old = serde_json::json!({
        "username": "teacher1",
        "password": "teacher123",
        "role": "teacher",
    });
    let req = actix_web::test::TestRequest::post().uri("/auth/login").set_json(old);
    let (status, _) = call(&app, req).await;
    assert_eq!(status, 401);
}

#[actix_web::test]
async fn update_without_id_is_400_and_unknown_id_is_404() {
    let app = spawn_app().await;
    let admin = admin_token(&app).await;

    let no_id = put_json("/api/teachers", &admin, json!({ "name": "Whoever" }));
    let (status, body) = call(&app, no_id).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Teacher ID required");

    let unknown = put_json("/api/teachers", &admin, json!({ "id": "999", "name": "Ghost" }));
    let (status, body) = call(&app, unknown).await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Teacher not found");

    // Nothing changed along the way.
    let (_, body) = call(&app, get("/api/teachers", &admin)).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn update_cannot_steal_an_existing_username() {
    let app = spawn_app().await;
    let admin = admin_token(&app).await;

    let req = put_json("/api/teachers", &admin, json!({ "id": "1", "username": "teacher2" }));
    let (status, body) = call(&app, req).await;

    assert_eq!(status, 409);
    assert_eq!(body["error"], "Username already taken");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn delete_removes_the_account_exactly_once() {
    let app = spawn_app().await;
    let admin = admin_token(&app).await;

    let (status, body) = call(&app, delete("/api/teachers?id=2", &admin)).await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);

    let (_, body) = call(&app, get("/api/teachers", &admin)).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = call(&app, delete("/api/teachers?id=2", &admin)).await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Teacher not found");
}

#[actix_web::test]
async fn delete_without_an_id_is_400() {
    let app = spawn_app().await;
    let admin = admin_token(&app).await;

    let (status, body) = call(&app, delete("/api/teachers", &admin)).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Teacher ID required");

    let (status, _) = call(&app, delete("/api/teachers?id=", &admin)).await;
    assert_eq!(status, 400);
}
