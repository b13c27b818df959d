//! Read-only reference data: the class catalog and the student roster.

mod common;

use actix_web::test;
use common::{admin_token, call, get, spawn_app, teacher_token};

#[actix_web::test]
async fn classes_are_listed_in_seed_order_for_any_role() {
    let app = spawn_app().await;

    for token in [teacher_token(&app).await, admin_token(&app).await] {
        let (status, body) = call(&app, get("/api/classes", &token)).await;
        assert_eq!(status, 200);

        let classes = body.as_array().unwrap();
        assert_eq!(classes.len(), 6);
        assert_eq!(classes[0]["name"], "Class 1");
        assert_eq!(classes[0]["year"], "1st Year");
        assert_eq!(classes[5]["name"], "Class 2");
        assert_eq!(classes[5]["year"], "3rd Year");

        let ids: Vec<&str> = classes.iter().map(|c| c["id"].as_str().unwrap()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);
    }
}

#[actix_web::test]
async fn the_full_roster_has_eighteen_students() {
    let app = spawn_app().await;
    let token = teacher_token(&app).await;

    let (status, body) = call(&app, get("/api/students", &token)).await;

    assert_eq!(status, 200);
    let students = body.as_array().unwrap();
    assert_eq!(students.len(), 18);
    assert_eq!(students[0]["name"], "Alice Brown");
    assert_eq!(students[0]["classId"], "1");
    assert_eq!(students[17]["name"], "Rachel Rodriguez");
}

#[actix_web::test]
async fn the_roster_filters_by_class_in_seed_order() {
    let app = spawn_app().await;
    let token = teacher_token(&app).await;

    let (status, body) = call(&app, get("/api/students?classId=1", &token)).await;
    assert_eq!(status, 200);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["1", "2", "3", "4", "5"]);

    // Two-student class.
    let (status, body) = call(&app, get("/api/students?classId=4", &token)).await;
    assert_eq!(status, 200);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn empty_and_unknown_class_filters_behave_gracefully() {
    let app = spawn_app().await;
    let token = teacher_token(&app).await;

    // Empty string falls back to the full roster.
    let (status, body) = call(&app, get("/api/students?classId=", &token)).await;
    assert_eq!(status, 200);
    assert_eq!(body.as_array().unwrap().len(), 18);

    // An unknown class is an empty list, not an error.
    let (status, body) = call(&app, get("/api/students?classId=99", &token)).await;
    assert_eq!(status, 200);
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn reference_data_requires_authentication() {
    let app = spawn_app().await;

    let (status, _) = call(&app, test::TestRequest::get().uri("/api/classes")).await;
    assert_eq!(status, 401);

    let (status, _) = call(&app, test::TestRequest::get().uri("/api/students")).await;
    assert_eq!(status, 401);
}
