#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::web::Data;
use actix_web::{App, test};
use serde_json::{Value, json};

use absentia::config::Config;
use absentia::routes;
use absentia::store::Store;
use absentia::store::memory::MemStore;

/// Peer address stamped onto every test request; the login rate limiter
/// keys on the peer IP and rejects requests that have none.
const TEST_PEER: &str = "127.0.0.1:50000";

/// Config with generous rate limits so ordinary tests never trip the
/// limiter; the rate-limit tests pass their own tightened `Config` to
/// [`spawn_app_with`].
pub fn test_config() -> Config {
    Config {
        server_addr: "127.0.0.1:0".to_string(),
        database_url: "memory".to_string(),
        jwt_secret: "test-secret".to_string(),
        access_token_ttl: 3600,
        rate_login_per_min: 10_000,
        rate_protected_per_min: 10_000,
        api_prefix: "/api".to_string(),
        log_level: tracing::Level::DEBUG,
    }
}

/// Builds the app on a freshly seeded in-memory store, with the same
/// routing and middleware stack the server binary uses.
pub async fn spawn_app()
-> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error> {
    spawn_app_with(test_config()).await
}

/// Same app, but under the caller's config.
pub async fn spawn_app_with(
    config: Config,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error> {
    let store: Arc<dyn Store> = Arc::new(MemStore::with_seed_data());
    test::init_service(
        App::new()
            .app_data(Data::from(store))
            .app_data(Data::new(config.clone()))
            .configure(move |cfg| routes::configure(cfg, config)),
    )
    .await
}

fn peer() -> SocketAddr {
    TEST_PEER.parse().unwrap()
}

/// Sends the request and returns `(status, parsed JSON body)`. A body that
/// is not JSON comes back as `Value::Null`.
pub async fn call<S, B>(app: &S, req: test::TestRequest) -> (u16, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = test::call_service(app, req.peer_addr(peer()).to_request()).await;
    let status = res.status().as_u16();
    let bytes = test::read_body(res).await;
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn get(path: &str, token: &str) -> test::TestRequest {
    test::TestRequest::get()
        .uri(path)
        .insert_header(("Authorization", format!("Bearer {token}")))
}

pub fn post_json(path: &str, token: &str, body: Value) -> test::TestRequest {
    test::TestRequest::post()
        .uri(path)
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(body)
}

pub fn put_json(path: &str, token: &str, body: Value) -> test::TestRequest {
    test::TestRequest::put()
        .uri(path)
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(body)
}

pub fn delete(path: &str, token: &str) -> test::TestRequest {
    test::TestRequest::delete()
        .uri(path)
        .insert_header(("Authorization", format!("Bearer {token}")))
}

/// Logs in through the real endpoint and returns the bearer token.
pub async fn login_token<S, B>(app: &S, username: &str, password: &str, role: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post().uri("/auth/login").set_json(json!({
        "username": username,
        "password": password,
        "role": role,
    }));
    let (status, body) = call(app, req).await;
    assert_eq!(status, 200, "login for {username} failed: {body}");
    body["token"]
        .as_str()
        .expect("login response carries a token")
        .to_string()
}

/// Token for the seeded teacher account `teacher1`.
pub async fn teacher_token<S, B>(app: &S) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    login_token(app, "teacher1", "teacher123", "teacher").await
}

/// Token for the seeded principal account `admin`.
pub async fn admin_token<S, B>(app: &S) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    login_token(app, "admin", "admin123", "admin").await
}
