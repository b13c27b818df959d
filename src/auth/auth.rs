use actix_web::{FromRequest, HttpMessage, HttpRequest, HttpResponse, dev::Payload, error};
use futures::future::{Ready, ready};
use serde_json::json;

use crate::model::role::Role;

fn unauthorized(message: &'static str) -> actix_web::Error {
    error::InternalError::from_response(
        message,
        HttpResponse::Unauthorized().json(json!({ "error": message })),
    )
    .into()
}

/// The authenticated caller, as placed into request extensions by the auth
/// middleware. Handlers take this as an extractor and get a guaranteed
/// identity; the extractor only fails on routes the middleware never saw.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
    pub username: String,
    pub role: Role,
}

impl FromRequest for AuthUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<AuthUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(unauthorized("Missing authentication"))),
        }
    }
}

fn forbidden(message: &'static str) -> actix_web::Error {
    error::InternalError::from_response(
        message,
        HttpResponse::Forbidden().json(json!({ "error": message })),
    )
    .into()
}

impl AuthUser {
    pub fn require_admin(&self) -> actix_web::Result<()> {
        if self.role == Role::Admin {
            Ok(())
        } else {
            Err(forbidden("Admin access required"))
        }
    }

    pub fn require_teacher(&self) -> actix_web::Result<()> {
        if self.role == Role::Teacher {
            Ok(())
        } else {
            Err(forbidden("Teacher access required"))
        }
    }
}
