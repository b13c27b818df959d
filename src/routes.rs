use crate::{
    api::{absences, classes, students, teachers},
    auth::{handlers, middleware::auth_middleware},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{HttpResponse, error, middleware::from_fn, web};
use serde_json::json;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    let login_limiter = build_limiter(config.rate_login_per_min);
    let protected_limiter = build_limiter(config.rate_protected_per_min);

    // Malformed JSON gets the same error shape as every other failure.
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(json!({ "error": "Invalid JSON body" })),
        )
        .into()
    }));

    // Public routes
    cfg.service(
        web::scope("/auth").service(
            web::resource("/login")
                .wrap(login_limiter)
                .route(web::post().to(handlers::login)),
        ),
    );

    // Protected routes
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(from_fn(auth_middleware)) // authentication
            .wrap(protected_limiter) // rate limiting
            .service(web::resource("/me").route(web::get().to(handlers::me)))
            .service(
                web::resource("/absences")
                    .route(web::get().to(absences::list_absences))
                    .route(web::post().to(absences::record_absence)),
            )
            .service(web::resource("/classes").route(web::get().to(classes::list_classes)))
            .service(web::resource("/students").route(web::get().to(students::list_students)))
            .service(
                web::resource("/teachers")
                    .route(web::get().to(teachers::list_teachers))
                    .route(web::post().to(teachers::create_teacher))
                    .route(web::put().to(teachers::update_teacher))
                    .route(web::delete().to(teachers::delete_teacher)),
            ),
    );
}

// LOGIN
//  └─ access_token (8 h default), role carried in the claims
//
// API REQUEST
//  └─ Authorization: Bearer access_token
