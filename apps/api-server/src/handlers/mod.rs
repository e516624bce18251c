//! HTTP handlers and route configuration.

mod health;
mod posts;


use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::resource("/posts")
                .route(web::get().to(posts::list))
                .route(web::post().to(posts::create)),
        )
        .service(
            web::resource("/posts/{id}")
                .route(web::get().to(posts::get))
                .route(web::post().to(posts::update)),
        );
}
