use crate::handlers;
use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .route("/check-rank", web::route().to(handlers::check_rank))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(handlers::health_check))
                .route("/check-rank", web::route().to(handlers::check_rank)),
        );
}
