use actix_web::web;

pub mod health;
pub mod sessions;

/// Register every route. Middleware is applied by the caller (`main.rs`
/// wraps the whole `App`), so tests can mount this bare.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").configure(health::configure_routes));
    cfg.service(web::scope("/api/sessions").configure(sessions::configure_routes));
}
