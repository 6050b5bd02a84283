// Route exports
pub mod chat;

pub use chat::AppState;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(chat::configure)
        .default_service(web::route().to(chat::not_found));
}
