use actix_web::web;

use super::users::user_handlers;

pub fn user_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .route("/add", web::post().to(user_handlers::add_user))
            .route("/get", web::get().to(user_handlers::get_users)),
    );
}
