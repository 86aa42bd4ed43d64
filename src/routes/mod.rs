pub mod auth;
pub mod health;
pub mod tasks;
pub mod users;

use actix_web::web;

/// Registers every `/api` endpoint. The caller mounts this inside a scope wrapped by
/// `AuthMiddleware` and provides `web::Data<dyn TaskUsecase>`, `web::Data<dyn UserUsecase>`
/// and `web::Data<dyn TokenService>`.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(auth::register)
        .service(auth::login)
        .service(users::get_users)
        .service(
            web::scope("/tasks")
                .service(tasks::get_tasks)
                .service(tasks::create_task)
                .service(tasks::get_task)
                .service(tasks::update_task)
                .service(tasks::delete_task),
        );
}
