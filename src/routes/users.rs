use crate::{auth::AuthenticatedUser, error::AppError, usecases::UserUsecase};
use actix_web::{get, web, HttpResponse, Responder};

/// Lists every registered user. Password hashes are never included.
#[get("/users")]
pub async fn get_users(
    users: web::Data<dyn UserUsecase>,
    caller: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    log::debug!(
        "user '{}' ({}) listed accounts",
        caller.username(),
        caller.role()
    );
    let users = users.get_users().await?;
    Ok(HttpResponse::Ok().json(users))
}
