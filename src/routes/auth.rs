use crate::{
    auth::{AuthResponse, LoginRequest, RegisterRequest},
    error::AppError,
    models::{User, ROLE_USER},
    usecases::UserUsecase,
};
use actix_web::{post, web, HttpResponse, Responder};
use validator::Validate;

/// Register a new user
///
/// Creates a new account and returns it (without the password hash).
///
/// ## Responses:
/// - `201 Created`: the stored user.
/// - `400 Bad Request`: malformed JSON or username already taken.
/// - `422 Unprocessable Entity`: validation failed.
#[post("/register")]
pub async fn register(
    users: web::Data<dyn UserUsecase>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    register_data.validate()?;

    let RegisterRequest {
        username,
        password,
        role,
    } = register_data.into_inner();
    let role = role.unwrap_or_else(|| ROLE_USER.to_string());

    let user = users.register(User::new(username, password, role)).await?;

    Ok(HttpResponse::Created().json(user))
}

/// Login user
///
/// Authenticates a user and returns a JWT. Unknown usernames and wrong passwords both
/// answer `401 Unauthorized` with the same message.
#[post("/login")]
pub async fn login(
    users: web::Data<dyn UserUsecase>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    login_data.validate()?;

    let LoginRequest { username, password } = login_data.into_inner();
    let token = users
        .login(username, password)
        .await
        .map_err(|e| match e {
            AppError::NotFound(msg) => AppError::Unauthorized(msg),
            other => other,
        })?;

    Ok(HttpResponse::Ok().json(AuthResponse { token }))
}
