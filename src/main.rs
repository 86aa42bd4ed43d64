use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use sqlx::postgres::PgPoolOptions;

use taskdesk::auth::{AuthMiddleware, BcryptPasswordService, JwtService, PasswordService, TokenService};
use taskdesk::config::Config;
use taskdesk::repository::{PgTaskRepository, PgUserRepository};
use taskdesk::routes::{self, health};
use taskdesk::usecases::{TaskManager, TaskUsecase, UserManager, UserUsecase};

fn startup_error(context: &str, err: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(|e| startup_error("invalid configuration", e))?;

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .map_err(|e| startup_error("failed to connect to database", e))?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| startup_error("failed to run migrations", e))?;

    let tokens: Arc<dyn TokenService> = Arc::new(JwtService::new(
        &config.jwt_secret,
        config.jwt_expiration_hours,
    ));
    let passwords: Arc<dyn PasswordService> =
        Arc::new(BcryptPasswordService::new(config.bcrypt_cost));
    let tasks: Arc<dyn TaskUsecase> =
        Arc::new(TaskManager::new(Arc::new(PgTaskRepository::new(pool.clone()))));
    let users: Arc<dyn UserUsecase> = Arc::new(UserManager::new(
        Arc::new(PgUserRepository::new(pool)),
        passwords,
        tokens.clone(),
    ));

    log::info!("Starting Taskdesk server at {}", config.server_url());

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(tasks.clone()))
            .app_data(web::Data::from(users.clone()))
            .app_data(web::Data::from(tokens.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(health::health)
            .service(
                web::scope("/api")
                    .wrap(AuthMiddleware)
                    .configure(routes::config),
            )
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
