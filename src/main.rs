use actix_web::{web, App, HttpResponse, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::info;

use hms_backend::config::Config;
use hms_backend::db;
use hms_backend::repositories::user_repository::UserRepository;
use hms_backend::routes::routes::user_configure;
use hms_backend::services::user_service::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let pool = db::build_pool(&config.database_url).expect("Invalid DATABASE_URL");
    db::probe(&pool).await;

    let user_service = web::Data::new(UserService::new(UserRepository::new(pool.clone())));

    info!("Server running at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(user_service.clone())
            .route(
                "/",
                web::get().to(|| async { HttpResponse::Ok().body("Hello, world!") }),
            )
            .configure(user_configure)
    })
    .bind(&config.bind_addr)?
    .run()
    .await?;

    // Drain open connections before exit.
    pool.close().await;
    Ok(())
}
