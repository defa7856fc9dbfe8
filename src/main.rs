use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use car_rental_admin::config::ServerConfig;
use car_rental_admin::db::establish_connection_pool;
use car_rental_admin::repository::DieselRepository;
use car_rental_admin::routes::{self, json_config, query_config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let config = ServerConfig::from_env();

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    log::info!("Listening on {}:{}", config.address, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(json_config())
            .app_data(query_config())
            .app_data(web::Data::new(repo.clone()))
            .configure(routes::configure)
    })
    .bind((config.address.as_str(), config.port))?
    .run()
    .await
}
