use std::env;
use std::io;

use academy_landing::db::{establish_connection_pool, run_pending_migrations};
use academy_landing::models::config::{DEFAULT_CONFIG_PATH, ServerConfig};
use academy_landing::repository::DieselRepository;
use academy_landing::routes;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = env::var("APP_CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let server_config = ServerConfig::load(&config_path).map_err(|e| {
        log::error!("Failed to load configuration from '{config_path}': {e}");
        io::Error::other(e)
    })?;

    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        log::error!("Failed to open database '{}': {e}", server_config.database_url);
        io::Error::other(e)
    })?;
    run_pending_migrations(&pool).map_err(|e| {
        log::error!("Failed to run migrations: {e}");
        io::Error::other(e)
    })?;

    let repo = web::Data::new(DieselRepository::new(pool));
    let static_dir = server_config.static_dir.clone();
    let bind_address = (server_config.address.clone(), server_config.port);

    log::info!(
        "Starting server at http://{}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        let app = App::new()
            .wrap(middleware::Logger::default())
            .app_data(repo.clone())
            .configure(routes::configure);
        match &static_dir {
            Some(dir) => app.service(Files::new("/", dir).index_file("index.html")),
            None => app,
        }
    })
    .bind(bind_address)?
    .run()
    .await
}
