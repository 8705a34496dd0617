use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use medgan_backend::{config::Config, routes, setup::db_setup, AppState};
use std::io;
use std::path::PathBuf;

/// A simple handler for the root URL.
async fn root_handler() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain").body("OK")
}

#[derive(Parser, Debug)]
#[command(name = "medgan_server", author, version, about = "Starts the MedGAN website API server.")]
struct Cli {
    /// Path to the .env configuration file.
    #[arg(long, required = true, value_name = "FILE")]
    env_file: PathBuf,
}

fn build_cors(allowed_origins: &str) -> Cors {
    let methods = vec!["GET", "POST", "PUT", "OPTIONS"];
    let headers = vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE];

    if allowed_origins.trim() == "*" {
        return Cors::default()
            .allow_any_origin()
            .allowed_methods(methods)
            .allowed_headers(headers)
            .max_age(3600);
    }

    let mut cors = Cors::default();
    for origin in allowed_origins.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        cors = cors.allowed_origin(origin);
    }
    cors.allowed_methods(methods).allowed_headers(headers).max_age(3600)
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env(&cli.env_file)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    env_logger::init_from_env(env_logger::Env::new().default_filter_or(&config.log_level));

    // Without a store the API still starts; data endpoints answer "not configured".
    let pool = match config.db_path() {
        Some(path) => match db_setup::open_pool(&path) {
            Ok(pool) => {
                log::info!("Using SQLite store at '{}'", path.display());
                Some(pool)
            }
            Err(e) => {
                log::error!("Failed to open SQLite store at '{}': {}", path.display(), e);
                None
            }
        },
        None => {
            log::warn!("DATABASE_PATH is not set. Data endpoints will report that the store is not configured.");
            None
        }
    };

    if config.admin_accept_ip.is_none() {
        log::warn!("ADMIN_ACCEPT_IP is not set. All admin endpoints will answer 403.");
    }

    let app_state = web::Data::new(AppState { pool });
    let config_data = web::Data::new(config.clone());

    let server_address = format!("{}:{}", config.web.host, config.web.port);
    log::info!("Server starting at http://{}", server_address);

    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&config.allowed_origins))
            .wrap(Logger::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("X-Frame-Options", "DENY"))
                    .add(("X-XSS-Protection", "1; mode=block")),
            )
            .app_data(config_data.clone())
            .app_data(app_state.clone())
            .configure(routes::config_api)
            .route("/", web::get().to(root_handler))
    })
    .bind(server_address)?
    .run()
    .await
}
