use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use matrimony_match::config::{LoggingSettings, Settings};
use matrimony_match::routes::{self, AppState};
use matrimony_match::services::{CredentialHasher, TokenService};
use matrimony_match::RecordStore;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging);

    info!("Starting Matrimony Match service...");

    if settings.uses_dev_secret() {
        warn!("Using the built-in development JWT secret; set JWT_SECRET in production");
    }

    let hasher = CredentialHasher::new(settings.auth.hash_memory_kib, settings.auth.hash_iterations)
        .map_err(|e| {
            error!("Invalid password hashing parameters: {}", e);
            std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
        })?;
    let tokens = TokenService::new(&settings.auth.jwt_secret, settings.auth.token_ttl_hours);

    // One store per process; every worker shares it
    let store = Arc::new(RecordStore::new());
    let app_state = AppState::new(store, hasher, tokens);

    info!("Record store initialized (token ttl: {}h)", settings.auth.token_ttl_hours);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .configure(routes::configure_extractors)
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
