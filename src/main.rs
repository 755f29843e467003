use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use blood_match::config::Settings;
use blood_match::core::Matcher;
use blood_match::routes::{self, AppState};
use blood_match::services::{load_seed_file, seed_store, DonorStore, InMemoryDonorStore, PostgresClient};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

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

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting Blood Match donor search service...");

    let store: Arc<dyn DonorStore> = match &settings.database.url {
        Some(url) => {
            let db_max_conn = settings.database.max_connections.unwrap_or(10);
            let postgres = PostgresClient::from_settings(
                url,
                Some(db_max_conn),
                settings.database.min_connections,
                settings.database.acquire_timeout_secs,
                settings.database.idle_timeout_secs,
            )
            .await
            .map_err(|e| {
                error!("Failed to connect to PostgreSQL: {}", e);
                std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
            })?;

            info!("PostgreSQL donor store initialized (max: {} connections)", db_max_conn);
            Arc::new(postgres)
        }
        None => {
            info!("No database URL configured, using in-memory donor store");
            Arc::new(InMemoryDonorStore::new())
        }
    };

    match &settings.seed.file {
        Some(path) => {
            let donors = load_seed_file(path).map_err(|e| {
                error!("Failed to load seed file {}: {}", path, e);
                std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
            })?;
            let written = seed_store(store.as_ref(), &donors).await.map_err(|e| {
                error!("Failed to seed donor store from {}: {}", path, e);
                std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
            })?;
            info!("Seeded {} donors from {}", written, path);
        }
        None if settings.database.url.is_none() => {
            warn!(
                "In-memory donor store is empty and no seed file is configured; \
                 searches will return no donors until seed.file or DATABASE_URL is set"
            );
        }
        None => {}
    }

    let matcher = Matcher::new(settings.matching.scoring_rules())
        .with_limits(settings.matching.default_limit, settings.matching.max_limit);

    info!("Matcher initialized with rules: {:?}", matcher.rules());

    let app_state = AppState {
        store,
        matcher,
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
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

fn init_logging(level: &str, format: &str) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}
