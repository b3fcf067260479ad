use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use rent_match::config::{LoggingSettings, Settings};
use rent_match::core::Matcher;
use rent_match::models::ScoringWeights;
use rent_match::routes::{self, AppState};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_MAX_RANK_LIMIT: usize = 200;

fn init_tracing(logging: &LoggingSettings) {
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
        subscriber.compact().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => {
            init_tracing(&settings.logging);
            settings
        }
        Err(e) => {
            init_tracing(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    info!("Starting Rent Match service...");

    let weights = ScoringWeights::from(&settings.matching.weights);
    let matcher = Matcher::new(weights).map_err(|e| {
        error!("Invalid scoring weights: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    info!("Matcher initialized with weights: {:?}", matcher.weights());

    let app_state = AppState::new(
        matcher,
        settings.matching.max_rank_limit.unwrap_or(DEFAULT_MAX_RANK_LIMIT),
    );

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
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
