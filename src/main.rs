use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use hackbuddy_match::config::Settings;
use hackbuddy_match::core::{Matcher, TranscriptExtractor};
use hackbuddy_match::models::{ExtractionOptions, ScoringWeights};
use hackbuddy_match::routes::{self, AppState};
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration before logging so the [logging] section applies
    let settings = Settings::load().unwrap_or_else(|e| panic!("Configuration error: {}", e));

    // LOG_LEVEL / LOG_FORMAT take precedence over the config file
    let logging = settings.logging.clone().with_overrides(
        std::env::var("LOG_LEVEL").ok(),
        std::env::var("LOG_FORMAT").ok(),
    );

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&logging.level))
        .with_target(false)
        .with_level(true);

    if logging.is_pretty() {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting HackBuddy matching service...");

    let vocabulary = settings.vocabulary().unwrap_or_else(|e| {
        error!("Failed to build keyword vocabulary: {}", e);
        panic!("Vocabulary error: {}", e);
    });

    let extractor = TranscriptExtractor::new(
        Arc::new(vocabulary),
        ExtractionOptions::from(&settings.extraction),
    );

    info!(
        "Vocabulary loaded ({} skills, {} interests)",
        extractor.vocabulary().skills.len(),
        extractor.vocabulary().interests.len()
    );

    // Initialize matcher with configured weights
    let matcher = Matcher::new(
        ScoringWeights::from(&settings.scoring.weights),
        settings.matching.min_score(),
    );

    info!("Matcher initialized with weights: {:?}", matcher.weights());

    // Build application state
    let app_state = AppState {
        extractor,
        matcher,
        matching: settings.matching.clone(),
    };

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
            .app_data(routes::query_config())
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
