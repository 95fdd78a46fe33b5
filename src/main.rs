use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use swap_algo::config::Settings;
use swap_algo::core::ExchangeMatcher;
use swap_algo::routes::{self, AppState};
use swap_algo::services::ResidentRegistry;
use swap_algo::telemetry;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    telemetry::init(&settings.logging)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    info!("Starting Swap Algo matching service...");

    let rules = settings.scoring_rules();
    let matcher = ExchangeMatcher::new(rules);

    info!("Matcher initialized with rules: {:?}", rules);

    // Registry lives for the whole process; a restart starts empty
    let app_state = AppState {
        registry: ResidentRegistry::new().shared(),
        matcher,
        matching: settings.matching.clone(),
    };

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
