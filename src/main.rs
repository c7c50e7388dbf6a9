mod config;
mod handlers;
mod models;
mod routes;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{Config, SecurityConfig};
use handlers::health::not_found;
use routes::api;
use services::{RankService, SerpApiClient};

#[derive(Clone)]
pub struct AppState {
    pub rank_service: RankService,
    pub config: Config,
    pub start_time: Instant,
}

fn build_cors(security: &SecurityConfig) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

    if security.allowed_origins.iter().any(|origin| origin == "*") {
        cors.allow_any_origin()
    } else {
        security
            .allowed_origins
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin))
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; a missing SERPAPI_KEY stops the service here
    let config = match Config::from_env() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    let search_client = match SerpApiClient::new(config.serpapi.clone()) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build search client: {:#}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Starting rank checker on port {} (hl={}, gl={}, device={}, domain={})",
        config.server.port,
        config.serpapi.language,
        config.serpapi.country,
        config.serpapi.device,
        config.serpapi.google_domain
    );

    let state = AppState {
        rank_service: RankService::new(Arc::new(search_client)),
        config: config.clone(),
        start_time: Instant::now(),
    };

    // Create HTTP server
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(build_cors(&state.config.security))
            .wrap(Logger::default())
            .configure(api::config)
            .default_service(web::route().to(not_found))
    })
    .bind(format!("{}:{}", config.server.host, config.server.port))?;

    info!(
        "Server started successfully at http://{}:{}",
        config.server.host, config.server.port
    );

    // Run the server
    server.workers(config.server.workers).run().await
}
