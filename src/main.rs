mod aggregate;
mod api;
mod database;
mod error;
mod models;
mod ranking;
mod schema;
mod store;
mod utils;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use axum::{body::Body, routing::get, Router};
use database::Database;
use http::{HeaderValue, Method};
use serde_derive::Deserialize;
use store::PlayerStore;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[macro_use]
extern crate tracing;

#[macro_use]
extern crate serde_json;

#[derive(Debug, Deserialize)]
pub struct StatsConfig {
    pub address: String,
    pub database_url: String,
    #[serde(default)]
    pub allowed_origin: Option<String>,
}

fn create_router<S: PlayerStore>(config: &StatsConfig, store: Arc<S>) -> Router {
    let router = Router::new()
        .route("/health", get(api::health))
        .nest(
            "/api",
            Router::new()
                .route("/leaderboard", get(api::leaderboard::leaderboard::<S>))
                .route("/stats", get(api::stats::stats::<S>)),
        )
        .layer(TraceLayer::new_for_http().make_span_with(
            |request: &http::Request<Body>| {
                tracing::debug_span!(
                    "request",
                    method = %request.method(),
                    uri = request.uri().path()
                )
            },
        ))
        .with_state(store);

    match config.allowed_origin.as_deref().filter(|o| !o.is_empty()) {
        Some(origin) => match HeaderValue::from_str(origin) {
            Ok(origin) => router.layer(
                CorsLayer::new()
                    .allow_origin(origin)
                    .allow_methods([Method::GET]),
            ),
            Err(_) => {
                warn!("Ignoring invalid allowed_origin {}", origin);
                router
            }
        },
        None => router,
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("ARENASTATS_LOG").unwrap_or_else(|_| {
                "arenastats=debug,tower_http=debug,axum::rejection=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config: StatsConfig =
        toml::from_str(&std::fs::read_to_string("settings.toml").expect("Missing settings.toml"))
            .expect("Invalid Toml in settings.toml");

    let database = Arc::new(Database::new(config.database_url.clone()));

    let router = create_router(&config, database);

    let listener = tokio::net::TcpListener::bind(&config.address)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind {}: {}", config.address, e));

    info!("Starting server on {}", config.address);

    axum::serve(listener, router)
        .await
        .expect("Server terminated unexpectedly");
}
