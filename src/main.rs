//! penguin-daycare server entry point.
//!
//! Loads the roster, connects the counter store and starts the Axum HTTP
//! server.

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use penguin_daycare::api;
use penguin_daycare::app_state::AppState;
use penguin_daycare::config::DaycareConfig;
use penguin_daycare::domain::RosterCache;
use penguin_daycare::domain::roster::load_roster;
use penguin_daycare::persistence::{CounterStore, InMemoryCounterStore, PostgresCounterStore};
use penguin_daycare::service::PenguinService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    // Load configuration
    let config =
        DaycareConfig::from_env().map_err(|e| anyhow::anyhow!("invalid configuration: {e}"))?;
    tracing::info!(addr = %config.listen_addr, "starting penguin-daycare");

    // The roster is mandatory: refuse to serve without one.
    let penguins = load_roster(&config.roster_path)
        .await
        .with_context(|| format!("loading roster from {}", config.roster_path.display()))?;

    // Build persistence layer
    let store: Arc<dyn CounterStore> = if config.persistence_enabled {
        Arc::new(
            PostgresCounterStore::connect(&config)
                .await
                .context("connecting to counter database")?,
        )
    } else {
        tracing::warn!("persistence disabled; counters are kept in memory only");
        Arc::new(InMemoryCounterStore::new())
    };

    // Build domain and service layers
    let roster = Arc::new(RosterCache::new(penguins, config.cache_ttl()));
    let app_state = AppState::new(PenguinService::new(roster, store));

    // Build router
    let app = Router::new().merge(api::build_router());

    #[cfg(feature = "swagger-ui")]
    let app = {
        use utoipa::OpenApi;
        app.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
        )
    };

    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, ttl_secs = config.cache_ttl_secs, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Installs the global `tracing` subscriber. `RUST_LOG` selects the filter
/// (default `info`); `LOG_FORMAT=json` switches to one JSON object per line.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}
