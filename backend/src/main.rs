//! Backend entry-point: loads settings, prepares the doctor store and serves
//! the directory API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, run_migrations};
#[cfg(feature = "example-data")]
use backend::example_data::{ExampleDataSettings, seed_example_data_on_startup};
use server::{DoctorDirectorySettings, ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = DoctorDirectorySettings::load().map_err(std::io::Error::other)?;

    let db_pool = match settings.pool_config() {
        Some(pool_config) => {
            if let Err(error) = run_migrations(pool_config.database_url()).await {
                warn!(%error, "migrations not applied; listings fall back until the store is reachable");
            }
            Some(DbPool::lazy(&pool_config))
        }
        None => {
            warn!("no database configured; serving the bundled sample doctors only");
            None
        }
    };

    #[cfg(feature = "example-data")]
    seed_example_data(db_pool.as_ref()).await;

    let bind_addr = settings.bind_addr();
    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr).with_db_pool(db_pool);
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "doctor directory listening");
    server.await
}

/// Seed example doctors when enabled; failures are logged, never fatal.
#[cfg(feature = "example-data")]
async fn seed_example_data(db_pool: Option<&DbPool>) {
    let settings = match ExampleDataSettings::load() {
        Ok(settings) => settings,
        Err(error) => {
            warn!(%error, "example data settings invalid; seeding skipped");
            return;
        }
    };
    if let Err(error) = seed_example_data_on_startup(&settings, db_pool).await {
        warn!(%error, "example data seeding failed");
    }
}
