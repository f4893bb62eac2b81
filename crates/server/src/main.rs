use crate::{
    config::Config,
    routes::{AppState, app},
    utils::shutdown::shutdown_signal,
};
use log::info;
use migration::{Migrator, MigratorTrait};
use std::{error::Error, sync::Arc};

mod config;
mod doc;
mod dtos;
mod routes;
mod utils;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;
    let db = database::db::connect(&config.database_url).await?;

    if config.run_migrations {
        info!("Running pending migrations");
        Migrator::up(&db, None).await?;
    }

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!("Running axum on http://{}", config.bind_address);

    axum::serve(listener, app(AppState { db: Arc::new(db) }))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
