mod config;
mod error;
mod services;
mod state;
mod store;

use crate::config::Config;
use crate::state::AppState;
use actix_web::HttpServer;
use env_logger::Env;
use log::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let state = AppState::open(&config).map_err(|e| {
        error!("Could not open storage: {}", e);
        std::io::Error::other(e.to_string())
    })?;
    let db = state.db.clone();

    info!("Server running at {}", config.bind_url());

    let app_config = config.clone();
    HttpServer::new(move || services::app(state.clone(), &app_config))
        .bind((config.server.host.as_str(), config.server.port))?
        .run()
        .await?;

    // Workers may still hold state clones here; close empties the shared slot.
    if let Err(e) = db.close() {
        error!("Error while closing the database: {}", e);
    }
    Ok(())
}
