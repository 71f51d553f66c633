use dotenvy::dotenv;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitrina_db::ProductRepository;

mod bot;
mod config;
mod error;
mod models;
mod services;
mod state;
#[cfg(test)]
mod testing;

use crate::config::BotConfig;
use crate::services::catalog_service::CatalogService;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitrina_bot=info,vitrina_db=info,teloxide=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Vitrina Bot...");

    let config = BotConfig::load()?;

    let pool = vitrina_db::init_db(&config.database_url, config.db_max_connections).await?;
    let catalog = CatalogService::new(Arc::new(ProductRepository::new(pool)));

    let bot = Bot::new(&config.bot_token);
    let state = AppState::new(config, catalog);

    bot::run_bot(bot, state).await
}
