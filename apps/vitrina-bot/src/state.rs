use crate::config::BotConfig;
use crate::services::catalog_service::CatalogService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<BotConfig>,
    pub catalog: CatalogService,
}

impl AppState {
    pub fn new(config: BotConfig, catalog: CatalogService) -> Self {
        Self {
            config: Arc::new(config),
            catalog,
        }
    }
}
