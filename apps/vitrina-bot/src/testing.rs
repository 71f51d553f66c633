//! In-memory product store for handler tests.

use crate::config::{BotConfig, ListingMode};
use crate::services::catalog_service::CatalogService;
use crate::state::AppState;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;
use vitrina_db::{Product, ProductStore};

pub struct MemoryProductStore {
    products: Vec<Product>,
    fail: bool,
}

impl MemoryProductStore {
    pub fn with(products: Vec<Product>) -> Self {
        Self {
            products,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            products: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list_all(&self) -> Result<Vec<Product>> {
        if self.fail {
            return Err(anyhow!("connection refused"));
        }
        Ok(self.products.clone())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Product>> {
        if self.fail {
            return Err(anyhow!("connection refused"));
        }
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }
}

pub fn product(id: i64, name: &str, price: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: format!("{} description", name),
        price: Decimal::from_str(price).unwrap(),
        image_url: None,
        video_url: None,
    }
}

pub fn config(listing_mode: ListingMode) -> BotConfig {
    BotConfig {
        bot_token: "123:test".to_string(),
        database_url: "postgres://localhost/vitrina_test".to_string(),
        payment_provider_token: "provider-token".to_string(),
        currency: "KZT".to_string(),
        currency_label: "тг".to_string(),
        listing_mode,
        db_max_connections: 1,
    }
}

pub fn state(products: Vec<Product>, listing_mode: ListingMode) -> AppState {
    AppState::new(
        config(listing_mode),
        CatalogService::new(Arc::new(MemoryProductStore::with(products))),
    )
}

pub fn failing_state() -> AppState {
    AppState::new(
        config(ListingMode::Buttons),
        CatalogService::new(Arc::new(MemoryProductStore::failing())),
    )
}
