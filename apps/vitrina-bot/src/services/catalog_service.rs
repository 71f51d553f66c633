use crate::error::BotError;
use crate::models::payload::parse_product_id;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::sync::Arc;
use vitrina_db::{Product, ProductStore};

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn ProductStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, BotError> {
        self.store.list_all().await.map_err(BotError::StoreUnavailable)
    }

    pub async fn get_product(&self, id: i64) -> Result<Product, BotError> {
        self.store
            .get_by_id(id)
            .await
            .map_err(BotError::StoreUnavailable)?
            .ok_or(BotError::NotFound(id))
    }

    /// Looks up the product named by the id segment of a callback or command.
    pub async fn get_product_by_arg(&self, arg: &str) -> Result<Product, BotError> {
        let id = parse_product_id(arg)?;
        self.get_product(id).await
    }
}

/// Converts a price to the currency's smallest unit (2-decimal currencies).
/// Sub-cent prices have no exact minor amount and are rejected.
pub fn price_in_minor_units(product: &Product) -> Result<u32, BotError> {
    let price = product.price.normalize();
    if price.scale() > 2 {
        return Err(BotError::AmountOverflow(product.id));
    }
    (price * Decimal::ONE_HUNDRED)
        .to_u32()
        .ok_or(BotError::AmountOverflow(product.id))
}
