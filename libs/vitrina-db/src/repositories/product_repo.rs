use crate::models::product::Product;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::PgPool;

/// Read-only view of the product catalog.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products in id order.
    async fn list_all(&self) -> Result<Vec<Product>>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Product>>;
}

#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for ProductRepository {
    async fn list_all(&self) -> Result<Vec<Product>> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, image_url, video_url
            FROM products
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch products")
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Product>> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, image_url, video_url FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Failed to fetch product {}", id))
    }
}
