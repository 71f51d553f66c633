pub mod db;
pub mod models;
pub mod repositories;

pub use rust_decimal;
pub use sqlx;

pub use db::init_db;
pub use models::product::Product;
pub use repositories::product_repo::{ProductRepository, ProductStore};
