use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalog entry. Rows are managed outside the bot; this crate only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// `NUMERIC(10, 2)`, always two fractional digits.
    pub price: Decimal,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
}

impl Product {
    /// Price rendered with exactly two fractional digits.
    pub fn display_price(&self) -> String {
        let mut price = self.price.round_dp(2);
        price.rescale(2);
        price.to_string()
    }

    pub fn video_url(&self) -> Option<&str> {
        non_blank(self.video_url.as_deref())
    }

    pub fn image_url(&self) -> Option<&str> {
        non_blank(self.image_url.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
