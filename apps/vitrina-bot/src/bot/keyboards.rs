use crate::bot::texts::{price_line, BUY_BUTTON};
use crate::models::payload::{pay_payload, product_payload};
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use vitrina_db::Product;

/// One row per product, in store order.
pub fn products_keyboard(products: &[Product], currency_label: &str) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(products.iter().map(|p| {
        vec![InlineKeyboardButton::callback(
            price_line(p, currency_label),
            product_payload(p.id),
        )]
    }))
}

pub fn buy_keyboard(product_id: i64) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        BUY_BUTTON,
        pay_payload(product_id),
    )]])
}
