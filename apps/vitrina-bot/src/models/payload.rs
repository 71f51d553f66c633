use crate::error::BotError;

/// Prefix of detail callbacks and of invoice payloads.
pub const PRODUCT_PREFIX: &str = "product_";
/// Prefix of "buy" button callbacks.
pub const PAY_PREFIX: &str = "pay_";

/// Callback and invoice payload, rendered as `product_<id>`.
pub fn product_payload(id: i64) -> String {
    format!("{}{}", PRODUCT_PREFIX, id)
}

pub fn pay_payload(id: i64) -> String {
    format!("{}{}", PAY_PREFIX, id)
}

/// Parses the id segment that follows a payload prefix.
pub fn parse_product_id(arg: &str) -> Result<i64, BotError> {
    let trimmed = arg.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BotError::MalformedCallback(arg.to_string()));
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| BotError::MalformedCallback(arg.to_string()))
}

/// Extracts the product id from an invoice payload echoed back by Telegram.
pub fn parse_invoice_payload(payload: &str) -> Result<i64, BotError> {
    let arg = payload
        .strip_prefix(PRODUCT_PREFIX)
        .ok_or_else(|| BotError::MalformedCallback(payload.to_string()))?;
    parse_product_id(arg)
}
