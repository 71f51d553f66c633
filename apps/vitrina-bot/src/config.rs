use crate::error::BotError;
use serde::Deserialize;
use tracing::info;

const DEFAULT_CURRENCY: &str = "KZT";
const DEFAULT_CURRENCY_LABEL: &str = "тг";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

/// How `/products` renders the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingMode {
    /// One `name - price` line per product.
    Text,
    /// One inline button per product, opening its detail view.
    #[default]
    Buttons,
}

impl ListingMode {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "buttons" => Some(Self::Buttons),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub bot_token: String,
    pub database_url: String,
    pub payment_provider_token: String,
    /// ISO 4217 code sent with invoices.
    pub currency: String,
    /// Suffix shown after prices in chat.
    pub currency_label: String,
    pub listing_mode: ListingMode,
    pub db_max_connections: u32,
}

/// Settings as read from `vitrina.toml` and the environment, before validation.
#[derive(Debug, Default, Deserialize)]
pub struct RawConfig {
    pub bot_token: Option<String>,
    pub database_url: Option<String>,
    pub payment_provider_token: Option<String>,
    pub currency: Option<String>,
    pub currency_label: Option<String>,
    pub listing_mode: Option<String>,
    pub db_max_connections: Option<String>,
}

impl BotConfig {
    /// Environment variables override `vitrina.toml`, which is optional.
    pub fn load() -> Result<Self, BotError> {
        let raw: RawConfig = ::config::Config::builder()
            .add_source(::config::File::with_name("vitrina").required(false))
            .add_source(::config::Environment::default().try_parsing(false))
            .build()?
            .try_deserialize()?;

        let config = Self::from_raw(raw)?;
        info!(
            "Configuration loaded: currency={}, listing_mode={:?}",
            config.currency, config.listing_mode
        );
        Ok(config)
    }

    pub fn from_raw(raw: RawConfig) -> Result<Self, BotError> {
        let bot_token = required(raw.bot_token, "BOT_TOKEN")?;
        let database_url = required(raw.database_url, "DATABASE_URL")?;
        let payment_provider_token =
            required(raw.payment_provider_token, "PAYMENT_PROVIDER_TOKEN")?;

        let currency = match optional(raw.currency) {
            Some(code) if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) => {
                code.to_ascii_uppercase()
            }
            Some(code) => {
                return Err(BotError::InvalidConfiguration {
                    key: "CURRENCY",
                    value: code,
                })
            }
            None => DEFAULT_CURRENCY.to_string(),
        };

        let listing_mode = match optional(raw.listing_mode) {
            Some(mode) => ListingMode::parse(&mode).ok_or(BotError::InvalidConfiguration {
                key: "LISTING_MODE",
                value: mode,
            })?,
            None => ListingMode::default(),
        };

        let db_max_connections = match optional(raw.db_max_connections) {
            Some(n) => match n.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(BotError::InvalidConfiguration {
                        key: "DB_MAX_CONNECTIONS",
                        value: n,
                    })
                }
            },
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };

        Ok(Self {
            bot_token,
            database_url,
            payment_provider_token,
            currency,
            currency_label: optional(raw.currency_label)
                .unwrap_or_else(|| DEFAULT_CURRENCY_LABEL.to_string()),
            listing_mode,
            db_max_connections,
        })
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn required(value: Option<String>, key: &'static str) -> Result<String, BotError> {
    optional(value).ok_or(BotError::ConfigurationMissing(key))
}
