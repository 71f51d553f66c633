use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("product {0} not found")]
    NotFound(i64),

    #[error("product store unavailable: {0:#}")]
    StoreUnavailable(#[source] anyhow::Error),

    #[error("malformed callback payload: {0:?}")]
    MalformedCallback(String),

    #[error("price of product {0} does not fit an invoice amount")]
    AmountOverflow(i64),

    #[error("required setting `{0}` is not set")]
    ConfigurationMissing(&'static str),

    #[error("invalid value {value:?} for `{key}`")]
    InvalidConfiguration { key: &'static str, value: String },

    #[error("failed to read configuration: {0}")]
    ConfigSource(#[from] ::config::ConfigError),
}

impl BotError {
    /// Unknown ids and unparseable payloads get the same reply.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::MalformedCallback(_))
    }
}
