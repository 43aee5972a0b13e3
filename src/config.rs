use crate::domain::payment::TransactionMode;
use crate::error::Result;

pub const DEFAULT_PROVIDER: &str = "amazon_pay";
pub const DEFAULT_CURRENCY: &str = "USD";

/// Runtime settings, read from the environment and overridable on the
/// command line.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub provider: String,
    pub transaction_mode: TransactionMode,
    pub currency: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_PROVIDER.to_string(),
            transaction_mode: TransactionMode::default(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let transaction_mode = match lookup("PAYMAP_TRANSACTION_MODE") {
            Some(mode) => mode.parse()?,
            None => defaults.transaction_mode,
        };

        Ok(Self {
            provider: lookup("PAYMAP_PROVIDER").unwrap_or(defaults.provider),
            transaction_mode,
            currency: lookup("PAYMAP_CURRENCY").unwrap_or(defaults.currency),
        })
    }
}
