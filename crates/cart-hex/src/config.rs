use anyhow::Context;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::application::cart_manager::CartSettings;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage_key: String,
    pub api_base_url: String,
    pub order_path: String,
    pub home_path: String,
    pub login_path: String,
    pub currency_symbol: String,
    pub http_timeout_ms: Option<u64>,
    pub database_url: Option<String>,
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any variable source; `from_env` uses the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CartSettings::default();
        let or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        let http_timeout_ms = lookup("CART_HTTP_TIMEOUT_MS")
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("invalid CART_HTTP_TIMEOUT_MS: {raw}"))
            })
            .transpose()?;

        Ok(Self {
            storage_key: or("CART_STORAGE_KEY", &defaults.storage_key),
            api_base_url: or("CART_API_BASE_URL", "http://127.0.0.1:5000/"),
            order_path: or("CART_ORDER_PATH", "place_order"),
            home_path: or("CART_HOME_PATH", &defaults.home_path),
            login_path: or("CART_LOGIN_PATH", &defaults.login_path),
            currency_symbol: or("CART_CURRENCY_SYMBOL", &defaults.currency_symbol),
            http_timeout_ms,
            database_url: lookup("DATABASE_URL"),
            catalog_path: lookup("CART_CATALOG").map(PathBuf::from),
        })
    }

    pub fn http_timeout(&self) -> Option<Duration> {
        self.http_timeout_ms.map(Duration::from_millis)
    }

    pub fn cart_settings(&self) -> CartSettings {
        CartSettings {
            storage_key: self.storage_key.clone(),
            home_path: self.home_path.clone(),
            login_path: self.login_path.clone(),
            currency_symbol: self.currency_symbol.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_nothing_set() {
        let cfg = Config::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.storage_key, "storefront_cart");
        assert_eq!(cfg.order_path, "place_order");
        assert_eq!(cfg.currency_symbol, "₹");
        assert_eq!(cfg.login_path, "/login");
        assert!(cfg.http_timeout().is_none());
        assert!(cfg.database_url.is_none());
    }

    #[test]
    fn overrides_and_bad_timeout() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("CART_STORAGE_KEY", "shop_cart"),
            ("CART_CURRENCY_SYMBOL", "$"),
            ("CART_HTTP_TIMEOUT_MS", "1500"),
            ("DATABASE_URL", "sqlite://tmp/cart.db"),
        ]);
        let cfg = Config::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(cfg.storage_key, "shop_cart");
        assert_eq!(cfg.http_timeout(), Some(Duration::from_millis(1500)));
        assert_eq!(cfg.cart_settings().currency_symbol, "$");
        assert_eq!(cfg.database_url.as_deref(), Some("sqlite://tmp/cart.db"));

        let bad = Config::from_lookup(|k| (k == "CART_HTTP_TIMEOUT_MS").then(|| "soon".into()));
        assert!(bad.is_err());
    }
}
