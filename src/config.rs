//! Environment-driven configuration, read once at startup.

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use url::Url;

/// Prefix for every configuration variable, e.g. `PASSFORGE_PORT`.
pub const ENV_PREFIX: &str = "PASSFORGE_";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Listening port of the history gateway.
    pub port: u16,
    /// Single cross-origin caller allowed by CORS.
    pub frontend_url: String,
    /// sqlx connection string for the history store.
    pub database_url: String,
    /// Base address the client bindings talk to, including the `/api` path.
    pub api_base_url: Url,
    /// Publishable key of the identity provider, handed through to the client side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_public_key: Option<String>,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            frontend_url: "http://localhost:5173".to_string(),
            database_url: "sqlite:passforge.sqlite".to_string(),
            api_base_url: Url::parse("http://localhost:5000/api")
                .expect("static default API base URL is valid"),
            identity_public_key: None,
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}

pub static CONFIG: LazyLock<Config> =
    LazyLock::new(|| Config::load().expect("FATAL: invalid PASSFORGE_* configuration"));
