//! Handles settings for the application.
//!
//! Values come from an optional settings file (`settings.toml` by default)
//! and are overridden by `LEDGER_*` environment variables, e.g.
//! `LEDGER_SERVER__PORT=9000`. Every key has a default.
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct Ledger {
    pub path: String,
    pub atomic_writes: bool,
    pub currency_symbol: String,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub ledger: Ledger,
}

impl Settings {
    pub fn new(file: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("app.level", "info")?
            .set_default("server.bind", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("ledger.path", engine::DEFAULT_PATH)?
            .set_default("ledger.atomic_writes", false)?
            .set_default("ledger.currency_symbol", "₹")?
            .add_source(File::with_name(file).required(false))
            .add_source(Environment::with_prefix("LEDGER").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}
