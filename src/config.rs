//! Kiosk configuration, read from the environment at startup and passed
//! explicitly to whoever needs it. No process-wide mutable state.

use std::{env, fmt::Display, str::FromStr};

use log::LevelFilter;

use crate::constants::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TEMPLATES_DIR};

#[derive(Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub templates_dir: String,
    pub pump_registry: Option<String>,
    pub debug: bool,
}

impl Config {
    pub fn load() -> Config {
        Config {
            host: try_load("KIOSK_HOST", DEFAULT_HOST),
            port: try_load("KIOSK_PORT", &DEFAULT_PORT.to_string()),
            templates_dir: try_load("KIOSK_TEMPLATES_DIR", DEFAULT_TEMPLATES_DIR),
            pump_registry: env::var("KIOSK_PUMP_REGISTRY").ok(),
            debug: try_load("KIOSK_DEBUG", "false"),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|error| format!("Invalid {key} value: {error}"))
        .expect("Environment misconfigured!")
}
