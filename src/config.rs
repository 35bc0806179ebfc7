//! Panel configuration resolved at build time.
//!
//! The browser has no process environment, so `from_env` reads variables
//! captured by `option_env!` when the WASM bundle is compiled. Parsing goes
//! through `from_lookup` so it can be exercised with any key/value source.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use crate::net::auth::TokenOptions;

pub const DEFAULT_API_BASE: &str = "http://localhost:3001/api";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 15_000;
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

pub const API_BASE_VAR: &str = "MY_DESIGNS_API_BASE";
pub const REQUEST_TIMEOUT_VAR: &str = "MY_DESIGNS_REQUEST_TIMEOUT_MS";
pub const TOKEN_AUDIENCE_VAR: &str = "MY_DESIGNS_TOKEN_AUDIENCE";
pub const LOG_LEVEL_VAR: &str = "MY_DESIGNS_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    /// Backend API root, without a trailing slash.
    pub api_base: String,
    /// Upper bound for every backend request.
    pub request_timeout_ms: u32,
    /// Audience requested with silent bearer tokens.
    pub token_audience: Option<String>,
    pub log_level: log::Level,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            token_audience: None,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl PanelConfig {
    /// Build config from variables baked in at compile time.
    ///
    /// Optional:
    /// - `MY_DESIGNS_API_BASE`: default `http://localhost:3001/api`
    /// - `MY_DESIGNS_REQUEST_TIMEOUT_MS`: default 15000
    /// - `MY_DESIGNS_TOKEN_AUDIENCE`: unset by default
    /// - `MY_DESIGNS_LOG_LEVEL`: default `info`
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                API_BASE_VAR => option_env!("MY_DESIGNS_API_BASE"),
                REQUEST_TIMEOUT_VAR => option_env!("MY_DESIGNS_REQUEST_TIMEOUT_MS"),
                TOKEN_AUDIENCE_VAR => option_env!("MY_DESIGNS_TOKEN_AUDIENCE"),
                LOG_LEVEL_VAR => option_env!("MY_DESIGNS_LOG_LEVEL"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Build config from an arbitrary variable source. Missing or malformed
    /// values fall back to defaults.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = non_empty(lookup(API_BASE_VAR))
            .map_or_else(|| DEFAULT_API_BASE.to_owned(), |v| v.trim_end_matches('/').to_owned());
        let request_timeout_ms = lookup(REQUEST_TIMEOUT_VAR)
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);
        let token_audience = non_empty(lookup(TOKEN_AUDIENCE_VAR));
        let log_level = lookup(LOG_LEVEL_VAR)
            .and_then(|v| log::Level::from_str(v.trim()).ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self { api_base, request_timeout_ms, token_audience, log_level }
    }

    /// Options passed to every silent token request.
    #[must_use]
    pub fn token_options(&self) -> TokenOptions {
        TokenOptions { audience: self.token_audience.clone() }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
