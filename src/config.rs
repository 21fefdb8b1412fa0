//! Widget configuration.
//!
//! Values come from the bundled `assets/config.env`. Native builds also read a
//! local `.env` and let process environment variables override bundled values.

use anyhow::{Context, Result, bail};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::time::Duration;
use tracing::Level;

/// Bundled config, compiled in so the browser build needs no environment.
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

const DEFAULT_ENDPOINT: &str = "/api/chat";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Browser timers take a `u32` millisecond delay.
const MAX_TIMEOUT_SECS: u64 = u32::MAX as u64 / 1000;
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_NATIVE_BASE: &str = "http://127.0.0.1:5000";

const KEYS: &[&str] = &[
    "CHAT_ENDPOINT",
    "CHAT_API_BASE",
    "CHAT_TIMEOUT_SECS",
    "CHAT_LOG_LEVEL",
];

static CONFIG: OnceCell<WidgetConfig> = OnceCell::new();

#[derive(Clone, Debug, PartialEq)]
pub struct WidgetConfig {
    /// Absolute URL the chat turns are posted to.
    pub endpoint: String,
    pub timeout: Duration,
    pub log_level: Level,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: resolve_endpoint(&default_base(), DEFAULT_ENDPOINT),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_level: Level::INFO,
        }
    }
}

impl WidgetConfig {
    pub fn from_values(values: &HashMap<String, String>) -> Result<Self> {
        let get = |key: &str| values.get(key).map(String::as_str).filter(|v| !v.is_empty());

        let base = get("CHAT_API_BASE")
            .map(str::to_string)
            .unwrap_or_else(default_base);
        let endpoint = resolve_endpoint(&base, get("CHAT_ENDPOINT").unwrap_or(DEFAULT_ENDPOINT));

        let timeout_secs = match get("CHAT_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("CHAT_TIMEOUT_SECS is not a number: {raw}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            bail!("CHAT_TIMEOUT_SECS must be greater than zero");
        }
        if timeout_secs > MAX_TIMEOUT_SECS {
            bail!("CHAT_TIMEOUT_SECS must be at most {MAX_TIMEOUT_SECS}");
        }

        let log_level = match get("CHAT_LOG_LEVEL") {
            Some(raw) => raw
                .parse::<Level>()
                .with_context(|| format!("CHAT_LOG_LEVEL is not a log level: {raw}"))?,
            None => Level::INFO,
        };

        Ok(Self {
            endpoint,
            timeout: Duration::from_secs(timeout_secs),
            log_level,
        })
    }
}

/// Load configuration from the bundled file plus any local overrides.
pub fn load() -> Result<WidgetConfig> {
    let mut values = parse_env_lines(BUNDLED_CONFIG);
    apply_overrides(&mut values);
    WidgetConfig::from_values(&values).context("invalid widget configuration")
}

/// Make `config` the one returned by [`current`]. Only the first call wins.
pub fn install(config: WidgetConfig) {
    if CONFIG.set(config).is_err() {
        tracing::warn!("widget configuration already installed");
    }
}

pub fn current() -> &'static WidgetConfig {
    CONFIG.get_or_init(WidgetConfig::default)
}

/// Parse `KEY=VALUE` lines, skipping blanks and `#` comments.
pub fn parse_env_lines(text: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            values.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    values
}

/// Join a relative endpoint onto `base`; absolute URLs pass through.
pub fn resolve_endpoint(base: &str, endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return endpoint.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_overrides(values: &mut HashMap<String, String>) {
    // A missing .env is normal outside development
    let _ = dotenvy::dotenv();
    for key in KEYS {
        if let Ok(value) = std::env::var(key) {
            values.insert((*key).to_string(), value);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn apply_overrides(values: &mut HashMap<String, String>) {
    values.retain(|key, _| KEYS.contains(&key.as_str()));
}

#[cfg(not(target_arch = "wasm32"))]
fn default_base() -> String {
    DEFAULT_NATIVE_BASE.to_string()
}

#[cfg(target_arch = "wasm32")]
fn default_base() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}
