use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_STORAGE_PREFIX: &str = "timetracker";
pub const DEFAULT_REPORT_DELAY_MS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub storage_prefix: String,
    pub report_delay_ms: u32,
    pub time_zone: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            storage_prefix: DEFAULT_STORAGE_PREFIX.to_string(),
            report_delay_ms: DEFAULT_REPORT_DELAY_MS,
            time_zone: None,
        }
    }
}

impl RuntimeConfig {
    /// Replaces blank values with defaults and drops unknown time zones.
    pub fn normalized(mut self) -> Self {
        let prefix = self.storage_prefix.trim();
        self.storage_prefix = if prefix.is_empty() {
            DEFAULT_STORAGE_PREFIX.to_string()
        } else {
            prefix.to_string()
        };
        self.time_zone = self
            .time_zone
            .map(|tz| tz.trim().to_string())
            .filter(|tz| tz.parse::<Tz>().is_ok());
        self
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
            .as_deref()
            .and_then(|name| name.parse::<Tz>().ok())
            .unwrap_or(Tz::UTC)
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

pub fn current() -> RuntimeConfig {
    RUNTIME_CONFIG.get().cloned().unwrap_or_default()
}

pub fn storage_prefix() -> String {
    current().storage_prefix
}

pub fn report_delay_ms() -> u32 {
    current().report_delay_ms
}

pub fn current_time_zone() -> Tz {
    current().time_zone()
}

fn get_from_env_js() -> Option<RuntimeConfig> {
    // Optional global object: window.__TIMETRACKER_ENV = { storage_prefix: "...", ... }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &"__TIMETRACKER_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let raw = js_sys::JSON::stringify(&any).ok()?.as_string()?;
    parse_runtime_config(&raw)
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{origin}/config.json")).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub fn parse_runtime_config(raw: &str) -> Option<RuntimeConfig> {
    match serde_json::from_str::<RuntimeConfig>(raw) {
        Ok(cfg) => Some(cfg),
        Err(err) => {
            log::warn!("Ignoring malformed runtime config: {err}");
            None
        }
    }
}

/// The injected global wins; `fetched` is only awaited when it is absent.
async fn resolve_config<F>(from_env: Option<RuntimeConfig>, fetched: F) -> RuntimeConfig
where
    F: std::future::Future<Output = Option<RuntimeConfig>>,
{
    match from_env {
        Some(cfg) => cfg,
        None => fetched.await.unwrap_or_default(),
    }
    .normalized()
}

pub async fn init() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    let resolved = resolve_config(get_from_env_js(), fetch_runtime_config()).await;
    let _ = RUNTIME_CONFIG.set(resolved.clone());
    resolved
}
