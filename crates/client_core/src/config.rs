use std::{fs, path::Path};

use anyhow::{bail, Context};
use serde::Deserialize;
use tracing::warn;
use url::Url;

use crate::controller::ResubmitPolicy;

pub const SETTINGS_FILE: &str = "langid.toml";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/predict";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub endpoint: String,
    /// No timeout unless configured; the transport's own failure signal ends
    /// a hung request otherwise.
    pub request_timeout_secs: Option<u64>,
    pub resubmit_policy: ResubmitPolicy,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            request_timeout_secs: None,
            resubmit_policy: ResubmitPolicy::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    endpoint: Option<String>,
    request_timeout_secs: Option<u64>,
    resubmit_policy: Option<ResubmitPolicy>,
}

/// Defaults, then `langid.toml` in the working directory, then environment.
pub fn load_settings() -> ClientSettings {
    load_settings_from(Path::new(SETTINGS_FILE), |name| std::env::var(name).ok())
}

pub fn load_settings_from(
    file: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> ClientSettings {
    let mut settings = ClientSettings::default();

    if let Ok(raw) = fs::read_to_string(file) {
        match toml::from_str::<SettingsFile>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.endpoint {
                    settings.endpoint = v;
                }
                if let Some(v) = file_cfg.request_timeout_secs {
                    settings.request_timeout_secs = timeout_from_secs(v);
                }
                if let Some(v) = file_cfg.resubmit_policy {
                    settings.resubmit_policy = v;
                }
            }
            Err(err) => warn!(path = %file.display(), "ignoring unreadable settings file: {err}"),
        }
    }

    if let Some(v) = env("LANGID_ENDPOINT") {
        settings.endpoint = v;
    }
    if let Some(v) = env("APP__ENDPOINT") {
        settings.endpoint = v;
    }

    if let Some(v) = env("APP__REQUEST_TIMEOUT_SECS") {
        match v.parse::<u64>() {
            Ok(parsed) => settings.request_timeout_secs = timeout_from_secs(parsed),
            Err(err) => warn!("ignoring APP__REQUEST_TIMEOUT_SECS='{v}': {err}"),
        }
    }

    if let Some(v) = env("APP__RESUBMIT_POLICY") {
        match v.parse::<ResubmitPolicy>() {
            Ok(policy) => settings.resubmit_policy = policy,
            Err(err) => warn!("ignoring APP__RESUBMIT_POLICY: {err}"),
        }
    }

    settings
}

/// `0` disables the timeout in every settings layer.
fn timeout_from_secs(secs: u64) -> Option<u64> {
    (secs > 0).then_some(secs)
}

/// Parses the configured prediction endpoint; only http(s) URLs are usable.
pub fn validate_endpoint(raw_endpoint: &str) -> anyhow::Result<Url> {
    let raw_endpoint = raw_endpoint.trim();
    let url = Url::parse(raw_endpoint)
        .with_context(|| format!("invalid classification endpoint '{raw_endpoint}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!(
            "classification endpoint '{raw_endpoint}' must use http or https, not '{}'",
            url.scheme()
        );
    }
    if url.host_str().is_none() {
        bail!("classification endpoint '{raw_endpoint}' has no host");
    }
    Ok(url)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
