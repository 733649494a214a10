use std::{fs, path::Path, time::Duration};

use serde::Deserialize;
use tracing::warn;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
pub const SETTINGS_FILE: &str = "students.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub backend_url: String,
    pub request_timeout_secs: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.into(),
            request_timeout_secs: 10,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    backend_url: Option<String>,
    request_timeout_secs: Option<u64>,
}

impl ClientSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn apply_file(&mut self, raw: &str) {
        match toml::from_str::<FileSettings>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.backend_url {
                    self.backend_url = v;
                }
                if let Some(v) = file_cfg.request_timeout_secs {
                    self.request_timeout_secs = v;
                }
            }
            Err(err) => warn!("ignoring malformed {SETTINGS_FILE}: {err}"),
        }
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("STUDENTS_BACKEND_URL") {
            self.backend_url = v;
        }
        if let Some(v) = lookup("APP__BACKEND_URL") {
            self.backend_url = v;
        }
        if let Some(v) = lookup("APP__REQUEST_TIMEOUT_SECS") {
            match v.parse::<u64>() {
                Ok(parsed) => self.request_timeout_secs = parsed,
                Err(_) => warn!("ignoring non-numeric APP__REQUEST_TIMEOUT_SECS={v}"),
            }
        }
    }
}

/// Defaults, then `students.toml` in the working directory, then environment.
pub fn load_settings() -> ClientSettings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

pub fn load_settings_from(
    path: &Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> ClientSettings {
    let mut settings = ClientSettings::default();
    if let Ok(raw) = fs::read_to_string(path) {
        settings.apply_file(&raw);
    }
    settings.apply_env(lookup);
    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
