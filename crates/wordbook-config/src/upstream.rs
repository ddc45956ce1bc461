use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_dictionary_base_url() -> String {
    "https://dictionary.cambridge.org".to_string()
}

fn default_conjugation_base_url() -> String {
    "https://simple.wiktionary.org".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("wordbook/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Where pages are scraped from and how outbound requests behave
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    #[serde(default = "default_dictionary_base_url")]
    pub dictionary_base_url: String,
    #[serde(default = "default_conjugation_base_url")]
    pub conjugation_base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub request_timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            dictionary_base_url: default_dictionary_base_url(),
            conjugation_base_url: default_conjugation_base_url(),
            request_timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

impl UpstreamConfig {
    pub fn new() -> Self {
        let dictionary_base_url =
            env::var("DICTIONARY_BASE_URL").unwrap_or_else(|_| default_dictionary_base_url());

        let conjugation_base_url =
            env::var("CONJUGATION_BASE_URL").unwrap_or_else(|_| default_conjugation_base_url());

        let request_timeout_seconds = env::var("REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        let user_agent = env::var("USER_AGENT").unwrap_or_else(|_| default_user_agent());

        Self {
            dictionary_base_url: trim_slash(dictionary_base_url),
            conjugation_base_url: trim_slash(conjugation_base_url),
            request_timeout_seconds,
            user_agent,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

fn trim_slash(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
