use serde::{Deserialize, Serialize};

use self::cache::CacheConfig;
use self::log::LogConfig;
use self::server::ServerConfig;
use self::upstream::UpstreamConfig;

pub mod cache;
pub mod log;
pub mod server;
pub mod upstream;

pub use self::log::LogFormat;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub cache: CacheConfig,
    pub log: LogConfig,
}

impl Config {
    /// Build configuration from the process environment, falling back to defaults
    pub fn new() -> Self {
        Config {
            server: ServerConfig::new(),
            upstream: UpstreamConfig::new(),
            cache: CacheConfig::new(),
            log: LogConfig::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_public_sites() {
        let config = Config::default();
        assert_eq!(config.upstream.dictionary_base_url, "https://dictionary.cambridge.org");
        assert_eq!(config.upstream.conjugation_base_url, "https://simple.wiktionary.org");
        assert_eq!(config.server.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.cache.ttl().as_secs(), 86_400);
        assert_eq!(config.log.format, LogFormat::Pretty);
    }
}
