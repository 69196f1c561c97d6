//! Configuration: `.env` loading plus typed config structs built from
//! environment variables with sensible defaults.

pub mod env;

pub use env::{env, env_optional, load_dotenv};

use url::Url;

use crate::datasets::{Endpoint, PEOPLE_URL, USERS_URL};

/// Server bind configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Build config from `SERVER_HOST` / `SERVER_PORT`.
    pub fn from_env() -> Self {
        Self {
            host: env("SERVER_HOST", "127.0.0.1".to_string()),
            port: env("SERVER_PORT", 8000),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// The two upstream sources, in fetch (and display) order.
///
/// Defaults are the fixed public endpoints; `PEOPLE_URL` / `USERS_URL`
/// override them so tests and local stubs can point elsewhere.
#[derive(Debug, Clone)]
pub struct SourcesConfig {
    pub people: Endpoint,
    pub users: Endpoint,
}

impl SourcesConfig {
    pub fn from_env() -> Self {
        Self {
            people: Endpoint::people(required_url("PEOPLE_URL", PEOPLE_URL)),
            users: Endpoint::users(required_url("USERS_URL", USERS_URL)),
        }
    }

    /// Endpoints in fetch order: people first, users second.
    pub fn endpoints(&self) -> [Endpoint; 2] {
        [self.people.clone(), self.users.clone()]
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Parse an env override or the compiled-in default. An unparseable
/// override is a misconfiguration worth failing startup over.
fn required_url(key: &str, default: &str) -> Url {
    let raw = env(key, default.to_string());
    Url::parse(&raw).unwrap_or_else(|e| panic!("{} is not a valid URL ({}): {}", key, raw, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_default_to_the_fixed_endpoints() {
        let sources = SourcesConfig::from_env();
        assert_eq!(sources.people.url.as_str(), PEOPLE_URL);
        assert_eq!(sources.users.url.as_str(), USERS_URL);
    }

    #[test]
    fn endpoints_keep_fetch_order() {
        let sources = SourcesConfig::from_env();
        let [first, second] = sources.endpoints();
        assert_eq!(first.label, "Swapi Data");
        assert_eq!(second.label, "JSPH Data");
    }
}
