use crate::config::SourcesConfig;
use crate::fetch::Fetcher;

/// Shared application state handed to handlers: the HTTP client and the
/// upstream source configuration. Immutable after startup.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub fetcher: Fetcher,
    pub sources: SourcesConfig,
}

impl AppContext {
    pub fn new(fetcher: Fetcher, sources: SourcesConfig) -> Self {
        Self { fetcher, sources }
    }

    /// Build the context from the environment.
    ///
    /// # Errors
    ///
    /// Returns the HTTP client builder error.
    pub fn from_env() -> Result<Self, reqwest::Error> {
        Ok(Self::new(Fetcher::new()?, SourcesConfig::from_env()))
    }
}
