//! Runtime configuration
//!
//! Settings collected from the command line, validated, and turned into a
//! word [`Provider`].

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

use crate::core::ScoringRule;
use crate::provider::{
    DEFAULT_DICTIONARY_URL, DEFAULT_WORD_URL, HttpProvider, Provider, ProviderError, RetryPolicy,
};
use crate::wordlists::WordList;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,

    #[error("failed to read word list {path:?}: {source}")]
    WordList {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("word list {path:?} contains no five-letter words")]
    EmptyWordList { path: PathBuf },

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Game configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Random-word service URL.
    pub word_url: String,
    /// Dictionary service URL prefix; the lower-case word is appended.
    pub dictionary_url: String,
    /// Play offline from this list instead of the remote services.
    pub word_list: Option<PathBuf>,
    pub scoring: ScoringRule,
    /// Timeout for each HTTP request.
    pub request_timeout: Duration,
    pub retry: RetryPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_url: DEFAULT_WORD_URL.to_string(),
            dictionary_url: DEFAULT_DICTIONARY_URL.to_string(),
            word_list: None,
            scoring: ScoringRule::default(),
            request_timeout: Duration::from_secs(10),
            retry: RetryPolicy::default(),
        }
    }
}

impl Config {
    /// Build the word provider this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for malformed URLs, a zero timeout, or an
    /// unreadable or empty word list.
    pub fn build_provider(&self) -> Result<Provider, ConfigError> {
        if let Some(path) = &self.word_list {
            let list = WordList::from_file(path).map_err(|source| ConfigError::WordList {
                path: path.clone(),
                source,
            })?;
            if list.is_empty() {
                return Err(ConfigError::EmptyWordList { path: path.clone() });
            }
            tracing::info!(path = %path.display(), words = list.len(), "using local word list");
            return Ok(Provider::WordList(list));
        }

        if self.request_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        let word_url = parse_url(&self.word_url)?;
        let dictionary_url = parse_url(&self.dictionary_url)?;
        let http = HttpProvider::new(word_url, dictionary_url, self.request_timeout)?;
        Ok(Provider::Http(http))
    }
}

fn parse_url(url: &str) -> Result<Url, ConfigError> {
    Url::parse(url).map_err(|e| ConfigError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })
}
