//! Remote word services over HTTP
//!
//! - Random words: `GET {word_url}` returns a JSON array whose first element
//!   is a lower-case word, e.g. `["crane"]`.
//! - Dictionary: `GET {dictionary_url}{word}` with the word in lower case.
//!   Any 2xx means the word exists; every other status means it does not.

use std::time::Duration;

use reqwest::{Client, Url};

use super::{Dictionary, Lookup, ProviderError, WordSource};
use crate::core::Word;

/// Default random five-letter word service
pub const DEFAULT_WORD_URL: &str = "https://random-word-api.herokuapp.com/word?length=5";

/// Default dictionary service; the word is appended to this prefix
pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en/";

/// Client for the random-word and dictionary services.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: Client,
    word_url: Url,
    dictionary_url: Url,
}

impl HttpProvider {
    /// Build a provider with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] if the HTTP client cannot be built.
    pub fn new(
        word_url: Url,
        dictionary_url: Url,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            word_url,
            dictionary_url,
        })
    }

    /// Dictionary entry URL for a word
    #[must_use]
    pub fn entry_url(&self, word: &Word) -> String {
        format!("{}{}", self.dictionary_url, word.to_lowercase())
    }
}

/// Extract the first word from a random-word service body
pub(crate) fn parse_word_response(body: &[u8]) -> Result<String, ProviderError> {
    let words: Vec<String> =
        serde_json::from_slice(body).map_err(|e| ProviderError::Malformed(e.to_string()))?;

    words
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::Malformed("empty word array".to_string()))
}

impl WordSource for HttpProvider {
    async fn random_word(&self) -> Result<String, ProviderError> {
        let response = self.client.get(self.word_url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        parse_word_response(&body)
    }
}

impl Dictionary for HttpProvider {
    async fn lookup(&self, word: &Word) -> Result<Lookup, ProviderError> {
        let url = self.entry_url(word);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        tracing::debug!(%status, "dictionary lookup");

        if status.is_success() {
            Ok(Lookup::Defined)
        } else {
            Ok(Lookup::Undefined)
        }
    }
}
