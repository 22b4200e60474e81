//! Target word acquisition and dictionary checks
//!
//! A target word comes from a [`WordSource`] and must be confirmed by a
//! [`Dictionary`] before a round can start. Candidates the dictionary does not
//! know are discarded and a new one is requested, up to the limit set by
//! [`RetryPolicy`].

mod error;
pub mod http;

use std::future::Future;
use std::time::Duration;

pub use error::ProviderError;
pub use http::{DEFAULT_DICTIONARY_URL, DEFAULT_WORD_URL, HttpProvider};

use crate::core::Word;
use crate::wordlists::WordList;

/// Dictionary verdict for a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Defined,
    Undefined,
}

/// Source of random candidate words.
pub trait WordSource {
    /// Fetch one raw candidate. The text is not yet validated as a word.
    fn random_word(&self) -> impl Future<Output = Result<String, ProviderError>> + Send;
}

/// Source of truth for which words exist.
pub trait Dictionary {
    /// Look a word up. Errors are transport failures, not misses.
    fn lookup(&self, word: &Word) -> impl Future<Output = Result<Lookup, ProviderError>> + Send;
}

/// How persistently to look for a dictionary word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Candidates to try before giving up; 0 retries forever.
    pub max_attempts: u32,
    /// Delay after the first miss, doubled after each further miss.
    /// Zero retries immediately.
    pub base_delay: Duration,
    /// Upper bound for the delay between attempts.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 50,
            base_delay: Duration::ZERO,
            max_delay: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    /// Whether another candidate may be requested after `attempts` misses
    #[must_use]
    pub const fn allows_retry(&self, attempts: u32) -> bool {
        self.max_attempts == 0 || attempts < self.max_attempts
    }

    /// Delay to wait after the `attempt`-th miss (1-based)
    #[must_use]
    pub fn delay_after(&self, attempt: u32) -> Duration {
        if self.base_delay.is_zero() {
            return Duration::ZERO;
        }
        let exponent = attempt.saturating_sub(1).min(16);
        self.base_delay
            .saturating_mul(1 << exponent)
            .min(self.max_delay)
    }
}

/// Obtain a dictionary-checked target word.
///
/// Candidates that are not five-letter words, or that the dictionary does not
/// know, are discarded silently. Transport and parse failures end the search
/// immediately.
///
/// # Errors
///
/// Returns the first hard [`ProviderError`] from either service, or
/// [`ProviderError::Exhausted`] when the retry budget runs out.
pub async fn acquire_target_word<S, D>(
    source: &S,
    dictionary: &D,
    policy: &RetryPolicy,
) -> Result<Word, ProviderError>
where
    S: WordSource + Sync,
    D: Dictionary + Sync,
{
    let mut attempts: u32 = 0;
    loop {
        attempts += 1;
        let raw = source.random_word().await?;

        match Word::new(&raw) {
            Ok(candidate) => match dictionary.lookup(&candidate).await? {
                Lookup::Defined => {
                    tracing::info!(attempts, "target word acquired");
                    return Ok(candidate);
                }
                Lookup::Undefined => {
                    tracing::debug!(attempts, "candidate not in dictionary, retrying");
                }
            },
            Err(err) => {
                tracing::debug!(attempts, candidate = %raw, %err, "unusable candidate, retrying");
            }
        }

        if !policy.allows_retry(attempts) {
            tracing::warn!(attempts, "giving up on finding a dictionary word");
            return Err(ProviderError::Exhausted { attempts });
        }

        let delay = policy.delay_after(attempts);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Check a submitted guess against the dictionary.
///
/// Fails closed: a transport error counts as "not a word".
pub async fn validate_guess<D>(dictionary: &D, guess: &Word) -> bool
where
    D: Dictionary + Sync,
{
    match dictionary.lookup(guess).await {
        Ok(Lookup::Defined) => true,
        Ok(Lookup::Undefined) => false,
        Err(err) => {
            tracing::warn!(%err, "dictionary check failed, rejecting guess");
            false
        }
    }
}

impl WordSource for WordList {
    fn random_word(&self) -> impl Future<Output = Result<String, ProviderError>> + Send {
        let pick = self
            .choose_random()
            .map(ToString::to_string)
            .ok_or(ProviderError::EmptyWordList);
        std::future::ready(pick)
    }
}

impl Dictionary for WordList {
    fn lookup(&self, word: &Word) -> impl Future<Output = Result<Lookup, ProviderError>> + Send {
        let verdict = if self.contains(word) {
            Lookup::Defined
        } else {
            Lookup::Undefined
        };
        std::future::ready(Ok(verdict))
    }
}

/// The configured backend: remote services or a local list.
#[derive(Debug)]
pub enum Provider {
    Http(HttpProvider),
    WordList(WordList),
}

impl WordSource for Provider {
    async fn random_word(&self) -> Result<String, ProviderError> {
        match self {
            Self::Http(http) => http.random_word().await,
            Self::WordList(list) => list.random_word().await,
        }
    }
}

impl Dictionary for Provider {
    async fn lookup(&self, word: &Word) -> Result<Lookup, ProviderError> {
        match self {
            Self::Http(http) => http.lookup(word).await,
            Self::WordList(list) => list.lookup(word).await,
        }
    }
}
