//! Word provider errors

use thiserror::Error;

/// Hard failures while fetching or checking words.
///
/// A dictionary miss is not an error; it is reported as
/// [`Lookup::Undefined`](super::Lookup::Undefined).
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport failure (connect, timeout, TLS, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The random-word service answered with a non-success status.
    #[error("word service returned status {0}")]
    Status(u16),

    /// The random-word service answered with something other than a
    /// non-empty JSON array of strings.
    #[error("malformed word service response: {0}")]
    Malformed(String),

    /// A local word list has no usable entries.
    #[error("word list is empty")]
    EmptyWordList,

    /// The retry budget ran out before a dictionary word turned up.
    #[error("no dictionary word found after {attempts} attempts")]
    Exhausted {
        /// Number of candidates tried.
        attempts: u32,
    },
}
