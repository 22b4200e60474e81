//! Word provider behavior against scripted in-memory services.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use wordle_clone::core::Word;
use wordle_clone::provider::{
    Dictionary, Lookup, ProviderError, RetryPolicy, WordSource, acquire_target_word,
    validate_guess,
};

/// Hands out scripted candidates in order. `None` entries fail hard.
struct ScriptedSource {
    script: Mutex<VecDeque<Option<&'static str>>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    fn new(script: &[Option<&'static str>]) -> Self {
        Self {
            script: Mutex::new(script.iter().copied().collect()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Source that always returns the same candidate.
    fn repeating(word: &'static str) -> Self {
        Self::new(&[Some(word); 64])
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl WordSource for ScriptedSource {
    fn random_word(&self) -> impl Future<Output = Result<String, ProviderError>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().unwrap().pop_front();
        let result = match next {
            Some(Some(word)) => Ok(word.to_string()),
            Some(None) => Err(ProviderError::Status(503)),
            None => Err(ProviderError::Malformed("script exhausted".to_string())),
        };
        std::future::ready(result)
    }
}

/// Knows a fixed set of words, or fails every lookup when `offline`.
struct FakeDictionary {
    known: Vec<&'static str>,
    offline: bool,
    lookups: AtomicUsize,
}

impl FakeDictionary {
    fn knowing(known: &[&'static str]) -> Self {
        Self {
            known: known.to_vec(),
            offline: false,
            lookups: AtomicUsize::new(0),
        }
    }

    fn offline() -> Self {
        Self {
            known: Vec::new(),
            offline: true,
            lookups: AtomicUsize::new(0),
        }
    }
}

impl Dictionary for FakeDictionary {
    fn lookup(&self, word: &Word) -> impl Future<Output = Result<Lookup, ProviderError>> + Send {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let lower = word.to_lowercase();
        let result = if self.offline {
            Err(ProviderError::Malformed("connection refused".to_string()))
        } else if self.known.iter().any(|known| *known == lower) {
            Ok(Lookup::Defined)
        } else {
            Ok(Lookup::Undefined)
        };
        std::future::ready(result)
    }
}

#[tokio::test]
async fn scenario_e_dictionary_miss_is_retried_silently() {
    let source = ScriptedSource::new(&[Some("qwxyz"), Some("zzzzz"), Some("crane")]);
    let dictionary = FakeDictionary::knowing(&["crane"]);

    let word = acquire_target_word(&source, &dictionary, &RetryPolicy::default())
        .await
        .unwrap();

    assert_eq!(word.as_str(), "CRANE");
    assert_eq!(source.calls(), 3);
    assert_eq!(dictionary.lookups.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn malformed_candidates_are_skipped_without_lookup() {
    let source = ScriptedSource::new(&[Some("toolong"), Some("ab-cd"), Some("slate")]);
    let dictionary = FakeDictionary::knowing(&["slate"]);

    let word = acquire_target_word(&source, &dictionary, &RetryPolicy::default())
        .await
        .unwrap();

    assert_eq!(word.as_str(), "SLATE");
    assert_eq!(dictionary.lookups.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn word_source_failure_is_hard() {
    let source = ScriptedSource::new(&[Some("qwxyz"), None, Some("crane")]);
    let dictionary = FakeDictionary::knowing(&["crane"]);

    let err = acquire_target_word(&source, &dictionary, &RetryPolicy::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Status(503)));
    assert_eq!(source.calls(), 2);
}

#[tokio::test]
async fn dictionary_failure_during_acquisition_is_hard() {
    let source = ScriptedSource::repeating("crane");
    let dictionary = FakeDictionary::offline();

    let err = acquire_target_word(&source, &dictionary, &RetryPolicy::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Malformed(_)));
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn retry_budget_is_enforced() {
    let source = ScriptedSource::repeating("qwxyz");
    let dictionary = FakeDictionary::knowing(&[]);
    let policy = RetryPolicy {
        max_attempts: 5,
        ..RetryPolicy::default()
    };

    let err = acquire_target_word(&source, &dictionary, &policy)
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Exhausted { attempts: 5 }));
    assert_eq!(source.calls(), 5);
}

#[tokio::test(start_paused = true)]
async fn backoff_waits_between_misses() {
    let source = ScriptedSource::new(&[Some("qwxyz"), Some("qwxyz"), Some("crane")]);
    let dictionary = FakeDictionary::knowing(&["crane"]);
    let policy = RetryPolicy {
        max_attempts: 0,
        base_delay: Duration::from_millis(100),
        max_delay: Duration::from_secs(1),
    };

    let started = tokio::time::Instant::now();
    let word = acquire_target_word(&source, &dictionary, &policy)
        .await
        .unwrap();

    assert_eq!(word.as_str(), "CRANE");
    // 100ms after the first miss, 200ms after the second
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(300), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(400), "{elapsed:?}");
}

#[tokio::test]
async fn repeated_acquisition_gives_same_outcome() {
    let dictionary = FakeDictionary::knowing(&["crane"]);
    for misses in 0..4 {
        let mut script = vec![Some("qwxyz"); misses];
        script.push(Some("crane"));
        let source = ScriptedSource::new(&script);

        let word = acquire_target_word(&source, &dictionary, &RetryPolicy::default())
            .await
            .unwrap();
        assert_eq!(word.as_str(), "CRANE");
    }
}

#[tokio::test]
async fn guess_validation_fails_closed() {
    let crane = Word::new("crane").unwrap();

    let knows_crane = FakeDictionary::knowing(&["crane"]);
    let knows_slate = FakeDictionary::knowing(&["slate"]);
    let offline = FakeDictionary::offline();

    assert!(validate_guess(&knows_crane, &crane).await);
    assert!(!validate_guess(&knows_slate, &crane).await);
    assert!(!validate_guess(&offline, &crane).await);
}
