//! Property-based tests for letter scoring.

use proptest::prelude::*;
use wordle_clone::core::{LetterScore, Pattern, ScoringRule, Word, classify};

fn word_strategy() -> impl Strategy<Value = Word> {
    "[A-Z]{5}".prop_map(|s| Word::new(&s).unwrap())
}

proptest! {
    /// Exact exactly where the letters line up, under either rule.
    #[test]
    fn exact_iff_same_position(guess in word_strategy(), target in word_strategy()) {
        for rule in [ScoringRule::Simple, ScoringRule::Standard] {
            let pattern = Pattern::score(&guess, &target, rule);
            for i in 0..5 {
                let same = guess.letters()[i] == target.letters()[i];
                prop_assert_eq!(pattern.scores()[i] == LetterScore::Exact, same);
            }
        }
    }

    /// Simple scoring is classify applied per position.
    #[test]
    fn simple_pattern_matches_classify(guess in word_strategy(), target in word_strategy()) {
        let pattern = Pattern::score(&guess, &target, ScoringRule::Simple);
        for (i, &letter) in guess.letters().iter().enumerate() {
            prop_assert_eq!(pattern.scores()[i], classify(letter, i, &guess, &target));
        }
    }

    /// Absent under the simple rule means the letter is nowhere in the target.
    #[test]
    fn simple_absent_iff_missing(guess in word_strategy(), target in word_strategy()) {
        let pattern = Pattern::score(&guess, &target, ScoringRule::Simple);
        for (i, &letter) in guess.letters().iter().enumerate() {
            prop_assert_eq!(pattern.scores()[i] == LetterScore::Absent, !target.has_letter(letter));
        }
    }

    /// Standard never colors more than the simple rule does.
    #[test]
    fn standard_is_no_more_generous(guess in word_strategy(), target in word_strategy()) {
        let simple = Pattern::score(&guess, &target, ScoringRule::Simple);
        let standard = Pattern::score(&guess, &target, ScoringRule::Standard);
        for i in 0..5 {
            if simple.scores()[i] == LetterScore::Absent {
                prop_assert_eq!(standard.scores()[i], LetterScore::Absent);
            }
        }
    }

    /// Standard marks at most as many copies of a letter as the target holds.
    #[test]
    fn standard_respects_letter_counts(guess in word_strategy(), target in word_strategy()) {
        let pattern = Pattern::score(&guess, &target, ScoringRule::Standard);
        for letter in b'A'..=b'Z' {
            let marked = guess
                .letters()
                .iter()
                .zip(pattern.scores())
                .filter(|&(&l, &s)| l == letter && s != LetterScore::Absent)
                .count();
            let available = target.letters().iter().filter(|&&l| l == letter).count();
            prop_assert!(marked <= available);
        }
    }

    /// Scoring is deterministic and a word always matches itself.
    #[test]
    fn self_match_is_perfect(word in word_strategy()) {
        for rule in [ScoringRule::Simple, ScoringRule::Standard] {
            prop_assert!(Pattern::score(&word, &word, rule).is_perfect());
        }
    }
}
