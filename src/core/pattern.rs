//! Per-letter scoring of a guess against the target
//!
//! Each letter of a guess scores one of:
//! - Exact (green): right letter, right position
//! - Present (yellow): letter occurs elsewhere in the target
//! - Absent (gray): letter does not occur in the target
//!
//! Two rules are supported. [`ScoringRule::Simple`] marks a letter Present
//! whenever the target contains it, no matter how many times the guess repeats
//! it. [`ScoringRule::Standard`] is Wordle's frequency-aware rule.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Score of a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterScore {
    Exact,
    Present,
    Absent,
}

impl LetterScore {
    /// Emoji square for the score
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// How repeated letters are scored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ScoringRule {
    /// Present whenever the target contains the letter anywhere
    #[default]
    Simple,
    /// Present only while unmatched occurrences remain in the target
    Standard,
}

/// Classify one letter of a guess under the simple rule
///
/// `letter` is expected to be `guess.letters()[index]`.
///
/// # Panics
/// Panics if `index >= 5`
///
/// # Examples
/// ```
/// use wordle_clone::core::{LetterScore, Word, classify};
///
/// let target = Word::new("crane").unwrap();
/// let guess = Word::new("trace").unwrap();
/// assert_eq!(classify(b'R', 1, &guess, &target), LetterScore::Exact);
/// assert_eq!(classify(b'T', 0, &guess, &target), LetterScore::Absent);
/// ```
#[must_use]
pub fn classify(letter: u8, index: usize, guess: &Word, target: &Word) -> LetterScore {
    if guess.letters()[index] == target.letters()[index] {
        LetterScore::Exact
    } else if target.has_letter(letter) {
        LetterScore::Present
    } else {
        LetterScore::Absent
    }
}

/// Scores for all five letters of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern([LetterScore; WORD_LENGTH]);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([LetterScore::Exact; WORD_LENGTH]);

    #[must_use]
    pub const fn new(scores: [LetterScore; WORD_LENGTH]) -> Self {
        Self(scores)
    }

    /// Score `guess` against `target` using `rule`
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::{LetterScore::*, Pattern, ScoringRule, Word};
    ///
    /// let target = Word::new("crane").unwrap();
    /// let guess = Word::new("trace").unwrap();
    /// let pattern = Pattern::score(&guess, &target, ScoringRule::Simple);
    /// assert_eq!(pattern.scores(), &[Absent, Exact, Exact, Present, Exact]);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, target: &Word, rule: ScoringRule) -> Self {
        match rule {
            ScoringRule::Simple => Self::score_simple(guess, target),
            ScoringRule::Standard => Self::score_standard(guess, target),
        }
    }

    fn score_simple(guess: &Word, target: &Word) -> Self {
        let mut result = [LetterScore::Absent; WORD_LENGTH];
        for (i, (&letter, slot)) in guess.letters().iter().zip(result.iter_mut()).enumerate() {
            *slot = classify(letter, i, guess, target);
        }
        Self(result)
    }

    fn score_standard(guess: &Word, target: &Word) -> Self {
        let mut result = [LetterScore::Absent; WORD_LENGTH];
        let mut target_available = target.letter_counts();

        // First pass: greens consume their letter from the pool
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.letters()[i];
            if letter == target.letters()[i] {
                result[i] = LetterScore::Exact;
                if let Some(count) = target_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: yellows from whatever is left
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterScore::Exact {
                continue;
            }
            let letter = guess.letters()[i];
            if let Some(count) = target_available.get_mut(&letter)
                && *count > 0
            {
                result[i] = LetterScore::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub const fn scores(&self) -> &[LetterScore; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Convert pattern to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::LetterScore::{Absent, Exact, Present};
    use super::*;

    fn score(guess: &str, target: &str, rule: ScoringRule) -> [LetterScore; 5] {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        *Pattern::score(&guess, &target, rule).scores()
    }

    #[test]
    fn pattern_all_green() {
        let word = Word::new("crane").unwrap();
        let pattern = Pattern::score(&word, &word, ScoringRule::Simple);
        assert_eq!(pattern, Pattern::PERFECT);
        assert!(pattern.is_perfect());
    }

    #[test]
    fn pattern_all_gray() {
        assert_eq!(score("bulky", "crane", ScoringRule::Simple), [Absent; 5]);
    }

    #[test]
    fn pattern_trace_against_crane() {
        assert_eq!(
            score("trace", "crane", ScoringRule::Simple),
            [Absent, Exact, Exact, Present, Exact]
        );
    }

    #[test]
    fn simple_rule_over_reports_repeated_letters() {
        // CRANE has a single E; the simple rule still marks every E yellow
        assert_eq!(
            score("eerie", "crane", ScoringRule::Simple),
            [Present, Present, Present, Absent, Exact]
        );
    }

    #[test]
    fn standard_rule_consumes_letters() {
        assert_eq!(
            score("eerie", "crane", ScoringRule::Standard),
            [Absent, Absent, Present, Absent, Exact]
        );
    }

    #[test]
    fn standard_rule_duplicate_letters_complex() {
        // ROBOT vs FLOOR: first O yellow, second O green
        assert_eq!(
            score("robot", "floor", ScoringRule::Standard),
            [Present, Present, Absent, Exact, Absent]
        );
    }

    #[test]
    fn rules_agree_without_repeats() {
        let pairs = [
            ("crane", "slate"),
            ("audio", "radio"),
            ("trace", "crane"),
        ];
        for (guess, target) in pairs {
            assert_eq!(
                score(guess, target, ScoringRule::Simple),
                score(guess, target, ScoringRule::Standard),
                "{guess} vs {target}"
            );
        }
    }

    #[test]
    fn pattern_to_emoji() {
        let pattern = Pattern::new([Exact, Present, Absent, Exact, Present]);
        assert_eq!(pattern.to_emoji(), "🟩🟨⬜🟩🟨");
        assert_eq!(pattern.to_string(), "🟩🟨⬜🟩🟨");
    }
}
