//! Text statistics helpers.
//!
//! Character-shape helpers used by the randomness heuristics, plus a
//! built-in deterministic readability provider (Flesch reading ease over a
//! vowel-group syllable estimate) so the statistical check works without
//! any external service.
//!
//! The vowel set is fixed at ASCII `aeiou`, matching the heuristics this
//! engine reproduces. `y` counts as a vowel only for syllable estimation.

use crate::providers::{ReadabilityError, ReadabilityProvider};

/// Whether a character is one of `aeiou` (either case).
pub fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Number of vowels in a word.
pub fn vowel_count(word: &str) -> usize {
    word.chars().filter(|c| is_vowel(*c)).count()
}

/// Longest run of consecutive consonants in a word.
///
/// A consonant is an alphabetic character that is not a vowel; anything
/// else breaks the run.
pub fn max_consonant_run(word: &str) -> usize {
    let mut max = 0;
    let mut current = 0;

    for c in word.chars() {
        if c.is_alphabetic() && !is_vowel(c) {
            current += 1;
            max = max.max(current);
        } else {
            current = 0;
        }
    }

    max
}

/// Estimate syllables in one word by counting vowel groups.
///
/// `y` counts as a vowel here, a trailing silent `e` is dropped, and every
/// word gets at least one syllable.
pub fn estimate_syllables(word: &str) -> u32 {
    let lower: String = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    if lower.is_empty() {
        return 0;
    }

    let syllable_vowel = |c: char| is_vowel(c) || c == 'y';

    let mut groups = 0u32;
    let mut in_group = false;
    for c in lower.chars() {
        if syllable_vowel(c) {
            if !in_group {
                groups += 1;
            }
            in_group = true;
        } else {
            in_group = false;
        }
    }

    if groups > 1 && lower.ends_with('e') && !lower.ends_with("le") {
        groups -= 1;
    }

    groups.max(1)
}

/// Words of a text, for statistics: whitespace-separated chunks that
/// contain at least one alphabetic character.
fn stat_words(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .filter(|w| w.chars().any(char::is_alphabetic))
        .collect()
}

/// Sentence count: runs of `.`, `!` or `?` end a sentence; texts with no
/// terminator count as one sentence.
fn sentence_count(text: &str) -> usize {
    let mut count = 0;
    let mut in_terminator = false;
    for c in text.chars() {
        if matches!(c, '.' | '!' | '?') {
            if !in_terminator {
                count += 1;
            }
            in_terminator = true;
        } else {
            in_terminator = false;
        }
    }
    count.max(1)
}

/// Flesch reading ease over the whole text, or `None` when the text has no
/// words to measure.
pub fn flesch_reading_ease(text: &str) -> Option<f64> {
    let words = stat_words(text);
    if words.is_empty() {
        return None;
    }

    let word_count = words.len() as f64;
    let syllables: u32 = words.iter().map(|w| estimate_syllables(w)).sum();
    let sentences = sentence_count(text) as f64;

    Some(206.835 - 1.015 * (word_count / sentences) - 84.6 * (f64::from(syllables) / word_count))
}

/// Total estimated syllables of a text, or `None` when it has no words.
pub fn total_syllables(text: &str) -> Option<u32> {
    let words = stat_words(text);
    if words.is_empty() {
        return None;
    }
    Some(words.iter().map(|w| estimate_syllables(w)).sum())
}

/// The built-in readability provider.
///
/// Deterministic and infallible except on texts with no measurable words,
/// where it reports [`ReadabilityError::NotComputable`] — which the
/// readability check absorbs.
#[derive(Debug, Clone, Copy, Default)]
pub struct FleschReadability;

impl FleschReadability {
    pub fn new() -> Self {
        Self
    }
}

impl ReadabilityProvider for FleschReadability {
    fn reading_ease(&self, text: &str) -> Result<f64, ReadabilityError> {
        flesch_reading_ease(text)
            .ok_or_else(|| ReadabilityError::NotComputable("no words to measure".to_string()))
    }

    fn syllable_count(&self, text: &str) -> Result<u32, ReadabilityError> {
        total_syllables(text)
            .ok_or_else(|| ReadabilityError::NotComputable("no words to measure".to_string()))
    }
}
