//! Per-call analysis of a submission.
//!
//! Everything the checks need is computed once up front: the trimmed text,
//! the alphabetic tokens with their spans, and case-insensitive character
//! frequencies. All spans are byte offsets into the trimmed text, matching
//! the `text[start:end]` evidence pointers.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A token is a maximal run of alphabetic characters.
    static ref TOKEN_PATTERN: Regex = Regex::new(r"\p{Alphabetic}+").unwrap();
}

/// One alphabetic token of the submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token as it appears in the text.
    pub text: String,

    /// Lower-cased form, used by the shape heuristics.
    pub lower: String,

    /// Byte span within the trimmed text.
    pub start: usize,
    pub end: usize,
}

impl Token {
    /// Length in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// A maximal run of one repeated character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Run {
    pub ch: char,
    pub len: usize,
    pub start: usize,
    pub end: usize,
}

/// Precomputed analysis state shared by all checks.
#[derive(Debug)]
pub struct Analysis<'a> {
    /// The input exactly as submitted.
    pub raw: &'a str,

    /// The whitespace-trimmed input. This is what an accepted verdict
    /// returns, and what every span refers to.
    pub trimmed: &'a str,

    /// Alphabetic tokens, in order of appearance.
    pub tokens: Vec<Token>,

    /// Case-insensitive character occurrence counts over the trimmed text.
    pub char_frequency: HashMap<char, usize>,

    /// Total characters counted into `char_frequency`.
    pub char_count: usize,
}

impl<'a> Analysis<'a> {
    /// Analyze a submission.
    pub fn of(raw: &'a str) -> Self {
        let trimmed = raw.trim();

        let tokens = TOKEN_PATTERN
            .find_iter(trimmed)
            .map(|m| Token {
                text: m.as_str().to_string(),
                lower: m.as_str().to_lowercase(),
                start: m.start(),
                end: m.end(),
            })
            .collect();

        let mut char_frequency = HashMap::new();
        let mut char_count = 0;
        for c in trimmed.chars() {
            for lc in c.to_lowercase() {
                *char_frequency.entry(lc).or_insert(0) += 1;
                char_count += 1;
            }
        }

        Self {
            raw,
            trimmed,
            tokens,
            char_frequency,
            char_count,
        }
    }

    /// Whether any character of the trimmed text is alphabetic.
    pub fn has_alphabetic(&self) -> bool {
        self.trimmed.chars().any(char::is_alphabetic)
    }

    /// Character length of the trimmed text.
    pub fn trimmed_len(&self) -> usize {
        self.trimmed.chars().count()
    }

    /// The longest run of one repeated character (case-insensitive), if the
    /// text is non-empty.
    pub fn longest_identical_run(&self) -> Option<Run> {
        let mut best: Option<Run> = None;
        let mut current: Option<Run> = None;

        for (idx, c) in self.trimmed.char_indices() {
            let folded = c.to_lowercase().next().unwrap_or(c);
            let end = idx + c.len_utf8();

            match current.as_mut() {
                Some(run) if run.ch == folded => {
                    run.len += 1;
                    run.end = end;
                }
                _ => {
                    if let Some(run) = current.take() {
                        if best.map_or(true, |b| run.len > b.len) {
                            best = Some(run);
                        }
                    }
                    current = Some(Run {
                        ch: folded,
                        len: 1,
                        start: idx,
                        end,
                    });
                }
            }
        }

        if let Some(run) = current {
            if best.map_or(true, |b| run.len > b.len) {
                best = Some(run);
            }
        }

        best
    }

    /// The most frequent character and its count, if any.
    pub fn dominant_char(&self) -> Option<(char, usize)> {
        self.char_frequency
            .iter()
            .max_by_key(|(_, count)| **count)
            .map(|(c, count)| (*c, *count))
    }
}
