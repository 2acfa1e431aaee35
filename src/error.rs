//! Error types for haiku generation

use thiserror::Error;

/// Errors surfaced by the generation pipeline.
///
/// Provider failures are absorbed earlier: a failed related-words lookup
/// degrades that relation to an empty list, so the only way thin pools
/// reach the caller is as [`HaikuError::Starved`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HaikuError {
    /// The keyword was empty or all whitespace.
    #[error("keyword must not be empty")]
    EmptyKeyword,

    /// A line could not be completed: every class pool was exhausted or
    /// unusable before the syllable target was met.
    #[error("line {line} ran out of candidate words with {remaining_syllables} syllable(s) unfilled")]
    Starved {
        /// 1-based index of the line under construction.
        line: usize,
        /// Syllables still needed when assembly gave up.
        remaining_syllables: u32,
    },
}

pub type Result<T> = std::result::Result<T, HaikuError>;
