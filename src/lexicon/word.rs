//! Core lexical domain types
//!
//! `Word` is the normalized candidate produced from provider records, and
//! `WordClass` is the enumerated part-of-speech used by the assembly grammar.

use serde::{Deserialize, Serialize};

/// Grammatical class used by the line-assembly transition grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordClass {
    Noun,
    Verb,
    Adjective,
}

impl WordClass {
    /// Parse a provider part-of-speech tag. Tags outside the grammar
    /// (adverbs, proper-noun markers, pronunciation metadata) map to `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "n" => Some(Self::Noun),
            "v" => Some(Self::Verb),
            "adj" => Some(Self::Adjective),
            _ => None,
        }
    }

    /// The provider-side tag for this class.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Noun => "n",
            Self::Verb => "v",
            Self::Adjective => "adj",
        }
    }

    /// Fixed transition table: noun -> verb -> adjective -> noun.
    ///
    /// The walk continues across line boundaries; callers must not reset it
    /// between lines.
    pub fn next(self) -> Self {
        match self {
            Self::Noun => Self::Verb,
            Self::Verb => Self::Adjective,
            Self::Adjective => Self::Noun,
        }
    }

    /// All classes, in transition order starting from `Noun`.
    pub fn all() -> [Self; 3] {
        [Self::Noun, Self::Verb, Self::Adjective]
    }
}

impl std::fmt::Display for WordClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Noun => write!(f, "noun"),
            Self::Verb => write!(f, "verb"),
            Self::Adjective => write!(f, "adjective"),
        }
    }
}

/// A candidate word with provider-supplied syllable metadata.
///
/// Immutable once normalized. `syllables` is always >= 1; records without
/// syllable metadata are dropped before a `Word` is built. `score` is the
/// provider's relevance ranking; assembly ignores it but callers inspecting
/// pools may not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub surface: String,
    pub syllables: u32,
    pub classes: Vec<WordClass>,
    #[serde(default)]
    pub score: i64,
}

impl Word {
    /// Build a word with no relevance score (fixtures, tests).
    pub fn new(surface: impl Into<String>, syllables: u32, classes: Vec<WordClass>) -> Self {
        Self {
            surface: surface.into(),
            syllables,
            classes,
            score: 0,
        }
    }

    /// Attach the provider relevance score.
    pub fn with_score(mut self, score: i64) -> Self {
        self.score = score;
        self
    }

    /// Whether this word belongs to the given grammatical class.
    pub fn has_class(&self, class: WordClass) -> bool {
        self.classes.contains(&class)
    }
}
