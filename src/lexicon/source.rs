//! WordSource trait and related types
//!
//! The pluggable abstraction over "fetch a tagged word list for a relation".
//! The production implementation is [`crate::datamuse::DatamuseClient`]; the
//! in-memory implementations here serve tests and graceful degradation.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;

use super::word::Word;

/// A named lexical association the provider can be queried for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Words with a similar meaning ("means like"). Sole source of base verbs.
    MeansLike,
    /// Nouns the query word frequently modifies. Base noun list.
    NounsModifiedBy,
    /// Adjectives frequently used to modify the query word. Base adjectives.
    AdjectivesFor,
    /// Synonyms.
    Synonym,
    /// Statistically associated ("trigger") words.
    Trigger,
    /// Hypernyms: words the query word is a kind of.
    KindOf,
    /// Words that commonly precede the query word in text.
    Precedes,
    /// Words that commonly follow the query word in text.
    Follows,
}

impl Relation {
    /// The provider-side query parameter for this relation.
    pub fn query_param(&self) -> &'static str {
        match self {
            Self::MeansLike => "ml",
            Self::NounsModifiedBy => "rel_jja",
            Self::AdjectivesFor => "rel_jjb",
            Self::Synonym => "rel_syn",
            Self::Trigger => "rel_trg",
            Self::KindOf => "rel_spc",
            Self::Precedes => "rel_bgb",
            Self::Follows => "rel_bga",
        }
    }

    /// The five auxiliary relations merged into every class pool.
    pub fn auxiliaries() -> [Self; 5] {
        [
            Self::Synonym,
            Self::Trigger,
            Self::KindOf,
            Self::Precedes,
            Self::Follows,
        ]
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MeansLike => write!(f, "means-like"),
            Self::NounsModifiedBy => write!(f, "nouns-modified-by"),
            Self::AdjectivesFor => write!(f, "adjectives-for"),
            Self::Synonym => write!(f, "synonym"),
            Self::Trigger => write!(f, "trigger"),
            Self::KindOf => write!(f, "kind-of"),
            Self::Precedes => write!(f, "precedes"),
            Self::Follows => write!(f, "follows"),
        }
    }
}

/// Trait for pluggable word-relation providers
///
/// Each implementation answers "which words stand in `relation` to `query`",
/// already normalized to [`Word`].
///
/// # Implementation Notes
///
/// - Return an empty Vec rather than an error for "no data available";
///   errors are reserved for transport/parse failures.
/// - Callers degrade a failed relation to an empty list, so implementations
///   need not retry.
/// - `starts_with` constrains results to surfaces beginning with the letter.
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Unique identifier for this source (e.g., "datamuse"), used in logs.
    fn source_id(&self) -> &'static str;

    /// Fetch the words standing in `relation` to `query`.
    async fn related_words(
        &self,
        query: &str,
        relation: Relation,
        starts_with: Option<char>,
    ) -> Result<Vec<Word>>;
}

/// In-memory word source backed by fixed per-relation tables.
///
/// Useful for tests and demos: no network, deterministic content. The
/// starting-letter constraint is applied locally, mirroring what the real
/// provider does server-side.
#[derive(Debug, Default)]
pub struct StaticWordSource {
    tables: HashMap<Relation, Vec<Word>>,
}

impl StaticWordSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the word list served for a relation.
    pub fn with_relation(mut self, relation: Relation, words: Vec<Word>) -> Self {
        self.tables.insert(relation, words);
        self
    }
}

#[async_trait]
impl WordSource for StaticWordSource {
    fn source_id(&self) -> &'static str {
        "static"
    }

    async fn related_words(
        &self,
        _query: &str,
        relation: Relation,
        starts_with: Option<char>,
    ) -> Result<Vec<Word>> {
        let words = self.tables.get(&relation).cloned().unwrap_or_default();
        Ok(match starts_with {
            Some(letter) => {
                let letter = letter.to_ascii_lowercase();
                words
                    .into_iter()
                    .filter(|w| {
                        w.surface
                            .chars()
                            .next()
                            .is_some_and(|c| c.to_ascii_lowercase() == letter)
                    })
                    .collect()
            }
            None => words,
        })
    }
}

/// Word source that knows nothing: every lookup yields an empty list.
///
/// Stands in for the provider in degradation scenarios and in tests that
/// exercise the starved-build path.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyWordSource;

#[async_trait]
impl WordSource for EmptyWordSource {
    fn source_id(&self) -> &'static str {
        "empty"
    }

    async fn related_words(
        &self,
        _query: &str,
        _relation: Relation,
        _starts_with: Option<char>,
    ) -> Result<Vec<Word>> {
        Ok(vec![])
    }
}
