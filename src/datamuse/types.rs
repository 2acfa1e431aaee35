//! Raw Datamuse wire types
//!
//! Mirrors the `/words` response format. Every field except `word` is
//! metadata that may be absent depending on the `md` flags sent with the
//! query, so the raw type is tolerant and normalization decides what is
//! usable.

use serde::Deserialize;

use crate::lexicon::{Word, WordClass};

/// One record from the `/words` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DatamuseWord {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub score: i64,
    #[serde(rename = "numSyllables")]
    pub num_syllables: Option<u32>,
    /// Mixed bag with `md=sp`: part-of-speech codes plus markers like
    /// `query` or pronunciation entries.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl DatamuseWord {
    /// Normalize into a domain [`Word`], or `None` if the record is
    /// unusable for assembly.
    ///
    /// A record needs a non-empty surface and a positive syllable count;
    /// non-POS tags are dropped. A record with no recognized POS tag is
    /// kept (the class filter happens at pool-merge time).
    pub fn into_word(self) -> Option<Word> {
        if self.word.trim().is_empty() {
            return None;
        }
        let syllables = self.num_syllables.filter(|&n| n > 0)?;

        let classes: Vec<WordClass> = self
            .tags
            .iter()
            .filter_map(|tag| WordClass::from_tag(tag))
            .collect();

        Some(Word::new(self.word, syllables, classes).with_score(self.score))
    }
}

/// Normalize a whole response, dropping unusable records.
pub fn normalize(records: Vec<DatamuseWord>) -> Vec<Word> {
    records
        .into_iter()
        .filter_map(DatamuseWord::into_word)
        .collect()
}
