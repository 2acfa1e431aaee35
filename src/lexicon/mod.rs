//! Lexicon layer: words, word sources, and per-class pools
//!
//! Everything the assembler samples from lives here. [`Word`] and
//! [`WordClass`] are the core vocabulary types, [`WordSource`] abstracts
//! over the related-words provider, and [`WordPool`] holds the merged
//! per-class candidate maps for one keyword.

pub mod pool;
pub mod source;
pub mod word;

pub use pool::{merge_and_tag, WordPool};
pub use source::{EmptyWordSource, Relation, StaticWordSource, WordSource};
pub use word::{Word, WordClass};
