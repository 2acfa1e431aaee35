//! Datamuse lexical-relations provider
//!
//! <https://www.datamuse.com/api/> is the default [`crate::lexicon::WordSource`]:
//! free, unauthenticated, and able to return syllable counts and
//! part-of-speech tags alongside each related word.

pub mod client;
pub mod types;

pub use client::DatamuseClient;
pub use types::DatamuseWord;
