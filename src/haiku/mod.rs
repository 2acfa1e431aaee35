//! Haiku assembly and generation

pub mod assembler;
pub mod generator;

pub use assembler::{Haiku, HaikuAssembler, SYLLABLE_TARGETS};
pub use generator::HaikuGenerator;
