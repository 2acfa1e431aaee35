//! haiku-gen - keyword-seeded haiku generation
//!
//! Builds per-class word pools from a lexical-relations provider (Datamuse
//! by default) and assembles a three-line poem under the 5-7-5 syllable
//! form. Sampling follows a fixed noun -> verb -> adjective cycle that
//! carries across line boundaries, with a budgeted retry rule against
//! repeating words.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use haiku_gen::datamuse::DatamuseClient;
//! use haiku_gen::HaikuGenerator;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let client = DatamuseClient::new()?;
//! let generator = HaikuGenerator::new(Arc::new(client));
//!
//! let haiku = generator.generate("ocean", None).await?;
//! println!("{haiku}");
//! # Ok(())
//! # }
//! ```

// Core error handling
pub mod error;

// Assembly limits
pub mod config;

// Words, word sources, and per-class pools
pub mod lexicon;

// Line assembly and end-to-end generation
pub mod haiku;

// Datamuse provider client
pub mod datamuse;

// REST API (when the server feature is enabled)
pub mod api;

// Public re-exports for the common paths
pub use config::AssemblerConfig;
pub use error::{HaikuError, Result as HaikuResult};
pub use haiku::{Haiku, HaikuAssembler, HaikuGenerator, SYLLABLE_TARGETS};
pub use lexicon::{
    merge_and_tag, EmptyWordSource, Relation, StaticWordSource, Word, WordClass, WordPool,
    WordSource,
};

pub use datamuse::DatamuseClient;
