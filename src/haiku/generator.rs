//! Keyword-to-haiku orchestration

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::AssemblerConfig;
use crate::error::{HaikuError, Result};
use crate::haiku::assembler::{Haiku, HaikuAssembler};
use crate::lexicon::{WordPool, WordSource};

/// End-to-end haiku generation: validate the keyword, build the pools from
/// a word source, and assemble the poem.
pub struct HaikuGenerator {
    source: Arc<dyn WordSource>,
    assembler: HaikuAssembler,
}

impl HaikuGenerator {
    pub fn new(source: Arc<dyn WordSource>) -> Self {
        Self {
            source,
            assembler: HaikuAssembler::new(),
        }
    }

    pub fn with_config(source: Arc<dyn WordSource>, config: AssemblerConfig) -> Self {
        Self {
            source,
            assembler: HaikuAssembler::with_config(config),
        }
    }

    /// Generate a haiku themed on `keyword`, optionally constrained to
    /// words starting with `starts_with`.
    ///
    /// The keyword is validated before any lookup is issued. Provider
    /// failures degrade to thinner pools; if that leaves too little to
    /// work with, the result is [`HaikuError::Starved`].
    pub async fn generate(&self, keyword: &str, starts_with: Option<char>) -> Result<Haiku> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(HaikuError::EmptyKeyword);
        }
        let starts_with = starts_with.map(|c| c.to_ascii_lowercase());

        info!(keyword = %keyword, ?starts_with, "generating haiku");

        let pool = WordPool::fetch(self.source.as_ref(), keyword, starts_with).await;
        if pool.is_empty() {
            warn!(keyword = %keyword, "no related words found; assembly will starve");
        }

        self.assembler.assemble(&pool)
    }
}
