//! Per-class word pools and the merge that builds them
//!
//! A `WordPool` is the request-scoped, immutable sampling source for line
//! assembly: three surface-keyed maps, one per grammatical class. Pools are
//! built once per keyword by fanning out the provider lookups concurrently
//! and merging the results with [`merge_and_tag`].

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

use super::source::{Relation, WordSource};
use super::word::{Word, WordClass};

/// The three deduplicated, class-filtered word pools for one keyword.
///
/// Keyed by surface form, so duplicate surfaces collapse to a single entry
/// (insert overwrites, so the last occurrence wins). Insertion order is
/// preserved, which keeps sampling reproducible under a seeded RNG.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WordPool {
    nouns: IndexMap<String, Word>,
    verbs: IndexMap<String, Word>,
    adjectives: IndexMap<String, Word>,
}

impl WordPool {
    /// Build a pool from raw per-class lists, applying the class filter and
    /// surface dedupe to each. No auxiliary lists; callers that have them
    /// use [`WordPool::fetch`].
    pub fn from_lists(nouns: Vec<Word>, verbs: Vec<Word>, adjectives: Vec<Word>) -> Self {
        Self {
            nouns: merge_and_tag(&nouns, &[], WordClass::Noun),
            verbs: merge_and_tag(&verbs, &[], WordClass::Verb),
            adjectives: merge_and_tag(&adjectives, &[], WordClass::Adjective),
        }
    }

    /// Fetch and merge the pools for `keyword` from a word source.
    ///
    /// Issues the three base lookups and five auxiliary lookups
    /// concurrently; they are independent and order-insensitive. A failed
    /// lookup degrades that relation to an empty list rather than failing
    /// the build: reduced variety, not an error.
    pub async fn fetch(
        source: &dyn WordSource,
        keyword: &str,
        starts_with: Option<char>,
    ) -> Self {
        let (means_like, base_nouns, base_adjectives, synonyms, triggers, kind_of, preceding, following) = tokio::join!(
            fetch_relation(source, keyword, Relation::MeansLike, starts_with),
            fetch_relation(source, keyword, Relation::NounsModifiedBy, starts_with),
            fetch_relation(source, keyword, Relation::AdjectivesFor, starts_with),
            fetch_relation(source, keyword, Relation::Synonym, starts_with),
            fetch_relation(source, keyword, Relation::Trigger, starts_with),
            fetch_relation(source, keyword, Relation::KindOf, starts_with),
            fetch_relation(source, keyword, Relation::Precedes, starts_with),
            fetch_relation(source, keyword, Relation::Follows, starts_with),
        );

        // The means-like relation is the sole source of base verbs.
        let base_verbs: Vec<Word> = means_like
            .into_iter()
            .filter(|w| w.has_class(WordClass::Verb))
            .collect();

        let auxiliaries = [synonyms, triggers, kind_of, preceding, following];

        let pool = Self {
            nouns: merge_and_tag(&base_nouns, &auxiliaries, WordClass::Noun),
            verbs: merge_and_tag(&base_verbs, &auxiliaries, WordClass::Verb),
            adjectives: merge_and_tag(&base_adjectives, &auxiliaries, WordClass::Adjective),
        };

        debug!(
            keyword = %keyword,
            nouns = pool.nouns.len(),
            verbs = pool.verbs.len(),
            adjectives = pool.adjectives.len(),
            "word pools assembled"
        );

        pool
    }

    /// The pool for one grammatical class.
    pub fn class(&self, class: WordClass) -> &IndexMap<String, Word> {
        match class {
            WordClass::Noun => &self.nouns,
            WordClass::Verb => &self.verbs,
            WordClass::Adjective => &self.adjectives,
        }
    }

    /// Total entries across all three classes.
    pub fn len(&self) -> usize {
        self.nouns.len() + self.verbs.len() + self.adjectives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fetch one relation, degrading failure to an empty list.
async fn fetch_relation(
    source: &dyn WordSource,
    keyword: &str,
    relation: Relation,
    starts_with: Option<char>,
) -> Vec<Word> {
    match source.related_words(keyword, relation, starts_with).await {
        Ok(words) => words,
        Err(e) => {
            warn!(
                source = source.source_id(),
                relation = %relation,
                error = %e,
                "word lookup failed, continuing with empty list"
            );
            vec![]
        }
    }
}

/// Merge a base list with auxiliary lists into one class pool.
///
/// Concatenates `base` with every auxiliary list in order, keeps only the
/// words carrying `class`, and dedupes by surface form. For a surface seen
/// more than once, the last occurrence wins. Single pass, O(n) over the
/// combined input.
pub fn merge_and_tag(
    base: &[Word],
    auxiliaries: &[Vec<Word>],
    class: WordClass,
) -> IndexMap<String, Word> {
    let mut pool = IndexMap::new();
    let auxiliary_words = auxiliaries.iter().flat_map(|list| list.iter());

    for word in base.iter().chain(auxiliary_words) {
        if word.has_class(class) {
            pool.insert(word.surface.clone(), word.clone());
        }
    }

    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::source::StaticWordSource;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;

    fn noun(surface: &str, syllables: u32) -> Word {
        Word::new(surface, syllables, vec![WordClass::Noun])
    }

    #[test]
    fn test_merge_filters_by_class() {
        let base = vec![
            noun("wave", 1),
            Word::new("flow", 1, vec![WordClass::Verb]),
        ];
        let aux = vec![vec![
            Word::new("blue", 1, vec![WordClass::Adjective]),
            noun("tide", 1),
        ]];

        let pool = merge_and_tag(&base, &aux, WordClass::Noun);

        assert_eq!(pool.len(), 2);
        assert!(pool.contains_key("wave"));
        assert!(pool.contains_key("tide"));
        assert!(pool.values().all(|w| w.has_class(WordClass::Noun)));
    }

    #[test]
    fn test_merge_dedupes_by_surface_last_wins() {
        let base = vec![noun("wave", 1)];
        let aux = vec![vec![noun("wave", 2).with_score(99)]];

        let pool = merge_and_tag(&base, &aux, WordClass::Noun);

        assert_eq!(pool.len(), 1);
        let kept = &pool["wave"];
        assert_eq!(kept.syllables, 2);
        assert_eq!(kept.score, 99);
    }

    #[test]
    fn test_merge_is_idempotent_on_deduplicated_input() {
        let base = vec![noun("wave", 1), noun("tide", 1), noun("wave", 2)];
        let once = merge_and_tag(&base, &[], WordClass::Noun);

        let values: Vec<Word> = once.values().cloned().collect();
        let twice = merge_and_tag(&values, &[], WordClass::Noun);

        assert_eq!(once, twice);
    }

    #[tokio::test]
    async fn test_fetch_routes_base_and_auxiliary_lists() {
        let source = StaticWordSource::new()
            .with_relation(
                Relation::MeansLike,
                vec![
                    Word::new("flow", 1, vec![WordClass::Verb]),
                    // Non-verb related words never reach the verb pool.
                    noun("water", 2),
                ],
            )
            .with_relation(Relation::NounsModifiedBy, vec![noun("wave", 1)])
            .with_relation(
                Relation::AdjectivesFor,
                vec![Word::new("blue", 1, vec![WordClass::Adjective])],
            )
            .with_relation(
                Relation::Trigger,
                vec![
                    noun("tide", 1),
                    Word::new("surge", 1, vec![WordClass::Verb, WordClass::Noun]),
                ],
            );

        let pool = WordPool::fetch(&source, "ocean", None).await;

        // Auxiliary words land in every pool whose class they carry.
        assert!(pool.class(WordClass::Noun).contains_key("wave"));
        assert!(pool.class(WordClass::Noun).contains_key("tide"));
        assert!(pool.class(WordClass::Noun).contains_key("surge"));
        assert!(pool.class(WordClass::Verb).contains_key("flow"));
        assert!(pool.class(WordClass::Verb).contains_key("surge"));
        assert!(pool.class(WordClass::Adjective).contains_key("blue"));

        // The means-like noun was filtered out of the verb path and has no
        // other route into the pools.
        assert!(!pool.class(WordClass::Noun).contains_key("water"));
        assert!(!pool.class(WordClass::Verb).contains_key("water"));
    }

    #[tokio::test]
    async fn test_every_auxiliary_relation_feeds_the_pools() {
        for relation in Relation::auxiliaries() {
            let source = StaticWordSource::new().with_relation(relation, vec![noun("byway", 2)]);
            let pool = WordPool::fetch(&source, "road", None).await;
            assert!(
                pool.class(WordClass::Noun).contains_key("byway"),
                "{relation} did not reach the noun pool"
            );
        }
    }

    struct FlakySource;

    #[async_trait]
    impl WordSource for FlakySource {
        fn source_id(&self) -> &'static str {
            "flaky"
        }

        async fn related_words(
            &self,
            _query: &str,
            relation: Relation,
            _starts_with: Option<char>,
        ) -> Result<Vec<Word>> {
            match relation {
                Relation::NounsModifiedBy => Err(anyhow!("upstream 500")),
                Relation::Trigger => Ok(vec![Word::new(
                    "storm",
                    1,
                    vec![WordClass::Noun, WordClass::Verb],
                )]),
                _ => Ok(vec![]),
            }
        }
    }

    #[tokio::test]
    async fn test_fetch_degrades_failed_relation_to_empty() {
        let pool = WordPool::fetch(&FlakySource, "ocean", None).await;

        // The failed base-noun lookup did not abort the build; the noun pool
        // still picked up the auxiliary contribution.
        assert_eq!(pool.class(WordClass::Noun).len(), 1);
        assert!(pool.class(WordClass::Noun).contains_key("storm"));
        assert!(pool.class(WordClass::Verb).contains_key("storm"));
        assert!(pool.class(WordClass::Adjective).is_empty());
    }

    #[tokio::test]
    async fn test_fetch_from_empty_source_yields_empty_pool() {
        let pool = WordPool::fetch(&crate::lexicon::EmptyWordSource, "ocean", None).await;
        assert!(pool.is_empty());
    }
}
