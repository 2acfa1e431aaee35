//! Line assembly: turning word pools into a 5-7-5 poem
//!
//! The assembler walks the noun -> verb -> adjective cycle, sampling one
//! word per step from the pool for the current class. The cycle position
//! and the set of used surfaces carry across line boundaries; only the
//! syllable budget and the retry counter are per-line.

use std::collections::HashSet;
use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AssemblerConfig;
use crate::error::{HaikuError, Result};
use crate::lexicon::{Word, WordClass, WordPool};

/// Syllable targets for the three lines of the form.
pub const SYLLABLE_TARGETS: [u32; 3] = [5, 7, 5];

/// A finished poem. Always exactly one line per syllable target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Haiku {
    lines: Vec<String>,
}

impl Haiku {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for Haiku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// Cross-line assembly state. The grammatical cycle does not restart at
/// line breaks, and a surface used anywhere in the poem counts as used
/// for every later duplicate check.
struct PoemState {
    class: WordClass,
    used: HashSet<String>,
}

/// Assembles haiku lines from a [`WordPool`].
#[derive(Debug, Clone, Default)]
pub struct HaikuAssembler {
    config: AssemblerConfig,
}

impl HaikuAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AssemblerConfig) -> Self {
        Self { config }
    }

    /// Assemble a poem with a random starting class and the thread RNG.
    pub fn assemble(&self, pool: &WordPool) -> Result<Haiku> {
        let mut rng = rand::thread_rng();
        let start = WordClass::all()
            .choose(&mut rng)
            .copied()
            .unwrap_or(WordClass::Noun);
        self.assemble_from(pool, &mut rng, start)
    }

    /// Assemble a poem from an explicit starting class and RNG.
    ///
    /// This is the deterministic entry point: a seeded RNG and a fixed
    /// start class reproduce the same poem from the same pool.
    pub fn assemble_from<R: Rng + ?Sized>(
        &self,
        pool: &WordPool,
        rng: &mut R,
        start: WordClass,
    ) -> Result<Haiku> {
        let mut state = PoemState {
            class: start,
            used: HashSet::new(),
        };

        let mut lines = Vec::with_capacity(SYLLABLE_TARGETS.len());
        for (index, &target) in SYLLABLE_TARGETS.iter().enumerate() {
            lines.push(self.assemble_line(pool, rng, &mut state, target, index + 1)?);
        }

        Ok(Haiku { lines })
    }

    fn assemble_line<R: Rng + ?Sized>(
        &self,
        pool: &WordPool,
        rng: &mut R,
        state: &mut PoemState,
        target: u32,
        line_number: usize,
    ) -> Result<String> {
        let mut words: Vec<&str> = Vec::new();
        let mut remaining = target;
        let mut attempts = 0u32;

        while remaining > 0 {
            attempts += 1;
            if attempts > self.config.max_line_iterations {
                return Err(HaikuError::Starved {
                    line: line_number,
                    remaining_syllables: remaining,
                });
            }

            // Zero-syllable entries are excluded: picking one would never
            // shrink the remaining count.
            let candidates: Vec<&Word> = pool
                .class(state.class)
                .values()
                .filter(|w| w.syllables > 0 && w.syllables <= remaining)
                .collect();

            let Some(&pick) = candidates.choose(rng) else {
                // Nothing in this class fits the remaining budget; hand the
                // slot to the next class in the cycle.
                state.class = state.class.next();
                continue;
            };

            if state.used.contains(&pick.surface) && attempts < self.config.max_duplicate_retries {
                // Redraw from the same class. Once the retry budget is
                // spent, repeats are accepted so thin pools still finish.
                continue;
            }

            words.push(pick.surface.as_str());
            state.used.insert(pick.surface.clone());
            remaining -= pick.syllables;
            state.class = state.class.next();
        }

        debug!(
            line = line_number,
            words = words.len(),
            attempts,
            "line assembled"
        );

        Ok(words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn word(surface: &str, syllables: u32, class: WordClass) -> Word {
        Word::new(surface, syllables, vec![class])
    }

    /// One-syllable words whose first letter encodes their class, so the
    /// cycle order is visible in the output.
    fn labeled_pool() -> WordPool {
        let nouns = (1..=8)
            .map(|i| word(&format!("n{i}"), 1, WordClass::Noun))
            .collect();
        let verbs = (1..=8)
            .map(|i| word(&format!("v{i}"), 1, WordClass::Verb))
            .collect();
        let adjectives = (1..=8)
            .map(|i| word(&format!("a{i}"), 1, WordClass::Adjective))
            .collect();
        WordPool::from_lists(nouns, verbs, adjectives)
    }

    fn flat_words(haiku: &Haiku) -> Vec<&str> {
        haiku
            .lines()
            .iter()
            .flat_map(|line| line.split_whitespace())
            .collect()
    }

    #[test]
    fn test_lines_meet_syllable_targets() {
        let pool = labeled_pool();
        let mut rng = StdRng::seed_from_u64(7);
        let haiku = HaikuAssembler::new()
            .assemble_from(&pool, &mut rng, WordClass::Noun)
            .unwrap();

        let counts: Vec<usize> = haiku
            .lines()
            .iter()
            .map(|line| line.split_whitespace().count())
            .collect();

        // All pool words are one syllable, so word counts equal targets.
        assert_eq!(counts, vec![5, 7, 5]);
    }

    #[test]
    fn test_class_cycle_continues_across_line_breaks() {
        let pool = labeled_pool();
        let mut rng = StdRng::seed_from_u64(42);
        let haiku = HaikuAssembler::new()
            .assemble_from(&pool, &mut rng, WordClass::Noun)
            .unwrap();

        let words = flat_words(&haiku);
        assert_eq!(words.len(), 17);

        // Every accepted word advances the cycle exactly one step, with no
        // reset at line boundaries: position k is always class (k mod 3)
        // from the start class.
        let expected = ["n", "v", "a"];
        for (position, surface) in words.iter().enumerate() {
            assert!(
                surface.starts_with(expected[position % 3]),
                "word {position} ({surface}) broke the class cycle"
            );
        }
    }

    #[test]
    fn test_empty_class_hands_slot_to_next_class() {
        // Only nouns available: verb and adjective slots fall through to
        // the next class instead of stalling the line.
        let nouns = (1..=20)
            .map(|i| word(&format!("n{i}"), 1, WordClass::Noun))
            .collect();
        let pool = WordPool::from_lists(nouns, vec![], vec![]);

        let mut rng = StdRng::seed_from_u64(3);
        let haiku = HaikuAssembler::new()
            .assemble_from(&pool, &mut rng, WordClass::Noun)
            .unwrap();

        let words = flat_words(&haiku);
        assert_eq!(words.len(), 17);
        assert!(words.iter().all(|w| w.starts_with('n')));
    }

    #[test]
    fn test_thin_pool_repeats_after_retry_budget() {
        // One word per class makes every redraw deterministic: after the
        // first three picks each draw is a duplicate, rejected until the
        // line's attempt count reaches the budget, then accepted.
        let pool = WordPool::from_lists(
            vec![word("sun", 1, WordClass::Noun)],
            vec![word("set", 1, WordClass::Verb)],
            vec![word("red", 1, WordClass::Adjective)],
        );

        let mut rng = StdRng::seed_from_u64(0);
        let haiku = HaikuAssembler::new()
            .assemble_from(&pool, &mut rng, WordClass::Noun)
            .unwrap();

        // Line 1: sun set red accepted on attempts 1-3, then six rejected
        // redraws of "sun" until attempt 10 accepts it, and "set" follows.
        assert_eq!(haiku.lines()[0], "sun set red sun set");
        // Lines 2 and 3 open with nine rejected redraws each before the
        // budget unlocks repeats, continuing the cycle from "red".
        assert_eq!(haiku.lines()[1], "red sun set red sun set red");
        assert_eq!(haiku.lines()[2], "sun set red sun set");
    }

    #[test]
    fn test_empty_pool_starves_on_first_line() {
        let pool = WordPool::default();
        let mut rng = StdRng::seed_from_u64(0);
        let err = HaikuAssembler::new()
            .assemble_from(&pool, &mut rng, WordClass::Noun)
            .unwrap_err();

        assert_eq!(
            err,
            HaikuError::Starved {
                line: 1,
                remaining_syllables: 5
            }
        );
    }

    #[test]
    fn test_unfillable_remainder_starves_with_partial_line() {
        // A single two-syllable noun: "ocean ocean" fills four syllables,
        // then nothing fits the last one and every class comes up empty.
        let pool = WordPool::from_lists(vec![word("ocean", 2, WordClass::Noun)], vec![], vec![]);

        let mut rng = StdRng::seed_from_u64(0);
        let err = HaikuAssembler::new()
            .assemble_from(&pool, &mut rng, WordClass::Noun)
            .unwrap_err();

        assert_eq!(
            err,
            HaikuError::Starved {
                line: 1,
                remaining_syllables: 1
            }
        );
    }

    #[test]
    fn test_zero_syllable_words_are_never_selected() {
        let pool = WordPool::from_lists(
            vec![
                Word::new("hm", 0, vec![WordClass::Noun]),
                word("sea", 1, WordClass::Noun),
            ],
            vec![],
            vec![],
        );

        let mut rng = StdRng::seed_from_u64(9);
        let haiku = HaikuAssembler::new()
            .assemble_from(&pool, &mut rng, WordClass::Noun)
            .unwrap();

        assert!(flat_words(&haiku).iter().all(|w| *w == "sea"));
    }

    #[test]
    fn test_random_start_still_meets_targets() {
        let pool = labeled_pool();
        let haiku = HaikuAssembler::new().assemble(&pool).unwrap();

        let counts: Vec<usize> = haiku
            .lines()
            .iter()
            .map(|line| line.split_whitespace().count())
            .collect();
        assert_eq!(counts, vec![5, 7, 5]);
    }

    #[test]
    fn test_display_joins_lines_with_newlines() {
        let haiku = Haiku {
            lines: vec!["a".into(), "b".into(), "c".into()],
        };
        assert_eq!(haiku.to_string(), "a\nb\nc");
    }
}
