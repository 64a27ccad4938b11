/// Word sampler — stochastic generation of novel words from a trained model.

use rand::distributions::{WeightedError, WeightedIndex};
use rand::prelude::Distribution;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;
use std::collections::HashMap;
use thiserror::Error;

use crate::core::length::LengthDistribution;
use crate::core::model::{ChainModel, INITIATOR, TERMINATOR};

#[derive(Debug, Error)]
pub enum SampleError {
    /// A context produced during sampling is absent from the model. Every
    /// reachable context is observed during training, so this indicates a
    /// corrupted or mismatched model and is not recoverable.
    #[error("context '{0}' is missing from the model")]
    MissingContext(String),
    #[error("weighted draw failed: {0}")]
    Weights(#[from] WeightedError),
    #[error("no novel word found within {0} attempts")]
    Exhausted(u64),
}

/// Samples candidate words from a trained model and its termination bias.
pub struct WordSampler<'a> {
    model: &'a ChainModel,
    distribution: &'a LengthDistribution,
}

impl<'a> WordSampler<'a> {
    pub fn new(model: &'a ChainModel, distribution: &'a LengthDistribution) -> WordSampler<'a> {
        WordSampler {
            model,
            distribution,
        }
    }

    /// Generate one candidate word by walking the chain from the initiator.
    ///
    /// At each step the last `context_length` characters select a weight
    /// table; if a terminator is among the candidates its weight is boosted
    /// by the distribution value at the current in-progress length (initiator
    /// included, clamped past the longest observed length). The next
    /// character is drawn proportionally to the adjusted weights until the
    /// terminator is drawn. Sentinels are stripped from the result.
    pub fn sample_word(&self, rng: &mut StdRng) -> Result<String, SampleError> {
        let mut word: Vec<char> = vec![INITIATOR];

        loop {
            let start = word.len().saturating_sub(self.model.context_length);
            let context: String = word[start..].iter().collect();
            let weights = self
                .model
                .weights(&context)
                .ok_or_else(|| SampleError::MissingContext(context.clone()))?;

            let boost = self.distribution.boost_at(word.len());
            let candidates = boosted_weights(weights, boost);
            let index = WeightedIndex::new(candidates.iter().map(|&(_, w)| w))?;
            let next = candidates[index.sample(rng)].0;

            if next == TERMINATOR {
                break;
            }
            word.push(next);
        }

        Ok(word[1..].iter().collect())
    }

    /// Generate `count` words, none of which appear in `vocabulary` or
    /// earlier in the returned sequence.
    ///
    /// Collisions are discarded and sampling restarts; with
    /// `max_attempts: None` the loop retries forever. A cap turns
    /// exhaustion into `SampleError::Exhausted` instead of hanging.
    pub fn sample_novel(
        &self,
        count: usize,
        vocabulary: &FxHashSet<String>,
        max_attempts: Option<u64>,
        rng: &mut StdRng,
    ) -> Result<Vec<String>, SampleError> {
        let mut generated: Vec<String> = Vec::with_capacity(count);
        let mut attempts = 0u64;

        while generated.len() < count {
            if let Some(cap) = max_attempts {
                if attempts >= cap {
                    return Err(SampleError::Exhausted(cap));
                }
            }
            attempts += 1;

            let candidate = self.sample_word(rng)?;
            if vocabulary.contains(&candidate) || generated.iter().any(|w| *w == candidate) {
                continue;
            }
            generated.push(candidate);
        }

        Ok(generated)
    }
}

/// Build the adjusted weight vector for one draw.
///
/// Returns a fresh copy so the model counts are never mutated; only the
/// terminator weight is scaled. Candidates are sorted by character so a
/// seeded random source reproduces the same sequence independent of hash-map
/// iteration order.
fn boosted_weights(weights: &HashMap<char, u32>, terminator_boost: f64) -> Vec<(char, f64)> {
    let mut candidates: Vec<(char, f64)> = weights
        .iter()
        .map(|(&c, &count)| {
            let weight = if c == TERMINATOR {
                count as f64 * terminator_boost
            } else {
                count as f64
            };
            (c, weight)
        })
        .collect();
    candidates.sort_unstable_by_key(|&(c, _)| c);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn trained() -> (ChainModel, LengthDistribution) {
        let words = [
            "brillig", "slithy", "toves", "gyre", "gimble", "wabe", "mimsy", "borogoves", "mome",
            "raths", "outgrabe",
        ];
        let model = ChainModel::train(words, 2);
        let distribution = LengthDistribution::from_words(words);
        (model, distribution)
    }

    fn vocabulary() -> FxHashSet<String> {
        [
            "brillig", "slithy", "toves", "gyre", "gimble", "wabe", "mimsy", "borogoves", "mome",
            "raths", "outgrabe",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    #[test]
    fn sampled_word_is_sentinel_free() {
        let (model, distribution) = trained();
        let sampler = WordSampler::new(&model, &distribution);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let word = sampler.sample_word(&mut rng).unwrap();
            assert!(!word.contains(INITIATOR));
            assert!(!word.contains(TERMINATOR));
            assert!(!word.is_empty());
        }
    }

    #[test]
    fn sampling_is_deterministic_for_a_fixed_seed() {
        let (model, distribution) = trained();
        let sampler = WordSampler::new(&model, &distribution);

        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        let first: Vec<String> = (0..20).map(|_| sampler.sample_word(&mut rng1).unwrap()).collect();
        let second: Vec<String> = (0..20).map(|_| sampler.sample_word(&mut rng2).unwrap()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn novel_words_avoid_vocabulary_and_each_other() {
        let (model, distribution) = trained();
        let sampler = WordSampler::new(&model, &distribution);
        let vocab = vocabulary();
        let mut rng = StdRng::seed_from_u64(42);

        let words = sampler.sample_novel(10, &vocab, Some(100_000), &mut rng).unwrap();
        assert_eq!(words.len(), 10);
        for (i, word) in words.iter().enumerate() {
            assert!(!vocab.contains(word), "'{}' is a real word", word);
            assert!(!words[..i].contains(word), "'{}' repeated", word);
        }
    }

    #[test]
    fn zero_count_returns_empty_without_sampling() {
        // An empty model would fail any lookup, proving the loop never ran
        let model = ChainModel::default();
        let distribution = LengthDistribution::from_words(std::iter::empty::<&str>());
        let sampler = WordSampler::new(&model, &distribution);
        let mut rng = StdRng::seed_from_u64(0);

        let words = sampler
            .sample_novel(0, &FxHashSet::default(), None, &mut rng)
            .unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn missing_context_is_fatal() {
        let model = ChainModel {
            context_length: 2,
            contexts: HashMap::new(),
        };
        let distribution = LengthDistribution::from_words(["cat"]);
        let sampler = WordSampler::new(&model, &distribution);
        let mut rng = StdRng::seed_from_u64(0);

        match sampler.sample_word(&mut rng) {
            Err(SampleError::MissingContext(ctx)) => assert_eq!(ctx, "#"),
            other => panic!("expected MissingContext, got {:?}", other),
        }
    }

    #[test]
    fn single_word_corpus_exhausts_with_a_cap() {
        // The only producible word is the training word itself, so every
        // attempt collides with the vocabulary.
        let model = ChainModel::train(["abc"], 2);
        let distribution = LengthDistribution::from_words(["abc"]);
        let sampler = WordSampler::new(&model, &distribution);
        let vocab: FxHashSet<String> = std::iter::once("abc".to_string()).collect();
        let mut rng = StdRng::seed_from_u64(1);

        match sampler.sample_novel(1, &vocab, Some(50), &mut rng) {
            Err(SampleError::Exhausted(50)) => {}
            other => panic!("expected Exhausted, got {:?}", other),
        }
    }

    #[test]
    fn boosted_weights_leave_model_untouched() {
        let (model, _) = trained();
        let before = model.contexts.clone();
        let weights = model.weights("#b").unwrap();
        let _ = boosted_weights(weights, 3.0);
        assert_eq!(model.contexts, before);
    }

    #[test]
    fn boosted_weights_scale_only_the_terminator() {
        let mut weights: HashMap<char, u32> = HashMap::new();
        weights.insert('a', 4);
        weights.insert(TERMINATOR, 2);

        let candidates = boosted_weights(&weights, 0.5);
        let terminator = candidates.iter().find(|&&(c, _)| c == TERMINATOR).unwrap();
        let letter = candidates.iter().find(|&&(c, _)| c == 'a').unwrap();
        assert_eq!(terminator.1, 1.0);
        assert_eq!(letter.1, 4.0);
    }

    #[test]
    fn boosted_weights_are_sorted_by_character() {
        let mut weights: HashMap<char, u32> = HashMap::new();
        for c in ['z', 'a', 'm', TERMINATOR] {
            weights.insert(c, 1);
        }
        let candidates = boosted_weights(&weights, 1.0);
        let chars: Vec<char> = candidates.iter().map(|&(c, _)| c).collect();
        let mut sorted = chars.clone();
        sorted.sort_unstable();
        assert_eq!(chars, sorted);
    }
}
