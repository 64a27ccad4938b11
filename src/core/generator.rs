/// End-to-end word generation: text → word set → {model, distribution} →
/// novel words.
///
/// Wires together normalization, model training, length-distribution
/// estimation, and sampling behind an explicit configuration instead of
/// ambient state.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashSet;
use std::path::Path;
use thiserror::Error;

use crate::core::length::LengthDistribution;
use crate::core::model::{save_model, ChainModel, ModelError};
use crate::core::normalize::{normalize_words, NormalizeError};
use crate::core::sampler::{SampleError, WordSampler};

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("normalization error: {0}")]
    Normalize(#[from] NormalizeError),
    #[error("sampling error: {0}")]
    Sample(#[from] SampleError),
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

/// Configuration for a generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of preceding characters used as model context.
    pub context_length: usize,
    /// Optional cap on sampling attempts per `generate` call. `None` retries
    /// on collision forever.
    pub max_attempts: Option<u64>,
    /// Seed for the random source.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> GeneratorConfig {
        GeneratorConfig {
            context_length: 2,
            max_attempts: None,
            seed: 0,
        }
    }
}

impl GeneratorConfig {
    pub fn context_length(mut self, context_length: usize) -> Self {
        self.context_length = context_length;
        self
    }

    pub fn max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// A trained generator: word set, chain model, and termination bias, all
/// read-only after construction.
pub struct WordGenerator {
    config: GeneratorConfig,
    words: FxHashSet<String>,
    model: ChainModel,
    distribution: LengthDistribution,
    generation_count: u64,
}

impl WordGenerator {
    /// Build a generator from raw text.
    ///
    /// Normalizes the text into a word set, trains the chain model, and
    /// estimates the length distribution. Fails with a `Normalize` error if
    /// the text is empty or yields no usable words.
    pub fn from_text(text: &str, config: GeneratorConfig) -> Result<WordGenerator, GeneratorError> {
        let words = normalize_words(text, config.context_length)?;
        let model = ChainModel::train(words.iter().map(String::as_str), config.context_length);
        let distribution = LengthDistribution::from_words(words.iter().map(String::as_str));

        Ok(WordGenerator {
            config,
            words,
            model,
            distribution,
            generation_count: 0,
        })
    }

    /// Generate `count` novel words with a random source derived from the
    /// configured seed. Repeated calls advance an internal counter so each
    /// call produces a fresh batch; rebuilding with the same seed replays
    /// the same batches.
    pub fn generate(&mut self, count: usize) -> Result<Vec<String>, GeneratorError> {
        let mut rng = StdRng::seed_from_u64(self.config.seed.wrapping_add(self.generation_count));
        self.generation_count += 1;
        self.generate_with(count, &mut rng)
    }

    /// Generate `count` novel words from an explicit random source.
    pub fn generate_with(
        &self,
        count: usize,
        rng: &mut StdRng,
    ) -> Result<Vec<String>, GeneratorError> {
        let sampler = WordSampler::new(&self.model, &self.distribution);
        let words = sampler.sample_novel(count, &self.words, self.config.max_attempts, rng)?;
        Ok(words)
    }

    /// The normalized source vocabulary.
    pub fn vocabulary(&self) -> &FxHashSet<String> {
        &self.words
    }

    /// The trained chain model.
    pub fn model(&self) -> &ChainModel {
        &self.model
    }

    /// The estimated length distribution.
    pub fn distribution(&self) -> &LengthDistribution {
        &self.distribution
    }

    /// Dump the trained model to a RON file for inspection or reuse.
    pub fn save_model(&self, path: &Path) -> Result<(), GeneratorError> {
        save_model(&self.model, path)?;
        Ok(())
    }
}
