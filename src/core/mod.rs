//! Core modeling and sampling engine.

pub mod generator;
pub mod length;
pub mod model;
pub mod normalize;
pub mod sampler;

pub use generator::{GeneratorConfig, GeneratorError, WordGenerator};
pub use length::LengthDistribution;
pub use model::{ChainModel, INITIATOR, TERMINATOR};
pub use normalize::normalize_words;
pub use sampler::WordSampler;
