/// Chain model — context→next-character frequency table, training and RON
/// persistence.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Sentinel preceding the first real character of every trained word.
pub const INITIATOR: char = '#';
/// Sentinel following the last real character of every trained word.
pub const TERMINATOR: char = '$';

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// A trained character-level Markov model.
///
/// Maps a context (the preceding `context_length` characters, shorter only
/// near the initiator) to the observed next-character counts. Counts only
/// increase during training and are never mutated by sampling.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChainModel {
    /// Number of preceding characters used as context.
    pub context_length: usize,
    /// Transition table: context → next character → occurrence count.
    pub contexts: HashMap<String, HashMap<char, u32>>,
}

impl ChainModel {
    /// Train a model from a set of words with the given context length.
    ///
    /// Each word is bounded as `#word$`; for every position after the
    /// initiator, the count for (suffix-of-prefix context, character at
    /// position) is incremented. Contexts shorter than `context_length`
    /// occur only near the start of a word and share the namespace of
    /// full-length contexts.
    pub fn train<'a, I>(words: I, context_length: usize) -> ChainModel
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut contexts: HashMap<String, HashMap<char, u32>> = HashMap::new();

        for word in words {
            let bounded: Vec<char> = std::iter::once(INITIATOR)
                .chain(word.chars())
                .chain(std::iter::once(TERMINATOR))
                .collect();

            for i in 1..bounded.len() {
                let start = i.saturating_sub(context_length);
                let context: String = bounded[start..i].iter().collect();
                *contexts
                    .entry(context)
                    .or_default()
                    .entry(bounded[i])
                    .or_insert(0) += 1;
            }
        }

        ChainModel {
            context_length,
            contexts,
        }
    }

    /// Next-character counts observed for a context, if any.
    pub fn weights(&self, context: &str) -> Option<&HashMap<char, u32>> {
        self.contexts.get(context)
    }

    /// Total number of distinct (context, character) transitions.
    pub fn transition_count(&self) -> usize {
        self.contexts.values().map(|w| w.len()).sum()
    }
}

/// Save a ChainModel to a RON file.
pub fn save_model(model: &ChainModel, path: &Path) -> Result<(), ModelError> {
    let serialized = ron::ser::to_string_pretty(model, ron::ser::PrettyConfig::default())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    std::fs::write(path, serialized)?;
    Ok(())
}

/// Load a ChainModel from a RON file.
pub fn load_model(path: &Path) -> Result<ChainModel, ModelError> {
    let contents = std::fs::read_to_string(path)?;
    let model: ChainModel = ron::from_str(&contents)?;
    Ok(model)
}
