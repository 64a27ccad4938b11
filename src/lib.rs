//! Jabberwock — pronounceable pseudo-word generation from sample text.
//!
//! Learns a character-level Markov model of word formation from a plain-text
//! corpus, estimates a termination bias from the empirical word-length
//! distribution, and samples novel words that mimic the source language's
//! phonetics without appearing in its vocabulary.

pub mod core;
