//! Word-level n-gram language modeling and text generation.
//!
//! This crate builds a statistical language model from raw text and uses it
//! to generate new text by sampling word sequences according to observed
//! word-transition frequencies. It provides:
//! - A punctuation-isolating whitespace tokenizer
//! - N-gram extraction with sentence-start padding
//! - A frequency-table model with maximum-likelihood probability estimates
//! - Autoregressive generation driven by a caller-supplied random generator
//!
//! File loading, sentence splitting and command-line handling are left to
//! callers; the crate itself performs no I/O and holds no global state.

/// Core n-gram model types, statistics and generation logic.
pub mod model;

/// Tokenizer splitting raw text into word and punctuation tokens.
pub mod tokenizer;
