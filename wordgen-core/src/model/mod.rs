//! Top-level module for the word-level n-gram model.
//!
//! This module groups the building blocks of the language model:
//! - Shared n-gram vocabulary types and extraction (`ngram`)
//! - The trained model itself (`NgramModel`)
//! - Internal sliding-window state used during generation (`window`)

/// Shared n-gram building blocks.
///
/// Defines the context and n-gram types, the sentence sentinels and the
/// padding n-gram extraction used for both training and probability queries.
pub mod ngram;

/// Fixed-order word n-gram model (`n >= 1`).
///
/// Handles sentence ingestion, transition counting, maximum-likelihood
/// probability estimates, weighted sampling and text generation.
pub mod ngram_model;

/// Internal sliding context window driving text generation.
///
/// This module is not exposed publicly.
mod window;
