use super::ngram::{Context, Ngram, SENTENCE_END, extract_ngrams};
use super::window::ContextWindow;
use crate::tokenizer::tokenize;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::collections::HashMap;

/// Represents a word-level n-gram language model.
///
/// The `NgramModel` accumulates context-to-next-word statistics from raw
/// sentences and turns them into maximum-likelihood probability estimates
/// and frequency-weighted text generation.
///
/// # Responsibilities
/// - Build the model from raw sentences (`update`)
/// - Accumulate occurrence counts for each observed n-gram
/// - Estimate conditional word probabilities (`prob`)
/// - Sample a continuation for a context (`random_token`)
/// - Generate text one token at a time (`generate_text`)
///
/// # Invariants
/// - `n` is always >= 1
/// - All n-gram occurrence counts are >= 1 and never decrease
/// - For every n-gram `(context, token)` with count `c`, the candidate list
///   of `context` holds exactly `c` occurrences of `token`, and every
///   context with a candidate list has at least one counted n-gram; both
///   maps are written together in every training step
#[derive(Clone, Debug)]
pub struct NgramModel {
	/// The order of the model (a context holds `n - 1` tokens)
	n: usize, // must be >= 1

	/// Occurrence count of every observed (context, token) pair
	counts: HashMap<Ngram, usize>,

	/// Tokens observed after each context, in observation order.
	///
	/// Duplicates are kept on purpose: a token observed `k` times after a
	/// context appears `k` times in the list, so a uniform draw from it is
	/// already weighted by occurrence count.
	candidates: HashMap<Context, Vec<String>>,
}

impl NgramModel {
	/// Creates a new, empty n-gram model of order `n`.
	///
	/// # Errors
	/// Returns an error if `n < 1`.
	pub fn new(n: usize) -> Result<Self, String> {
		if n < 1 {
			return Err("n must be >= 1".to_owned());
		}
		Ok(Self {
			n,
			counts: HashMap::new(),
			candidates: HashMap::new(),
		})
	}

	/// Returns the order of the model.
	pub fn order(&self) -> usize {
		self.n
	}

	/// Number of distinct contexts observed so far.
	pub fn context_count(&self) -> usize {
		self.candidates.len()
	}

	/// Number of distinct (context, token) pairs observed so far.
	pub fn ngram_count(&self) -> usize {
		self.counts.len()
	}

	/// Adds one raw sentence to the model.
	///
	/// Tokenizes the sentence, breaks it into n-grams at the model's order
	/// and records every observation. This is the only operation that
	/// mutates the model; repeated calls accumulate, nothing is ever reset.
	///
	/// # Notes
	/// - Any string is accepted; an empty or whitespace-only sentence
	///   contributes no n-grams and leaves the model unchanged.
	pub fn update(&mut self, sentence: &str) {
		let tokens = tokenize(sentence);
		for (context, target) in extract_ngrams(self.n, &tokens) {
			*self
				.counts
				.entry((context.clone(), target.clone()))
				.or_insert(0) += 1;
			self.candidates.entry(context).or_default().push(target);
		}
	}

	/// Maximum-likelihood estimate of `P(token | context)`.
	///
	/// The estimate is the occurrence count of `(context, token)` divided by
	/// the total number of observed continuations of `context`. No
	/// probability mass is reserved for unseen events: an unknown context or
	/// pair yields `0.0`, a regular "no evidence" answer rather than an
	/// error.
	///
	/// # Notes
	/// - `context` must hold exactly `n - 1` tokens to ever match; any other
	///   length simply yields `0.0`.
	pub fn prob(&self, context: &[String], token: &str) -> f64 {
		let continuations = match self.candidates.get(context) {
			Some(continuations) => continuations.len(),
			None => return 0.0,
		};
		let occurrences = self
			.counts
			.get(&(context.to_vec(), token.to_owned()))
			.copied()
			.unwrap_or(0);
		occurrences as f64 / continuations as f64
	}

	/// Samples one token among those observed after `context`.
	///
	/// Each candidate is drawn with probability proportional to its
	/// occurrence count, matching the distribution reported by
	/// [`Self::prob`]. The candidate list repeats a token once per
	/// observation, so a uniform draw over the list is exactly that
	/// distribution.
	///
	/// Returns `None` for a context with no observed continuation: a dead
	/// end for the caller to handle, not an error.
	pub fn random_token<R: Rng>(&self, context: &[String], rng: &mut R) -> Option<&str> {
		let continuations = self.candidates.get(context)?;
		continuations.choose(rng).map(String::as_str)
	}

	/// Generates `token_count` tokens of text, joined by single spaces.
	///
	/// Generation starts from a window of `n - 1` start sentinels and walks
	/// forward one sampled token at a time, feeding each token back into the
	/// window. Sampling `"."` closes the sentence: the window is reset to
	/// sentinels so no context ever spans a sentence boundary. A dead-end
	/// context contributes an empty token (visible as a doubled space in the
	/// output) and generation carries on; exactly `token_count` sampling
	/// steps are always taken.
	///
	/// # Notes
	/// - `token_count == 0` yields the empty string.
	/// - For order 1 there is no window to slide; every step samples from
	///   the same empty context.
	/// - Output is reproducible for a given trained model and a seeded
	///   `rng`.
	pub fn generate_text<R: Rng>(&self, token_count: usize, rng: &mut R) -> String {
		let mut window = ContextWindow::new(self.n);
		let mut generated = Vec::with_capacity(token_count);
		for _ in 0..token_count {
			let token = self
				.random_token(window.context(), rng)
				.unwrap_or_default()
				.to_owned();
			if token == SENTENCE_END {
				window.reset();
			} else {
				window.push(token.clone());
			}
			generated.push(token);
		}
		generated.join(" ")
	}
}
