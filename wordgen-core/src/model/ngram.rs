/// Sentinel token padding the start of every sentence.
///
/// A model of order `n` prepends `n - 1` copies of this token to each
/// sentence before extracting n-grams, so the first real word is always
/// predicted from a full-length context. The sentinel contains angle
/// brackets on purpose: the tokenizer splits those away from real words,
/// so no input text can ever produce it as an ordinary token.
pub const START_TOKEN: &str = "<START>";

/// Token closing a sentence during generation.
///
/// When the model samples this token, the context window is reset to
/// sentinels so that no context ever spans a sentence boundary.
pub const SENTENCE_END: &str = ".";

/// An ordered sequence of the `n - 1` tokens preceding a target token,
/// oldest first.
pub type Context = Vec<String>;

/// A single observation: a context and the token that followed it.
pub type Ngram = (Context, String);

/// Breaks a token sequence into n-grams of order `n`.
///
/// The sequence is padded on the left with `n - 1` [`START_TOKEN`]s, then a
/// window of length `n` slides over it one position at a time. Each window
/// yields one n-gram whose context is the first `n - 1` tokens and whose
/// target is the last.
///
/// # Notes
/// - Exactly one n-gram per input token, in input order.
/// - For `n == 1` every context is empty.
/// - An empty token sequence yields no n-grams.
pub fn extract_ngrams(n: usize, tokens: &[String]) -> Vec<Ngram> {
	let padding = n.saturating_sub(1);
	let mut padded = vec![START_TOKEN.to_owned(); padding];
	padded.extend_from_slice(tokens);
	(padding..padded.len())
		.map(|index| (padded[index - padding..index].to_vec(), padded[index].clone()))
		.collect()
}
