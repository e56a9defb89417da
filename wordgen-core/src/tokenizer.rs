/// Splits raw text into word and punctuation tokens.
///
/// Every ASCII punctuation character is a token of its own: each occurrence
/// is surrounded with spaces, then the text is split on whitespace runs.
/// Words and punctuation marks keep their original left-to-right order, and
/// consecutive punctuation characters (`"..."`, `"?!"`) become one
/// single-character token each.
///
/// # Notes
/// - Only the fixed ASCII punctuation set is isolated; non-ASCII characters
///   stay attached to their surrounding word.
/// - Empty or whitespace-only input yields an empty vector.
/// - Deterministic: equal inputs always produce equal token sequences.
pub fn tokenize(text: &str) -> Vec<String> {
	let mut spaced = String::with_capacity(text.len());
	for character in text.chars() {
		if character.is_ascii_punctuation() {
			spaced.push(' ');
			spaced.push(character);
			spaced.push(' ');
		} else {
			spaced.push(character);
		}
	}
	spaced.split_whitespace().map(str::to_owned).collect()
}
