use super::ngram::{Context, START_TOKEN};

/// Sliding window over the `n - 1` most recent tokens during generation.
///
/// The window starts as `n - 1` copies of [`START_TOKEN`] so the very first
/// sampling step already has a full-length context. Ordinary tokens slide in
/// on the right while the oldest token falls out on the left; a sentence
/// boundary puts the window back to its initial all-sentinel state.
///
/// # Invariants
/// - The window always holds exactly `n - 1` tokens.
/// - For order 1 the window is empty and `push` and `reset` are no-ops.
#[derive(Clone, Debug)]
pub struct ContextWindow {
	/// Current context, oldest token first.
	tokens: Context,

	/// Fixed window length (`n - 1`).
	length: usize,
}

impl ContextWindow {
	/// Creates the initial window for a model of order `n`.
	pub fn new(n: usize) -> Self {
		let length = n.saturating_sub(1);
		Self {
			tokens: vec![START_TOKEN.to_owned(); length],
			length,
		}
	}

	/// The current context, oldest token first.
	pub fn context(&self) -> &[String] {
		&self.tokens
	}

	/// Slides the window one step: drops the oldest token, appends `token`.
	pub fn push(&mut self, token: String) {
		if self.length == 0 {
			return;
		}
		self.tokens.remove(0);
		self.tokens.push(token);
	}

	/// Puts the window back to its initial all-sentinel state.
	pub fn reset(&mut self) {
		self.tokens.clear();
		self.tokens.resize(self.length, START_TOKEN.to_owned());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_with_sentinel_padding() {
		let window = ContextWindow::new(3);
		assert_eq!(window.context(), [START_TOKEN, START_TOKEN]);
	}

	#[test]
	fn push_drops_the_oldest_token() {
		let mut window = ContextWindow::new(3);
		window.push("the".to_owned());
		window.push("cat".to_owned());
		assert_eq!(window.context(), ["the", "cat"]);
		window.push("sat".to_owned());
		assert_eq!(window.context(), ["cat", "sat"]);
	}

	#[test]
	fn reset_restores_the_initial_state() {
		let mut window = ContextWindow::new(3);
		window.push("the".to_owned());
		window.push("cat".to_owned());
		window.reset();
		assert_eq!(window.context(), [START_TOKEN, START_TOKEN]);
	}

	#[test]
	fn order_one_window_stays_empty() {
		let mut window = ContextWindow::new(1);
		assert!(window.context().is_empty());
		window.push("the".to_owned());
		window.reset();
		assert!(window.context().is_empty());
	}
}
