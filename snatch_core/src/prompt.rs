/// The interpreter's primary prompt, including its trailing space.
pub const PRIMARY_PROMPT: &str = ">>> ";
/// The interpreter's continuation prompt, including its trailing space.
pub const CONTINUATION_PROMPT: &str = "... ";

const BARE_PRIMARY: &str = ">>>";
const BARE_CONTINUATION: &str = "...";

/// Classification of one physical line of an interpreter transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptLine<'a> {
	/// `>>> statement`, holding the text after the prompt.
	Primary(&'a str),
	/// `... statement`, holding the text after the prompt.
	Continuation(&'a str),
	/// A prompt with nothing after it (`>>>` or `...`), used for blank lines
	/// inside a transcript.
	BareMarker,
	/// Echoed output or anything else that is not source.
	Other,
}

impl<'a> PromptLine<'a> {
	pub fn classify(line: &'a str) -> Self {
		if let Some(rest) = line.strip_prefix(PRIMARY_PROMPT) {
			return Self::Primary(rest);
		}

		if let Some(rest) = line.strip_prefix(CONTINUATION_PROMPT) {
			return Self::Continuation(rest);
		}

		match line.trim() {
			BARE_PRIMARY | BARE_CONTINUATION => Self::BareMarker,
			_ => Self::Other,
		}
	}

	/// Returns `true` for the three prompt classes.
	pub fn is_prompt(&self) -> bool {
		!matches!(self, Self::Other)
	}
}

/// Turn an interpreter transcript into plain source.
///
/// Prompted lines keep their statement (the 4-character prompt is removed and
/// the line ending is kept), bare markers become empty lines, and every other
/// line is dropped, so a block without any prompt normalizes to nothing. A
/// whitespace-only block is returned unchanged.
pub fn normalize_block(block: &str) -> String {
	if block.trim().is_empty() {
		return block.to_string();
	}

	let mut normalized = String::with_capacity(block.len());
	for line in block.split_inclusive('\n') {
		match PromptLine::classify(line) {
			PromptLine::Primary(statement) | PromptLine::Continuation(statement) => {
				normalized.push_str(statement);
			}
			PromptLine::BareMarker => normalized.push('\n'),
			PromptLine::Other => {}
		}
	}

	normalized
}
