use std::collections::BTreeSet;
use std::collections::HashSet;

use derive_more::Deref;
use regex::Regex;
use serde::Serialize;

use crate::deny::DEFAULT_DENY_TRANSCRIPTS;
use crate::deny::DenyList;
use crate::fence::FENCE_MARKER;
use crate::fence::lines_with_endings;

/// Stands in for an empty line of expected output, which doctest would
/// otherwise read as the end of the example.
pub const BLANK_LINE_PLACEHOLDER: &str = "<BLANKLINE>\n";

const PRIMARY_PROMPT_MARKER: &str = ">>>";

/// Where the corpus scanner is in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionState {
	/// Outside any fenced block of the target language.
	Outside,
	/// Inside a target block, collecting lines.
	InCode,
	/// Skipping a denied statement until the next `>>>` prompt.
	InNotest,
}

/// What happens to the line that caused a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction<'a> {
	/// The line is not part of the corpus.
	Skip,
	/// The line is copied verbatim.
	Emit(&'a str),
	/// A blank line, written as [`BLANK_LINE_PLACEHOLDER`].
	Placeholder,
	/// The line starts a denied statement.
	Suppress,
}

/// Counts collected while extracting a corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
	/// Fenced blocks of the target language that were entered.
	pub blocks: usize,
	/// Lines copied into the corpus.
	pub emitted: usize,
	/// Blank lines written as placeholders.
	pub placeholders: usize,
	/// Statements dropped because they matched the deny list.
	pub suppressed: usize,
	/// Multi-line transcripts removed after assembly.
	pub transcripts_removed: usize,
}

/// A doctest corpus together with the numbers behind it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct Corpus {
	#[deref]
	pub text: String,
	pub stats: CorpusStats,
}

/// Extracts the deterministic part of every fenced block tagged with one
/// language, ready for line-by-line output verification.
#[derive(Debug, Clone)]
pub struct CorpusFilter {
	opening_fence: String,
	deny: DenyList,
}

impl CorpusFilter {
	pub fn new(language_tag: &str, deny: DenyList) -> Self {
		Self {
			opening_fence: format!("{FENCE_MARKER}{language_tag}"),
			deny,
		}
	}

	pub fn deny_list(&self) -> &DenyList {
		&self.deny
	}

	/// Compute the next state for `line` and what to do with it.
	///
	/// A `>>>` line seen while skipping ends the skip and is judged again as
	/// code, so a denied statement only swallows its own continuation and
	/// output lines.
	pub fn transition<'a>(
		&self,
		state: ExtractionState,
		line: &'a str,
	) -> (ExtractionState, LineAction<'a>) {
		let trimmed = line.trim();

		match state {
			ExtractionState::Outside => {
				if trimmed.starts_with(&self.opening_fence) {
					(ExtractionState::InCode, LineAction::Skip)
				} else {
					(ExtractionState::Outside, LineAction::Skip)
				}
			}
			ExtractionState::InNotest => {
				if line.starts_with(PRIMARY_PROMPT_MARKER) {
					self.transition(ExtractionState::InCode, line)
				} else {
					(ExtractionState::InNotest, LineAction::Skip)
				}
			}
			ExtractionState::InCode => {
				if self.deny.matches_pattern(line) || self.deny.matches_statement(line) {
					(ExtractionState::InNotest, LineAction::Suppress)
				} else if trimmed.starts_with(FENCE_MARKER) {
					(ExtractionState::Outside, LineAction::Skip)
				} else if trimmed.is_empty() {
					(ExtractionState::InCode, LineAction::Placeholder)
				} else {
					(ExtractionState::InCode, LineAction::Emit(line))
				}
			}
		}
	}

	/// Assemble the corpus for `document`.
	///
	/// A block still open at the end of the document contributes what was
	/// collected up to that point. CRLF line endings are read as LF.
	pub fn extract(&self, document: &str) -> Corpus {
		let document = document.replace("\r\n", "\n");
		let mut corpus = Corpus::default();
		let mut state = ExtractionState::Outside;

		for line in lines_with_endings(&document) {
			let (next, action) = self.transition(state, line);
			if state == ExtractionState::Outside && next == ExtractionState::InCode {
				corpus.stats.blocks += 1;
			}

			match action {
				LineAction::Skip => {}
				LineAction::Emit(text) => {
					corpus.text.push_str(text);
					corpus.stats.emitted += 1;
				}
				LineAction::Placeholder => {
					corpus.text.push_str(BLANK_LINE_PLACEHOLDER);
					corpus.stats.placeholders += 1;
				}
				LineAction::Suppress => {
					tracing::trace!(line = line.trim_end(), "suppressed nondeterministic statement");
					corpus.stats.suppressed += 1;
				}
			}

			state = next;
		}

		if state != ExtractionState::Outside {
			tracing::warn!("document ended inside a `{}` block", self.opening_fence);
		}

		for transcript in &self.deny.transcripts {
			if !transcript.is_empty() && corpus.text.contains(transcript.as_str()) {
				corpus.text = corpus.text.replace(transcript.as_str(), "");
				corpus.stats.transcripts_removed += 1;
			}
		}

		tracing::debug!(
			blocks = corpus.stats.blocks,
			emitted = corpus.stats.emitted,
			suppressed = corpus.stats.suppressed,
			"extracted doctest corpus"
		);

		corpus
	}
}

/// Extract the doctest corpus of `document` using the given deny entries and
/// the built-in multi-line transcripts.
#[allow(clippy::implicit_hasher)]
pub fn extract_test_corpus(
	document: &str,
	language_tag: &str,
	deny_patterns: &[Regex],
	deny_statements: &HashSet<String>,
) -> String {
	let deny = DenyList {
		patterns: deny_patterns.to_vec(),
		statements: deny_statements.iter().cloned().collect::<BTreeSet<_>>(),
		transcripts: DEFAULT_DENY_TRANSCRIPTS
			.iter()
			.map(ToString::to_string)
			.collect(),
	};

	CorpusFilter::new(language_tag, deny).extract(document).text
}
