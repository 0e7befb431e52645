use serde::Serialize;

/// The marker that opens and closes a fenced code block.
pub const FENCE_MARKER: &str = "```";

/// A fenced code block found by [`scan_fences`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
	/// 0-based position of the block among all complete blocks in the
	/// document.
	pub index: usize,
	/// Text after the opening marker, trimmed (e.g. `python`). Empty for a
	/// bare fence.
	pub info_string: String,
	/// The raw lines strictly between the opening and closing markers, line
	/// endings included.
	pub body: String,
	/// 1-indexed line number of the opening marker.
	pub opening_line: usize,
	/// 1-indexed line number of the closing marker.
	pub closing_line: usize,
}

/// An issue found while scanning that does not stop the scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub enum FenceDiagnostic {
	/// A fence was opened but the document ended before it was closed. The
	/// block is not part of [`FenceScan::blocks`].
	UnclosedFence { line: usize, info_string: String },
}

/// Result of [`scan_fences`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FenceScan {
	pub blocks: Vec<CodeBlock>,
	pub diagnostics: Vec<FenceDiagnostic>,
}

/// Returns `true` when the trimmed line starts with [`FENCE_MARKER`]. Whether
/// it opens or closes a block depends on the scanner state, not on the line.
pub fn is_fence_line(line: &str) -> bool {
	line.trim().starts_with(FENCE_MARKER)
}

/// Split a document into lines, keeping each line's terminator.
pub(crate) fn lines_with_endings(document: &str) -> impl Iterator<Item = &str> {
	document.split_inclusive('\n')
}

/// Walk the document and collect every complete fenced block in order.
///
/// Fences do not nest: the first fence line opens a block and the next one
/// closes it, whatever either carries after the marker. A block that is still
/// open when the document ends is dropped and reported as a
/// [`FenceDiagnostic::UnclosedFence`].
pub fn scan_fences(document: &str) -> FenceScan {
	let mut scan = FenceScan::default();
	let mut open: Option<(usize, String)> = None;
	let mut body = String::new();

	for (idx, line) in lines_with_endings(document).enumerate() {
		let line_number = idx + 1;

		if !is_fence_line(line) {
			if open.is_some() {
				body.push_str(line);
			}
			continue;
		}

		match open.take() {
			None => {
				let info_string = line.trim()[FENCE_MARKER.len()..].trim().to_string();
				open = Some((line_number, info_string));
				body.clear();
			}
			Some((opening_line, info_string)) => {
				scan.blocks.push(CodeBlock {
					index: scan.blocks.len(),
					info_string,
					body: std::mem::take(&mut body),
					opening_line,
					closing_line: line_number,
				});
			}
		}
	}

	if let Some((line, info_string)) = open {
		tracing::warn!(line, "fenced block is never closed and will be dropped");
		scan.diagnostics
			.push(FenceDiagnostic::UnclosedFence { line, info_string });
	}

	tracing::debug!(blocks = scan.blocks.len(), "scanned fenced blocks");
	scan
}

/// Return the raw bodies of every complete fenced block, in document order.
pub fn extract_blocks(document: &str) -> Vec<String> {
	scan_fences(document)
		.blocks
		.into_iter()
		.map(|block| block.body)
		.collect()
}
