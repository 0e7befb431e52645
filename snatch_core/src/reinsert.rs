use crate::fence::FENCE_MARKER;
use crate::fence::is_fence_line;
use crate::fence::lines_with_endings;

/// Rebuild `document` with its fenced blocks replaced by `normalized_blocks`.
///
/// Block `i` of the document is replaced by `normalized_blocks[i]`, wrapped in
/// a fresh fence tagged with `language_tag`. Text outside fences is copied
/// unchanged. A fence with no matching entry (the list ran out) is copied
/// verbatim, and so is a fence left open at the end of the document. Every
/// `\r\n` in the result is normalized to `\n`.
pub fn reinsert_blocks(document: &str, normalized_blocks: &[String], language_tag: &str) -> String {
	let mut output = String::with_capacity(document.len());
	let mut rollback: Option<usize> = None;
	let mut original_body = String::new();
	let mut block_index = 0;

	for line in lines_with_endings(document) {
		let is_fence = is_fence_line(line);

		match rollback {
			None if is_fence => {
				rollback = Some(output.len());
				// Kept only if this block ends up without a replacement.
				output.push_str(line);
				original_body.clear();
			}
			None => output.push_str(line),
			Some(start) if is_fence => {
				rollback = None;
				if let Some(body) = normalized_blocks.get(block_index) {
					output.truncate(start);
					push_fence(&mut output, body, language_tag);
					block_index += 1;
				} else {
					tracing::debug!(block_index, "no normalized block, keeping original fence");
					output.push_str(&original_body);
					output.push_str(line);
				}
			}
			Some(_) => original_body.push_str(line),
		}
	}

	if rollback.is_some() {
		output.push_str(&original_body);
	}

	output.replace("\r\n", "\n")
}

fn push_fence(output: &mut String, body: &str, language_tag: &str) {
	output.push_str(FENCE_MARKER);
	output.push_str(language_tag);
	output.push('\n');
	output.push_str(body);
	if !body.is_empty() && !body.ends_with('\n') {
		output.push('\n');
	}
	output.push_str(FENCE_MARKER);
	output.push('\n');
}
