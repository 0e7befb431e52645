use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::SnatchError;
use crate::SnatchResult;

static CONTENTS_SECTION: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?s)## Contents(.*?)##").unwrap_or_else(|e| panic!("contents regex: {e}"))
});
static CONTENTS_ENTRY: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\[``(.*?)``\]").unwrap_or_else(|e| panic!("entry regex: {e}")));
static DETAIL_HEADING: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\n## ([^#]*?)\n").unwrap_or_else(|e| panic!("heading regex: {e}")));

const CONTENTS_HEADING: &str = "Contents";

/// Mismatches between the `## Contents` list and the `## library` sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentsReport {
	/// Libraries listed in the contents that have no `## library` section.
	pub missing_details: Vec<String>,
	/// `## library` sections that are not listed in the contents.
	pub missing_entries: Vec<String>,
}

impl ContentsReport {
	/// Returns true when the contents and the sections agree.
	pub fn is_ok(&self) -> bool {
		self.missing_details.is_empty() && self.missing_entries.is_empty()
	}
}

/// Compare the ``[``library``]`` entries of the `## Contents` section with the
/// `## library` headings of the document.
pub fn check_contents(document: &str) -> SnatchResult<ContentsReport> {
	let section = CONTENTS_SECTION
		.find(document)
		.ok_or(SnatchError::MissingContentsSection)?
		.as_str();

	let mut report = ContentsReport::default();

	for entry in CONTENTS_ENTRY.captures_iter(section) {
		let library = &entry[1];
		if !document.contains(&format!("## {library}")) {
			report.missing_details.push(library.to_string());
		}
	}

	for heading in DETAIL_HEADING.captures_iter(document) {
		let detail = &heading[1];
		if detail == CONTENTS_HEADING {
			continue;
		}
		if !section.contains(&format!("[``{detail}``]")) {
			report.missing_entries.push(detail.to_string());
		}
	}

	tracing::debug!(
		missing_details = report.missing_details.len(),
		missing_entries = report.missing_entries.len(),
		"checked contents"
	);

	Ok(report)
}
