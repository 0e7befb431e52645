use std::fmt;

use serde::Serialize;

use crate::SnatchError;
use crate::SnatchResult;
use crate::fence::extract_blocks;
use crate::prompt::normalize_block;
use crate::reinsert::reinsert_blocks;

/// Which edition of the cheatsheet to work on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
	Chinese,
	English,
}

impl Language {
	/// Parse a language choice. Accepts the numeric menu choices (`1` for
	/// chinese, `2` for english) as well as the language names.
	pub fn from_choice(choice: &str) -> SnatchResult<Self> {
		match choice.trim().to_ascii_lowercase().as_str() {
			"1" | "chinese" | "zh" | "zh-cn" => Ok(Self::Chinese),
			"2" | "english" | "en" => Ok(Self::English),
			_ => Err(SnatchError::InvalidLanguageChoice(choice.to_string())),
		}
	}

	/// Name used in page URLs and templates.
	pub fn slug(self) -> &'static str {
		match self {
			Self::Chinese => "chinese",
			Self::English => "english",
		}
	}

	/// Name shown to readers.
	pub fn display_name(self) -> &'static str {
		match self {
			Self::Chinese => "中文",
			Self::English => "English",
		}
	}
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.slug())
	}
}

/// Whether interpreter prompts are kept in the downloaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixChoice {
	Keep,
	Remove,
}

impl PrefixChoice {
	/// Parse a prefix choice: `1`/`keep` or `2`/`remove`.
	pub fn from_choice(choice: &str) -> SnatchResult<Self> {
		match choice.trim().to_ascii_lowercase().as_str() {
			"1" | "keep" => Ok(Self::Keep),
			"2" | "remove" => Ok(Self::Remove),
			_ => Err(SnatchError::InvalidPrefixChoice(choice.to_string())),
		}
	}
}

/// Replace every fenced transcript in `document` with plain source in a fence
/// tagged `language_tag`.
pub fn clean_document(document: &str, language_tag: &str) -> String {
	let blocks = extract_blocks(document);
	let normalized: Vec<String> = blocks.iter().map(|block| normalize_block(block)).collect();
	tracing::debug!(blocks = normalized.len(), "normalized fenced blocks");

	reinsert_blocks(document, &normalized, language_tag)
}

/// Apply the prefix choice to a downloaded document.
pub fn prepare_document(document: &str, prefix: PrefixChoice, language_tag: &str) -> String {
	match prefix {
		PrefixChoice::Keep => document.to_string(),
		PrefixChoice::Remove => clean_document(document, language_tag),
	}
}

/// Join a directory URL and a file name.
pub fn document_url(base_url: &str, file_name: &str) -> String {
	let file_name = file_name.trim_start_matches('/');
	if base_url.ends_with('/') {
		format!("{base_url}{file_name}")
	} else {
		format!("{base_url}/{file_name}")
	}
}
