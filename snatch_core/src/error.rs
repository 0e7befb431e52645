use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum SnatchError {
	#[error(transparent)]
	#[diagnostic(code(snatch::io_error))]
	Io(#[from] std::io::Error),

	#[error("invalid language choice: `{0}`")]
	#[diagnostic(
		code(snatch::invalid_language_choice),
		help("use `1` (or `chinese`) for the chinese document and `2` (or `english`) for the english one")
	)]
	InvalidLanguageChoice(String),

	#[error("invalid prefix choice: `{0}`")]
	#[diagnostic(
		code(snatch::invalid_prefix_choice),
		help("use `1` (or `keep`) to keep `>>> ` prompts and `2` (or `remove`) to strip them")
	)]
	InvalidPrefixChoice(String),

	#[error("invalid deny pattern `{pattern}`: {reason}")]
	#[diagnostic(
		code(snatch::invalid_deny_pattern),
		help("entries in `[deny] patterns` are regular expressions; escape `(`, `[` and `.` as needed")
	)]
	InvalidDenyPattern { pattern: String, reason: String },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(snatch::config_parse),
		help(
			"check that snatch.toml is valid TOML with [source], [fence], [deny], [localize] \
			 and/or [output] sections"
		)
	)]
	ConfigParse(String),

	#[error("failure to render markdown: {0}")]
	#[diagnostic(code(snatch::markdown))]
	Markdown(String),

	#[error("template rendering failed: {0}")]
	#[diagnostic(code(snatch::template_render))]
	TemplateRender(String),

	#[error("unknown highlight style: `{0}`")]
	#[diagnostic(
		code(snatch::unknown_style),
		help(
			"available styles: atom-one-dark, base16_edge-dark, base16_tomorrow-night, \
			 base16_material-darker, github-dark-dimmed, androidstudio, atom-one-light, \
			 base16_material-lighter, base16_tomorrow, github"
		)
	)]
	UnknownStyle(String),

	#[error("no `## Contents` section found")]
	#[diagnostic(
		code(snatch::missing_contents_section),
		help("the document needs a `## Contents` heading followed by another `##` heading")
	)]
	MissingContentsSection,

	#[error("failed to fetch `{url}`: {reason}")]
	#[diagnostic(
		code(snatch::fetch),
		help("pass `--input <file>` to read a local copy instead")
	)]
	Fetch { url: String, reason: String },
}

pub type SnatchResult<T> = Result<T, SnatchError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
