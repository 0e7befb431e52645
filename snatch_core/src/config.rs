use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::SnatchError;
use crate::SnatchResult;
use crate::deny::DenyList;
use crate::localize::DEFAULT_HEADING_PAIRS;
use crate::pipeline::Language;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["snatch.toml", ".snatch.toml", ".config/snatch.toml"];

/// Where the cheatsheet documents are published.
pub const DEFAULT_BASE_URL: &str =
	"https://raw.githubusercontent.com/pynickle/python-cheatsheet-redefined/master/";

/// Language tag used for synthesized fences and for the doctest corpus.
pub const DEFAULT_LANGUAGE_TAG: &str = "python";

/// Default request timeout when fetching documents, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration loaded from a `snatch.toml` file.
///
/// ```toml
/// [source]
/// base_url = "https://raw.githubusercontent.com/pynickle/python-cheatsheet-redefined/master/"
/// english = "README.md"
/// chinese = "README-zh-cn.md"
/// timeout_secs = 10
///
/// [fence]
/// language = "python"
///
/// [deny]
/// patterns = ["uuid.uuid4"]
/// statements = ["id(a)"]
/// extend_defaults = true
///
/// [localize]
/// pairs = [["Text Processing", "文本处理"]]
///
/// [output]
/// markdown = "python-cheatsheet.md"
/// html = "python-cheatsheet.html"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct SnatchConfig {
	#[serde(default)]
	pub source: SourceConfig,
	#[serde(default)]
	pub fence: FenceConfig,
	#[serde(default)]
	pub deny: DenyConfig,
	#[serde(default)]
	pub localize: LocalizeConfig,
	#[serde(default)]
	pub output: OutputConfig,
}

/// Where documents are fetched from.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
	/// Directory URL the document file names are joined onto.
	#[serde(default = "default_base_url")]
	pub base_url: String,
	/// File name of the english document.
	#[serde(default = "default_english_file")]
	pub english: String,
	/// File name of the chinese document.
	#[serde(default = "default_chinese_file")]
	pub chinese: String,
	/// Request timeout in seconds.
	#[serde(default = "default_timeout_secs")]
	pub timeout_secs: u64,
}

impl Default for SourceConfig {
	fn default() -> Self {
		Self {
			base_url: default_base_url(),
			english: default_english_file(),
			chinese: default_chinese_file(),
			timeout_secs: DEFAULT_TIMEOUT_SECS,
		}
	}
}

impl SourceConfig {
	/// The configured file name for `language`.
	pub fn file_name(&self, language: Language) -> &str {
		match language {
			Language::Chinese => &self.chinese,
			Language::English => &self.english,
		}
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct FenceConfig {
	/// Tag written on synthesized fences and required on fences the corpus
	/// filter enters.
	#[serde(default = "default_language_tag")]
	pub language: String,
}

impl Default for FenceConfig {
	fn default() -> Self {
		Self {
			language: default_language_tag(),
		}
	}
}

/// Extra entries for the doctest deny list.
#[derive(Debug, Clone, Deserialize)]
pub struct DenyConfig {
	/// Regular expressions searched in every line of a block.
	#[serde(default)]
	pub patterns: Vec<String>,
	/// Statements matched exactly after the `>>> ` prompt.
	#[serde(default)]
	pub statements: Vec<String>,
	/// Multi-line transcripts removed from the assembled corpus.
	#[serde(default)]
	pub transcripts: Vec<String>,
	/// When `true` (default) the entries above are added to the built-in deny
	/// list. When `false` they replace it.
	#[serde(default = "default_true")]
	pub extend_defaults: bool,
}

impl Default for DenyConfig {
	fn default() -> Self {
		Self {
			patterns: Vec::new(),
			statements: Vec::new(),
			transcripts: Vec::new(),
			extend_defaults: true,
		}
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalizeConfig {
	/// Ordered `[english, translated]` heading pairs. Each pair replaces only
	/// the first occurrence of its english text.
	#[serde(default = "default_heading_pairs")]
	pub pairs: Vec<(String, String)>,
}

impl Default for LocalizeConfig {
	fn default() -> Self {
		Self {
			pairs: default_heading_pairs(),
		}
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
	#[serde(default = "default_markdown_output")]
	pub markdown: PathBuf,
	#[serde(default = "default_html_output")]
	pub html: PathBuf,
}

impl Default for OutputConfig {
	fn default() -> Self {
		Self {
			markdown: default_markdown_output(),
			html: default_html_output(),
		}
	}
}

fn default_base_url() -> String {
	DEFAULT_BASE_URL.to_string()
}

fn default_english_file() -> String {
	"README.md".to_string()
}

fn default_chinese_file() -> String {
	"README-zh-cn.md".to_string()
}

fn default_timeout_secs() -> u64 {
	DEFAULT_TIMEOUT_SECS
}

fn default_language_tag() -> String {
	DEFAULT_LANGUAGE_TAG.to_string()
}

fn default_true() -> bool {
	true
}

fn default_heading_pairs() -> Vec<(String, String)> {
	DEFAULT_HEADING_PAIRS
		.iter()
		.map(|(english, translated)| ((*english).to_string(), (*translated).to_string()))
		.collect()
}

fn default_markdown_output() -> PathBuf {
	PathBuf::from("python-cheatsheet.md")
}

fn default_html_output() -> PathBuf {
	PathBuf::from("python-cheatsheet.html")
}

impl SnatchConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> SnatchResult<Option<SnatchConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config = Self::parse(&content)?;
		tracing::debug!(path = %config_path.display(), "loaded config");

		Ok(Some(config))
	}

	/// Like [`SnatchConfig::load`], falling back to the defaults when no
	/// config file exists.
	pub fn load_or_default(root: &Path) -> SnatchResult<SnatchConfig> {
		Ok(Self::load(root)?.unwrap_or_default())
	}

	/// Parse config file content.
	pub fn parse(content: &str) -> SnatchResult<SnatchConfig> {
		toml::from_str(content).map_err(|e| SnatchError::ConfigParse(e.to_string()))
	}

	/// Build the deny list for the doctest corpus.
	pub fn deny_list(&self) -> SnatchResult<DenyList> {
		DenyList::from_config(&self.deny)
	}
}
