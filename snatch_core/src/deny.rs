use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::SnatchError;
use crate::SnatchResult;
use crate::config::DenyConfig;

/// Call patterns whose result depends on time, randomness, the host, or the
/// interpreter build. Each entry is a regular expression searched for
/// anywhere in a raw transcript line.
pub const DEFAULT_DENY_PATTERNS: &[&str] = &[
	"random.random",
	"random.randint",
	"random.randrange",
	"random.uniform",
	"codecs.getdecoder",
	"codecs.getencoder",
	"time.ctime",
	"time.perf_counter",
	"time.strftime",
	"time.localtime",
	"os.getcwd",
	"os.name",
	"secrets.choice",
	"date.today",
	"date.isocalendar",
	"calendar.month",
	"shutil.rmtree",
	"secrets.token_hex",
	"logger.info",
	"logger.error",
	"logger.critical",
	"logger.warning",
	"logger.log",
	"getpass.getpass",
	"getpass.getuser",
	"secrets.token_bytes",
	"platform.platform",
	"platform.python_compiler",
	"platform.python_version",
	"timeit.timeit",
	"ensurepip.version",
	"ensurepip.bootstrap",
	"sys.implementation",
	"sys.version",
	"sys.exit",
	"atexit.register",
	"exit",
	"ast.literal_eval",
	"dis.show_code",
	"runpy.run_path",
	"dis.code_info",
	"linecache.getline",
	"inspect.getmembers",
	"doctest.testfile",
	"runpy.run_module",
];

/// Statements compared exactly (after the `>>> ` prompt) against trimmed
/// transcript lines.
pub const DEFAULT_DENY_STATEMENTS: &[&str] = &[
	"del c",
	"list(p.glob('**/*.py'))",
	"name",
	"c = pickle.dumps(a)",
	"password",
	"a.timeit(number = 1000)",
	"foo()",
	r#"cmd("python argparse_example.py --help")"#,
];

/// Printing `sys.exc_info()` shows the traceback object's address.
pub const EXC_INFO_TRANSCRIPT: &str = ">>> try:
...     1/0
... except Exception:
...     print(sys.exc_info())   # traceback.print_exc is a beautful version of sys.exc_info()
...
(<class 'ZeroDivisionError'>, ZeroDivisionError('division by zero'), <traceback object at 0x000002D8BF38A248>)";

/// `traceback.print_exc()` prints an interpreter frame reference.
pub const PRINT_EXC_TRANSCRIPT: &str = r#">>> try:
...     1/0
... except Exception:
...     traceback.print_exc()
...
Traceback (most recent call last):
  File "<stdin>", line 2, in <module>
ZeroDivisionError: division by zero"#;

/// Multi-line transcripts removed from the assembled corpus as a whole.
pub const DEFAULT_DENY_TRANSCRIPTS: &[&str] = &[EXC_INFO_TRANSCRIPT, PRINT_EXC_TRANSCRIPT];

static DEFAULT_DENY_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
	DEFAULT_DENY_PATTERNS
		.iter()
		.map(|pattern| Regex::new(pattern))
		.collect::<Result<_, _>>()
		.unwrap_or_else(|e| panic!("built-in deny pattern failed to compile: {e}"))
});

/// The statements kept out of the doctest corpus.
#[derive(Debug, Clone)]
pub struct DenyList {
	/// Searched in every raw line of a code block.
	pub patterns: Vec<Regex>,
	/// Matched exactly against the statement of a `>>> ` line.
	pub statements: BTreeSet<String>,
	/// Removed verbatim from the assembled corpus.
	pub transcripts: Vec<String>,
}

impl DenyList {
	/// The built-in deny list.
	pub fn defaults() -> Self {
		Self {
			patterns: DEFAULT_DENY_REGEXES.clone(),
			statements: DEFAULT_DENY_STATEMENTS
				.iter()
				.map(ToString::to_string)
				.collect(),
			transcripts: DEFAULT_DENY_TRANSCRIPTS
				.iter()
				.map(ToString::to_string)
				.collect(),
		}
	}

	/// Build the deny list described by a `[deny]` section. With
	/// `extend_defaults` the configured entries are added to the built-in
	/// ones, otherwise they replace them.
	pub fn from_config(config: &DenyConfig) -> SnatchResult<Self> {
		let mut list = if config.extend_defaults {
			Self::defaults()
		} else {
			Self::empty()
		};

		for pattern in &config.patterns {
			list.patterns.push(compile_pattern(pattern)?);
		}
		list.statements.extend(config.statements.iter().cloned());
		list.transcripts.extend(config.transcripts.iter().cloned());

		Ok(list)
	}

	fn empty() -> Self {
		Self {
			patterns: Vec::new(),
			statements: BTreeSet::new(),
			transcripts: Vec::new(),
		}
	}

	/// Returns `true` when any pattern is found in `line`.
	pub fn matches_pattern(&self, line: &str) -> bool {
		self.patterns.iter().any(|pattern| pattern.is_match(line))
	}

	/// Returns `true` when the trimmed `line` is a `>>> ` prompt followed by
	/// exactly one of the denied statements.
	pub fn matches_statement(&self, line: &str) -> bool {
		line.trim()
			.strip_prefix(crate::prompt::PRIMARY_PROMPT)
			.is_some_and(|statement| self.statements.contains(statement))
	}
}

impl Default for DenyList {
	fn default() -> Self {
		Self::defaults()
	}
}

/// Compile a single deny pattern, reporting which entry was invalid.
pub fn compile_pattern(pattern: &str) -> SnatchResult<Regex> {
	Regex::new(pattern).map_err(|e| {
		SnatchError::InvalidDenyPattern {
			pattern: pattern.to_string(),
			reason: e.to_string(),
		}
	})
}
