use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

pub mod source;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Download the python cheatsheet and turn its transcripts into runnable code.",
	long_about = "snatch fetches the python cheatsheet, strips the `>>> ` and `... ` prompts from \
	              its code samples, and extracts a doctest corpus without the statements whose \
	              output changes from run to run.\n\nQuick start:\n  snatch clean --language 2 \
	              --prefix 2   Download the english cheatsheet without prompts\n  snatch corpus \
	              --input README.md         Build the doctest corpus\n  snatch contents --input \
	              README.md       Check the table of contents"
)]
pub struct SnatchCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Directory that holds `snatch.toml` and that relative paths are
	/// resolved against.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Create a sample `snatch.toml` in the project root.
	///
	/// If the file already exists, this command is a no-op and exits
	/// successfully.
	Init,
	/// Download (or read) the cheatsheet and optionally strip the
	/// interpreter prompts from its code samples.
	///
	/// With `--prefix 2` every fenced block is rewritten as a ```python
	/// block holding only the statements: `>>> ` and `... ` prompts are
	/// removed and the interpreter's output is dropped.
	Clean {
		/// `1`/`chinese` or `2`/`english`.
		#[arg(long, short, default_value = "2")]
		language: String,

		/// `1`/`keep` to keep the prompts or `2`/`remove` to strip them.
		#[arg(long, default_value = "2")]
		prefix: String,

		/// Read the document from this file instead of downloading it.
		#[arg(long, short)]
		input: Option<PathBuf>,

		/// Where to save the result. Defaults to `[output] markdown`.
		#[arg(long, short)]
		output: Option<PathBuf>,

		/// Print the result instead of saving it.
		#[arg(long, default_value_t = false, conflicts_with = "output")]
		stdout: bool,

		/// Show a unified diff between the original and the cleaned document.
		#[arg(long, default_value_t = false)]
		diff: bool,
	},
	/// Extract the doctest corpus from a cheatsheet.
	///
	/// Only ```python blocks are read. Statements matching the deny list are
	/// skipped together with their output, and blank output lines become
	/// `<BLANKLINE>`.
	Corpus {
		/// The markdown document to read.
		#[arg(long, short)]
		input: PathBuf,

		/// Write the corpus to this file instead of stdout.
		#[arg(long, short)]
		output: Option<PathBuf>,

		/// Output format. `json` adds extraction statistics.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Produce the chinese cheatsheet from the english one.
	///
	/// Replaces the summary block (when both summary files are given) and
	/// then the first occurrence of each configured heading.
	Localize {
		/// The english document.
		#[arg(long, short)]
		input: PathBuf,

		/// File holding the english summary block.
		#[arg(long, requires = "summary_to")]
		summary_from: Option<PathBuf>,

		/// File holding the translated summary block.
		#[arg(long, requires = "summary_from")]
		summary_to: Option<PathBuf>,

		/// Where to save the result. Prints to stdout when omitted.
		#[arg(long, short)]
		output: Option<PathBuf>,
	},
	/// Render a cleaned cheatsheet as a standalone HTML page.
	Render {
		/// The markdown document to render.
		#[arg(long, short)]
		input: PathBuf,

		/// Where to save the page. Defaults to `[output] html`.
		#[arg(long, short)]
		output: Option<PathBuf>,

		/// highlight.js theme, e.g. `atom-one-dark` or `base16_edge-dark`.
		#[arg(long, default_value = "atom-one-dark")]
		style: String,

		/// `1`/`chinese` or `2`/`english`.
		#[arg(long, short, default_value = "2")]
		language: String,
	},
	/// Check that the table of contents and the library sections agree.
	///
	/// Exits with a non-zero status code when a listed library has no
	/// section or a section is missing from the contents.
	Contents {
		/// The markdown document to check.
		#[arg(long, short)]
		input: PathBuf,

		/// Output format for the report.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}
