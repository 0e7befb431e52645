use std::path::Path;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;
use snatch_cli::Commands;
use snatch_cli::OutputFormat;
use snatch_cli::SnatchCli;
use snatch_cli::source::acquire_document;
use snatch_cli::source::save_document;
use snatch_core::CorpusFilter;
use snatch_core::FenceDiagnostic;
use snatch_core::HighlightStyle;
use snatch_core::Language;
use snatch_core::Localizer;
use snatch_core::PrefixChoice;
use snatch_core::RenderOptions;
use snatch_core::SnatchConfig;
use snatch_core::check_contents;
use snatch_core::prepare_document;
use snatch_core::render_html;
use snatch_core::scan_fences;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = SnatchCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::Init) => run_init(&args),
		Some(Commands::Clean {
			language,
			prefix,
			input,
			output,
			stdout,
			diff,
		}) => {
			run_clean(
				&args,
				&CleanArgs {
					language,
					prefix,
					input: input.as_deref(),
					output: output.as_deref(),
					stdout: *stdout,
					diff: *diff,
				},
			)
		}
		Some(Commands::Corpus {
			input,
			output,
			format,
		}) => run_corpus(&args, input, output.as_deref(), *format),
		Some(Commands::Localize {
			input,
			summary_from,
			summary_to,
			output,
		}) => {
			run_localize(
				&args,
				input,
				summary_from.as_deref().zip(summary_to.as_deref()),
				output.as_deref(),
			)
		}
		Some(Commands::Render {
			input,
			output,
			style,
			language,
		}) => run_render(&args, input, output.as_deref(), style, language),
		Some(Commands::Contents { input, format }) => run_contents(&args, input, *format),
		None => {
			eprintln!("No subcommand specified. Run `snatch --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<snatch_core::SnatchError>() {
			Ok(snatch_err) => {
				let report: miette::Report = (*snatch_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn init_tracing(verbose: bool, use_color: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter = EnvFilter::try_from_env("SNATCH_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.init();
}

fn resolve_root(args: &SnatchCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Resolve a user supplied path against the project root.
fn resolve_path(root: &Path, path: &Path) -> PathBuf {
	if path.is_absolute() {
		path.to_path_buf()
	} else {
		root.join(path)
	}
}

fn load_config(root: &Path) -> Result<SnatchConfig, Box<dyn std::error::Error>> {
	Ok(SnatchConfig::load_or_default(root)?)
}

const SAMPLE_CONFIG: &str = r#"# snatch configuration

# Where the cheatsheet is downloaded from.
# [source]
# base_url = "https://raw.githubusercontent.com/pynickle/python-cheatsheet-redefined/master/"
# english = "README.md"
# chinese = "README-zh-cn.md"
# timeout_secs = 10

# Tag written on cleaned fences and read by `snatch corpus`.
[fence]
language = "python"

# Extra statements to keep out of the doctest corpus.
[deny]
# patterns = ['uuid\.uuid4']
# statements = ["id(a)"]
extend_defaults = true
"#;

fn run_init(args: &SnatchCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config_path = root.join("snatch.toml");

	if let Some(existing) = SnatchConfig::resolve_path(&root) {
		println!("Config file already exists: {}", existing.display());
		return Ok(());
	}

	std::fs::write(&config_path, SAMPLE_CONFIG)?;
	println!("Created {}", config_path.display());

	Ok(())
}

struct CleanArgs<'a> {
	language: &'a str,
	prefix: &'a str,
	input: Option<&'a Path>,
	output: Option<&'a Path>,
	stdout: bool,
	diff: bool,
}

fn run_clean(args: &SnatchCli, clean: &CleanArgs<'_>) -> Result<(), Box<dyn std::error::Error>> {
	let start = Instant::now();
	let root = resolve_root(args);
	let config = load_config(&root)?;
	let language = Language::from_choice(clean.language)?;
	let prefix = PrefixChoice::from_choice(clean.prefix)?;

	let input = clean.input.map(|path| resolve_path(&root, path));
	if input.is_none() && !clean.stdout {
		println!("Requesting {language} cheatsheet...");
	}
	let original = acquire_document(input.as_deref(), &config.source, language)?;

	if prefix == PrefixChoice::Remove {
		for diagnostic in &scan_fences(&original).diagnostics {
			let report = fence_diagnostic_to_report(diagnostic);
			eprintln!("{report:?}");
		}
	}

	let prepared = prepare_document(&original, prefix, &config.fence.language);

	if clean.diff {
		print_diff(&original, &prepared);
	}

	if clean.stdout {
		print!("{prepared}");
		return Ok(());
	}

	let output = resolve_path(&root, clean.output.unwrap_or(config.output.markdown.as_path()));
	save_document(&output, &prepared)?;
	println!("Saved {}", colored!(output.display(), green));
	println!("Completed in {:.2} seconds", start.elapsed().as_secs_f64());

	Ok(())
}

fn run_corpus(
	args: &SnatchCli,
	input: &Path,
	output: Option<&Path>,
	format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config = load_config(&root)?;
	let document = std::fs::read_to_string(resolve_path(&root, input))?;

	let filter = CorpusFilter::new(&config.fence.language, config.deny_list()?);
	let corpus = filter.extract(&document);

	if args.verbose {
		eprintln!(
			"Extracted {} line(s) from {} block(s), suppressed {} statement(s)",
			corpus.stats.emitted, corpus.stats.blocks, corpus.stats.suppressed
		);
	}

	let rendered = match format {
		OutputFormat::Text => corpus.text.clone(),
		OutputFormat::Json => {
			let mut json = serde_json::to_string_pretty(&serde_json::json!({
				"corpus": corpus.text,
				"stats": corpus.stats,
			}))?;
			json.push('\n');
			json
		}
	};

	match output {
		Some(path) => {
			let path = resolve_path(&root, path);
			save_document(&path, &rendered)?;
			println!("Saved {}", colored!(path.display(), green));
		}
		None => print!("{rendered}"),
	}

	Ok(())
}

fn run_localize(
	args: &SnatchCli,
	input: &Path,
	summary: Option<(&Path, &Path)>,
	output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config = load_config(&root)?;
	let document = std::fs::read_to_string(resolve_path(&root, input))?;

	let mut localizer = Localizer::new(config.localize.pairs);
	if let Some((from, to)) = summary {
		localizer = localizer.with_summary(
			std::fs::read_to_string(resolve_path(&root, from))?,
			std::fs::read_to_string(resolve_path(&root, to))?,
		);
	}

	let localized = localizer.localize(&document);

	match output {
		Some(path) => {
			let path = resolve_path(&root, path);
			save_document(&path, &localized)?;
			println!("Saved {}", colored!(path.display(), green));
		}
		None => print!("{localized}"),
	}

	Ok(())
}

fn run_render(
	args: &SnatchCli,
	input: &Path,
	output: Option<&Path>,
	style: &str,
	language: &str,
) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config = load_config(&root)?;
	let options = RenderOptions {
		style: HighlightStyle::from_slug(style)?,
		language: Language::from_choice(language)?,
	};

	let document = std::fs::read_to_string(resolve_path(&root, input))?;
	let html = render_html(&document, &options)?;

	let output = resolve_path(&root, output.unwrap_or(config.output.html.as_path()));
	save_document(&output, &html)?;
	println!("Saved {}", colored!(output.display(), green));

	Ok(())
}

fn run_contents(
	args: &SnatchCli,
	input: &Path,
	format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let document = std::fs::read_to_string(resolve_path(&root, input))?;
	let report = check_contents(&document)?;

	match format {
		OutputFormat::Json => {
			println!("{}", serde_json::to_string_pretty(&serde_json::json!({
				"ok": report.is_ok(),
				"missing_details": report.missing_details,
				"missing_entries": report.missing_entries,
			}))?);
		}
		OutputFormat::Text => {
			for library in &report.missing_details {
				println!("{} {library} has no details", colored!("warning:", yellow));
			}
			for detail in &report.missing_entries {
				println!("{} {detail} has no content", colored!("warning:", yellow));
			}
			if report.is_ok() {
				println!("Contents check passed.");
			} else {
				println!(
					"{} issue(s) found.",
					report.missing_details.len() + report.missing_entries.len()
				);
			}
		}
	}

	if !report.is_ok() {
		process::exit(1);
	}

	Ok(())
}

/// Print a unified diff between two strings, colorized.
fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				eprint!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				eprint!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				eprint!("   {change}");
			}
		}
	}
}

/// Convert a `FenceDiagnostic` into a warning `miette::Report`.
fn fence_diagnostic_to_report(diagnostic: &FenceDiagnostic) -> miette::Report {
	let (message, help) = match diagnostic {
		FenceDiagnostic::UnclosedFence { line, info_string } => {
			(
				format!("[line {line}] fenced block ````{info_string}` is never closed"),
				"the block is left as is; add a closing ``` line to clean it".to_string(),
			)
		}
		_ => ("unexpected fence structure".to_string(), String::new()),
	};

	let diag_value = miette::MietteDiagnostic::new(message)
		.with_code("snatch::unclosed_fence")
		.with_help(help)
		.with_severity(miette::Severity::Warning);
	miette::Report::new(diag_value)
}
