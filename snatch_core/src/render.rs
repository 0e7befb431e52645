use markdown::CompileOptions;
use markdown::Options;
use markdown::ParseOptions;
use minijinja::Environment;
use minijinja::context;

use crate::SnatchError;
use crate::SnatchResult;
use crate::pipeline::Language;

const PAGE_TEMPLATE_NAME: &str = "cheatsheet";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <meta charset="utf-8">
        <meta name="viewport" content="width=device-width,initial-scale=1,minimum-scale=1,maximum-scale=1,user-scalable=no" />
        <title>Python Cheatsheet Redefined</title>
        <link rel="stylesheet" id="code-style" href="https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles/{{ style }}.min.css">
        <link rel="stylesheet" type="text/css" href="https://cdnjs.cloudflare.com/ajax/libs/semantic-ui/2.5.0/semantic.min.css">
        <script src="https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/highlight.min.js"></script>
        <script>hljs.highlightAll()</script>
    </head>
    <body>
        <br>
        <div class="ui container">
            <div class="ui label">{{ style_name }}</div>
            <div class="ui label">{{ language_name }}</div>
            {% if language == "english" %}
            <a class="ui button" href="https://raw.githubusercontent.com/pynickle/python-cheatsheet-redefined/master/README.pdf">Download pdf</a>
            {% else %}
            <a class="ui button" href="https://raw.githubusercontent.com/pynickle/python-cheatsheet-redefined/master/README-zh-cn.pdf">下载pdf</a>
            {% endif %}
        </div>
        <br>
        <div id="content" class="ui container">
{{ content|safe }}
        </div>
    </body>
</html>
"#;

/// The highlight.js themes offered on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightStyle {
	#[default]
	AtomOneDark,
	EdgeDark,
	TomorrowNight,
	MaterialDarker,
	GithubDarkDimmed,
	AndroidStudio,
	AtomOneLight,
	MaterialLighter,
	Tomorrow,
	Github,
}

impl HighlightStyle {
	pub const ALL: [Self; 10] = [
		Self::AtomOneDark,
		Self::EdgeDark,
		Self::TomorrowNight,
		Self::MaterialDarker,
		Self::GithubDarkDimmed,
		Self::AndroidStudio,
		Self::AtomOneLight,
		Self::MaterialLighter,
		Self::Tomorrow,
		Self::Github,
	];

	/// URL-safe identifier, with `_` standing in for the `/` of the
	/// stylesheet path.
	pub fn slug(self) -> &'static str {
		match self {
			Self::AtomOneDark => "atom-one-dark",
			Self::EdgeDark => "base16_edge-dark",
			Self::TomorrowNight => "base16_tomorrow-night",
			Self::MaterialDarker => "base16_material-darker",
			Self::GithubDarkDimmed => "github-dark-dimmed",
			Self::AndroidStudio => "androidstudio",
			Self::AtomOneLight => "atom-one-light",
			Self::MaterialLighter => "base16_material-lighter",
			Self::Tomorrow => "base16_tomorrow",
			Self::Github => "github",
		}
	}

	pub fn display_name(self) -> &'static str {
		match self {
			Self::AtomOneDark => "Atom One Dark",
			Self::EdgeDark => "Edge Dark",
			Self::TomorrowNight => "Tomorrow Night",
			Self::MaterialDarker => "Material Darker",
			Self::GithubDarkDimmed => "Github Dark Dimmed",
			Self::AndroidStudio => "Android Studio",
			Self::AtomOneLight => "Atom One Light",
			Self::MaterialLighter => "Material Lighter",
			Self::Tomorrow => "Tomorrow",
			Self::Github => "Github",
		}
	}

	/// Stylesheet path under the highlight.js `styles/` directory.
	pub fn css_path(self) -> String {
		self.slug().replace('_', "/")
	}

	/// Look up a theme by slug or by stylesheet path.
	pub fn from_slug(slug: &str) -> SnatchResult<Self> {
		let slug = slug.trim().replace('/', "_");
		Self::ALL
			.into_iter()
			.find(|style| style.slug() == slug)
			.ok_or(SnatchError::UnknownStyle(slug))
	}
}

/// Page settings for [`render_html`].
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
	pub style: HighlightStyle,
	pub language: Language,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			style: HighlightStyle::default(),
			language: Language::English,
		}
	}
}

/// Convert markdown to an HTML fragment. Raw HTML in the document is kept.
pub fn markdown_to_html(markdown: &str) -> SnatchResult<String> {
	let options = Options {
		parse: ParseOptions::gfm(),
		compile: CompileOptions {
			allow_dangerous_html: true,
			..CompileOptions::gfm()
		},
	};

	markdown::to_html_with_options(markdown, &options).map_err(|e| SnatchError::Markdown(e.to_string()))
}

/// Render a cleaned cheatsheet as a standalone HTML page.
pub fn render_html(markdown: &str, options: &RenderOptions) -> SnatchResult<String> {
	let content = markdown_to_html(markdown)?;

	let mut env = Environment::new();
	env.set_keep_trailing_newline(true);
	env.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)
		.map_err(|e| SnatchError::TemplateRender(e.to_string()))?;

	let template = env
		.get_template(PAGE_TEMPLATE_NAME)
		.map_err(|e| SnatchError::TemplateRender(e.to_string()))?;

	template
		.render(context! {
			style => options.style.css_path(),
			style_name => options.style.display_name(),
			language => options.language.slug(),
			language_name => options.language.display_name(),
			content => content,
		})
		.map_err(|e| SnatchError::TemplateRender(e.to_string()))
}
