mod common;

use common::CLEANED_DOCUMENT;
use snatch_core::AnyEmptyResult;

#[test]
fn render_writes_html_page() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("cheatsheet.md"), CLEANED_DOCUMENT)?;

	common::snatch_cmd()
		.arg("render")
		.arg("--path")
		.arg(tmp.path())
		.arg("--input")
		.arg("cheatsheet.md")
		.arg("--style")
		.arg("base16/edge-dark")
		.assert()
		.success()
		.stdout(predicates::str::contains("Saved"));

	let html = std::fs::read_to_string(tmp.path().join("python-cheatsheet.html"))?;
	assert!(html.contains("styles/base16/edge-dark.min.css"));
	assert!(html.contains("Edge Dark"));
	assert!(html.contains("<h1>Title</h1>"));
	assert!(html.contains(r#"<code class="language-python">x = 1"#));
	assert!(html.contains("README.pdf"));

	Ok(())
}

#[test]
fn render_chinese_page_links_chinese_pdf() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("cheatsheet.md"), CLEANED_DOCUMENT)?;

	common::snatch_cmd()
		.arg("render")
		.arg("--path")
		.arg(tmp.path())
		.arg("--input")
		.arg("cheatsheet.md")
		.arg("--language")
		.arg("1")
		.arg("--output")
		.arg("site/index.html")
		.assert()
		.success();

	let html = std::fs::read_to_string(tmp.path().join("site/index.html"))?;
	assert!(html.contains("README-zh-cn.pdf"));
	assert!(html.contains("中文"));

	Ok(())
}

#[test]
fn render_rejects_unknown_style() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("cheatsheet.md"), CLEANED_DOCUMENT)?;

	common::snatch_cmd()
		.arg("render")
		.arg("--path")
		.arg(tmp.path())
		.arg("--input")
		.arg("cheatsheet.md")
		.arg("--style")
		.arg("solarized")
		.assert()
		.code(2)
		.stderr(predicates::str::contains("snatch::unknown_style"));

	assert!(!tmp.path().join("python-cheatsheet.html").exists());

	Ok(())
}
