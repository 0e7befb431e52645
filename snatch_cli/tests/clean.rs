mod common;

use common::CLEANED_DOCUMENT;
use common::TRANSCRIPT_DOCUMENT;
use snatch_core::AnyEmptyResult;

#[test]
fn clean_strips_prompts_to_stdout() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("README.md"), TRANSCRIPT_DOCUMENT)?;

	common::snatch_cmd()
		.arg("clean")
		.arg("--path")
		.arg(tmp.path())
		.arg("--input")
		.arg("README.md")
		.arg("--stdout")
		.assert()
		.success()
		.stdout(CLEANED_DOCUMENT);

	Ok(())
}

#[test]
fn clean_keeps_prompts_when_asked() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("README.md"), TRANSCRIPT_DOCUMENT)?;

	common::snatch_cmd()
		.arg("clean")
		.arg("--path")
		.arg(tmp.path())
		.arg("--input")
		.arg("README.md")
		.arg("--prefix")
		.arg("keep")
		.arg("--stdout")
		.assert()
		.success()
		.stdout(TRANSCRIPT_DOCUMENT);

	Ok(())
}

#[test]
fn clean_saves_to_configured_output() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("README.md"), TRANSCRIPT_DOCUMENT)?;
	std::fs::write(
		tmp.path().join("snatch.toml"),
		"[output]\nmarkdown = \"out/cheatsheet.md\"\n",
	)?;

	common::snatch_cmd()
		.arg("clean")
		.arg("--path")
		.arg(tmp.path())
		.arg("--input")
		.arg("README.md")
		.assert()
		.success()
		.stdout(predicates::str::contains("Saved"))
		.stdout(predicates::str::contains("Completed in"));

	let saved = std::fs::read_to_string(tmp.path().join("out/cheatsheet.md"))?;
	assert_eq!(saved, CLEANED_DOCUMENT);

	Ok(())
}

#[test]
fn clean_uses_configured_fence_tag() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("README.md"), TRANSCRIPT_DOCUMENT)?;
	std::fs::write(tmp.path().join(".snatch.toml"), "[fence]\nlanguage = \"py\"\n")?;

	common::snatch_cmd()
		.arg("clean")
		.arg("--path")
		.arg(tmp.path())
		.arg("--input")
		.arg("README.md")
		.arg("--stdout")
		.assert()
		.success()
		.stdout(predicates::str::contains("```py\nx = 1\n"));

	Ok(())
}

#[test]
fn clean_diff_goes_to_stderr() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("README.md"), TRANSCRIPT_DOCUMENT)?;

	common::snatch_cmd()
		.arg("clean")
		.arg("--path")
		.arg(tmp.path())
		.arg("--input")
		.arg("README.md")
		.arg("--stdout")
		.arg("--diff")
		.assert()
		.success()
		.stderr(predicates::str::contains("->>> x = 1"))
		.stderr(predicates::str::contains("+x = 1"));

	Ok(())
}

#[test]
fn clean_warns_about_unclosed_fence() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let document = "# Title\n\n```\n>>> x = 1\n";
	std::fs::write(tmp.path().join("README.md"), document)?;

	common::snatch_cmd()
		.arg("clean")
		.arg("--path")
		.arg(tmp.path())
		.arg("--input")
		.arg("README.md")
		.arg("--stdout")
		.assert()
		.success()
		.stdout(document)
		.stderr(predicates::str::contains("never closed"));

	Ok(())
}

#[test]
fn clean_rejects_unknown_language() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("README.md"), TRANSCRIPT_DOCUMENT)?;

	common::snatch_cmd()
		.arg("clean")
		.arg("--path")
		.arg(tmp.path())
		.arg("--input")
		.arg("README.md")
		.arg("--language")
		.arg("3")
		.arg("--stdout")
		.assert()
		.code(2)
		.stderr(predicates::str::contains("snatch::invalid_language_choice"));

	Ok(())
}

#[test]
fn clean_reports_invalid_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("README.md"), TRANSCRIPT_DOCUMENT)?;
	std::fs::write(tmp.path().join("snatch.toml"), "[fence\n")?;

	common::snatch_cmd()
		.arg("clean")
		.arg("--path")
		.arg(tmp.path())
		.arg("--input")
		.arg("README.md")
		.arg("--stdout")
		.assert()
		.code(2)
		.stderr(predicates::str::contains("snatch::config_parse"));

	Ok(())
}
