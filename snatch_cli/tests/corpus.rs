mod common;

use snatch_core::AnyEmptyResult;

const CORPUS_DOCUMENT: &str = "# random\n\n```python\n>>> import random\n>>> random.randint(1, \
                               10)\n7\n>>> 1 + 1\n2\n\n```\n\n```shell\n$ pip install x\n```\n";

#[test]
fn corpus_skips_denied_statements() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("README.md"), CORPUS_DOCUMENT)?;

	common::snatch_cmd()
		.arg("corpus")
		.arg("--path")
		.arg(tmp.path())
		.arg("--input")
		.arg("README.md")
		.assert()
		.success()
		.stdout(">>> import random\n>>> 1 + 1\n2\n<BLANKLINE>\n");

	Ok(())
}

#[test]
fn corpus_reports_stats_as_json() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("README.md"), CORPUS_DOCUMENT)?;

	let output = common::snatch_cmd()
		.arg("corpus")
		.arg("--path")
		.arg(tmp.path())
		.arg("--input")
		.arg("README.md")
		.arg("--format")
		.arg("json")
		.output()?;
	assert!(output.status.success());

	let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
	assert_eq!(json["stats"]["blocks"], 1);
	assert_eq!(json["stats"]["suppressed"], 1);
	assert_eq!(json["stats"]["placeholders"], 1);
	assert_eq!(
		json["corpus"],
		">>> import random\n>>> 1 + 1\n2\n<BLANKLINE>\n"
	);

	Ok(())
}

#[test]
fn corpus_reads_deny_entries_from_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("README.md"), CORPUS_DOCUMENT)?;
	std::fs::write(
		tmp.path().join("snatch.toml"),
		"[deny]\nstatements = [\"1 + 1\"]\nextend_defaults = false\n",
	)?;

	common::snatch_cmd()
		.arg("corpus")
		.arg("--path")
		.arg(tmp.path())
		.arg("--input")
		.arg("README.md")
		.assert()
		.success()
		.stdout(">>> import random\n>>> random.randint(1, 10)\n7\n");

	Ok(())
}

#[test]
fn corpus_rejects_invalid_deny_pattern() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("README.md"), CORPUS_DOCUMENT)?;
	std::fs::write(tmp.path().join("snatch.toml"), "[deny]\npatterns = [\"(\"]\n")?;

	common::snatch_cmd()
		.arg("corpus")
		.arg("--path")
		.arg(tmp.path())
		.arg("--input")
		.arg("README.md")
		.assert()
		.code(2)
		.stderr(predicates::str::contains("snatch::invalid_deny_pattern"));

	Ok(())
}

#[test]
fn corpus_writes_output_file() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("README.md"), CORPUS_DOCUMENT)?;

	common::snatch_cmd()
		.arg("corpus")
		.arg("--path")
		.arg(tmp.path())
		.arg("--input")
		.arg("README.md")
		.arg("--output")
		.arg("test.txt")
		.assert()
		.success();

	let saved = std::fs::read_to_string(tmp.path().join("test.txt"))?;
	assert_eq!(saved, ">>> import random\n>>> 1 + 1\n2\n<BLANKLINE>\n");

	Ok(())
}
