mod common;

use snatch_core::AnyEmptyResult;

#[test]
fn localize_translates_headings() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(
		tmp.path().join("README.md"),
		"# Text Processing\n\n## Text Processing\n\n# Bonus Scene\n",
	)?;

	common::snatch_cmd()
		.arg("localize")
		.arg("--path")
		.arg(tmp.path())
		.arg("--input")
		.arg("README.md")
		.assert()
		.success()
		.stdout("# 文本处理\n\n## Text Processing\n\n# 彩蛋\n");

	Ok(())
}

#[test]
fn localize_replaces_summary_and_saves() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("README.md"), "Hello readers.\n\n# Bonus Scene\n")?;
	std::fs::write(tmp.path().join("summary.md"), "Hello readers.")?;
	std::fs::write(tmp.path().join("summary-zh.md"), "读者你好。")?;
	std::fs::write(
		tmp.path().join("snatch.toml"),
		"[localize]\npairs = [[\"Bonus Scene\", \"彩蛋时间\"]]\n",
	)?;

	common::snatch_cmd()
		.arg("localize")
		.arg("--path")
		.arg(tmp.path())
		.arg("--input")
		.arg("README.md")
		.arg("--summary-from")
		.arg("summary.md")
		.arg("--summary-to")
		.arg("summary-zh.md")
		.arg("--output")
		.arg("README-zh-cn.md")
		.assert()
		.success();

	let saved = std::fs::read_to_string(tmp.path().join("README-zh-cn.md"))?;
	assert_eq!(saved, "读者你好。\n\n# 彩蛋时间\n");

	Ok(())
}

#[test]
fn localize_requires_both_summary_files() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::snatch_cmd()
		.arg("localize")
		.arg("--path")
		.arg(tmp.path())
		.arg("--input")
		.arg("README.md")
		.arg("--summary-from")
		.arg("summary.md")
		.assert()
		.failure();

	Ok(())
}
