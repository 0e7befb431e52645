mod common;

use snatch_core::AnyEmptyResult;
use snatch_core::SnatchConfig;

#[test]
fn can_init() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::snatch_cmd()
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Created"));

	let config_path = tmp.path().join("snatch.toml");
	assert!(config_path.exists());

	let content = std::fs::read_to_string(&config_path)?;
	let config = SnatchConfig::parse(&content)?;
	assert_eq!(config.fence.language, "python");
	assert!(config.deny.extend_defaults);

	Ok(())
}

#[test]
fn init_does_not_overwrite() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let config_path = tmp.path().join("snatch.toml");
	std::fs::write(&config_path, "existing config")?;

	common::snatch_cmd()
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("already exists"));

	assert_eq!(std::fs::read_to_string(&config_path)?, "existing config");

	Ok(())
}

#[test]
fn init_respects_hidden_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::create_dir_all(tmp.path().join(".config"))?;
	std::fs::write(tmp.path().join(".config/snatch.toml"), "")?;

	common::snatch_cmd()
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("already exists"));

	assert!(!tmp.path().join("snatch.toml").exists());

	Ok(())
}
