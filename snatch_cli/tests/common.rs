use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn snatch_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("snatch"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("SNATCH_LOG");
	cmd
}

pub const TRANSCRIPT_DOCUMENT: &str = "# Title\n\n```\n>>> x = 1\n>>> print(x)\n1\n```\n";

pub const CLEANED_DOCUMENT: &str = "# Title\n\n```python\nx = 1\nprint(x)\n```\n";
