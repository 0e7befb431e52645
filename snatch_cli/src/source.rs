use std::path::Path;
use std::time::Duration;

use snatch_core::Language;
use snatch_core::SnatchError;
use snatch_core::SnatchResult;
use snatch_core::SourceConfig;
use snatch_core::document_url;

/// Read the document from `input` when given, otherwise download the edition
/// for `language` from the configured source.
pub fn acquire_document(
	input: Option<&Path>,
	source: &SourceConfig,
	language: Language,
) -> SnatchResult<String> {
	if let Some(path) = input {
		tracing::debug!(path = %path.display(), "reading document");
		return Ok(std::fs::read_to_string(path)?);
	}

	let url = document_url(&source.base_url, source.file_name(language));
	fetch_document(&url, Duration::from_secs(source.timeout_secs))
}

/// Download `url` and return its body as text. Non-success statuses are
/// errors.
pub fn fetch_document(url: &str, timeout: Duration) -> SnatchResult<String> {
	tracing::info!(url, "requesting document");
	let runtime = tokio::runtime::Runtime::new()?;

	runtime.block_on(async {
		let client = reqwest::Client::builder()
			.timeout(timeout)
			.build()
			.map_err(|e| fetch_error(url, &e))?;

		let response = client
			.get(url)
			.send()
			.await
			.and_then(reqwest::Response::error_for_status)
			.map_err(|e| fetch_error(url, &e))?;

		response.text().await.map_err(|e| fetch_error(url, &e))
	})
}

fn fetch_error(url: &str, error: &reqwest::Error) -> SnatchError {
	SnatchError::Fetch {
		url: url.to_string(),
		reason: error.to_string(),
	}
}

/// Write `content` to `path`, creating parent directories as needed.
pub fn save_document(path: &Path, content: &str) -> SnatchResult<()> {
	if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
		std::fs::create_dir_all(parent)?;
	}
	std::fs::write(path, content)?;
	tracing::debug!(path = %path.display(), bytes = content.len(), "saved document");
	Ok(())
}
