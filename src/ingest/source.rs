// Dataset sources
//
// A dataset is a UTF-8 CSV resource addressed either by a filesystem path
// or an http(s) URL. Fetching is the only suspending operation in the
// engine.

use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub enum DatasetSource {
    File(PathBuf),
    Url(String),
}

impl DatasetSource {
    /// Interpret a CLI/config string: anything starting with http:// or
    /// https:// is a URL, everything else a file path.
    pub fn from_spec(spec: &str) -> Self {
        if spec.starts_with("http://") || spec.starts_with("https://") {
            DatasetSource::Url(spec.to_string())
        } else {
            DatasetSource::File(PathBuf::from(spec))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            DatasetSource::File(path) => path.display().to_string(),
            DatasetSource::Url(url) => url.clone(),
        }
    }
}

/// Fetch the raw text of a dataset source.
pub async fn fetch_dataset(source: &DatasetSource) -> Result<String> {
    match source {
        DatasetSource::File(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read dataset file: {}", path.display())),
        DatasetSource::Url(url) => {
            let response = reqwest::get(url)
                .await
                .with_context(|| format!("Failed to fetch dataset from {}", url))?
                .error_for_status()
                .with_context(|| format!("Dataset request to {} was rejected", url))?;

            response
                .text()
                .await
                .with_context(|| format!("Failed to read dataset body from {}", url))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_specs_are_recognized() {
        assert!(matches!(
            DatasetSource::from_spec("https://example.com/data.csv"),
            DatasetSource::Url(_)
        ));
        assert!(matches!(
            DatasetSource::from_spec("http://example.com/data.csv"),
            DatasetSource::Url(_)
        ));
    }

    #[test]
    fn test_everything_else_is_a_file_path() {
        assert!(matches!(
            DatasetSource::from_spec("data/responses.csv"),
            DatasetSource::File(_)
        ));
        assert!(matches!(
            DatasetSource::from_spec("/absolute/path.csv"),
            DatasetSource::File(_)
        ));
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let source = DatasetSource::from_spec("/nonexistent/dataset.csv");
        let result = fetch_dataset(&source).await;
        assert!(result.is_err());
    }
}
