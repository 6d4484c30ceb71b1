//! Reading the dataset from a file or over HTTP.

use anyhow::Context;
use log::info;

/// Fetch the dataset CSV text from a path or an http(s) URL.
pub async fn read_source(source: &str) -> anyhow::Result<String> {
    if is_remote(source) {
        info!("Fetching dataset from {}", source);
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()?;
        let response = client.get(source).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("Bad response for {}: {}", source, response.status());
        }
        return Ok(response.text().await?);
    }

    info!("Reading dataset from {}", source);
    std::fs::read_to_string(source).with_context(|| format!("Failed to read dataset {}", source))
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}
