use anyhow::Context;
use reqwest::Url;

pub const VALID_PROTOCOLS: [&str; 2] = ["http", "https"];

pub(crate) trait ResponseExt: Sized {
    /// Like [`reqwest::Response::json()`], but handles non-JSON bodies and
    /// error statuses gracefully.
    ///
    /// The store does not reliably label its responses, so the content type is
    /// not checked. A non-success status is an error carrying the response
    /// text as context.
    async fn json_or_error<T: serde::de::DeserializeOwned>(self) -> anyhow::Result<T>;
}

fn err_status_desc(status: reqwest::StatusCode) -> Option<&'static str> {
    if status.is_success() {
        None
    } else if status.is_client_error() {
        Some("HTTP status client error")
    } else if status.is_server_error() {
        Some("HTTP status server error")
    } else {
        Some("unexpected HTTP status code")
    }
}

impl ResponseExt for reqwest::Response {
    async fn json_or_error<T: serde::de::DeserializeOwned>(self) -> anyhow::Result<T> {
        let status = self.status();
        let url = self.url().to_string();
        if let Some(status_desc) = err_status_desc(status) {
            let status_err = anyhow::anyhow!("{status_desc} ({status}) from url ({url})");
            return Err(match self.text().await {
                Ok(text) => status_err.context(text),
                Err(err) => anyhow::Error::from(err)
                    .context(format!("{status_desc} ({status})"))
                    .context("failed to get response text"),
            });
        }
        let text = self.text().await.context("failed to get response text")?;
        tracing::trace!(%url, body = %text, "response body");
        serde_json::from_str(&text).with_context(|| format!("malformed json payload from url ({url})"))
    }
}

/// Checks that `url` is an absolute `http` or `https` URL.
pub fn parse_store_url(url: &str) -> anyhow::Result<Url> {
    let parsed = Url::parse(url).with_context(|| format!("Invalid url: {url}"))?;
    if !VALID_PROTOCOLS.contains(&parsed.scheme()) {
        anyhow::bail!("Invalid protocol: {}", parsed.scheme());
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_urls_must_be_http() {
        assert!(parse_store_url("https://script.example.com/macros/s/abc/exec").is_ok());
        assert!(parse_store_url("http://127.0.0.1:8080/exec").is_ok());
        assert!(parse_store_url("ftp://example.com/exec").is_err());
        assert!(parse_store_url("example.com/exec").is_err());
    }
}
