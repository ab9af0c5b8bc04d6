use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, redirect};
use tracing::{debug, warn};
use url::Url;

use crate::error::{FetchError, ResolveError, Result};
use crate::extract;
use crate::metadata::PageMetadata;

/// Many sites block or serve stripped-down pages to unidentified clients, so
/// every request goes out with a desktop-browser identity.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Resolves a URL into [`PageMetadata`].
///
/// Each call is an independent single fetch (plus bounded redirects); there
/// is no cache and no state shared between calls beyond the connection pool.
pub struct Resolver {
    client: Client,
    max_redirects: usize,
    timeout: Duration,
}

impl Resolver {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// `timeout` bounds the whole resolution (every redirect hop plus the
    /// body read), not each individual request.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .default_headers(navigation_headers())
            // Redirects are followed by hand so the hop count can be bounded
            // and relative Location values resolved against the right URL.
            .redirect(redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            timeout,
        }
    }

    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    /// Resolve `raw_url` into display metadata.
    ///
    /// Only input-tier problems (empty input, unparseable URL) surface as
    /// `Err`. Once the URL validates, every fetch-side failure is absorbed
    /// into hostname-derived fallback metadata, so callers always get
    /// something to display.
    pub async fn resolve(&self, raw_url: &str) -> Result<PageMetadata> {
        let start_url = normalize_url(raw_url)?;

        let outcome = tokio::time::timeout(self.timeout, self.fetch_and_extract(start_url.clone()))
            .await
            .unwrap_or(Err(FetchError::Timeout));

        match outcome {
            Ok(metadata) => Ok(metadata),
            Err(err) => {
                warn!("Resolution of {} failed ({}), using fallback", start_url, err);
                Ok(PageMetadata::fallback_for(&start_url))
            }
        }
    }

    async fn fetch_and_extract(
        &self,
        start_url: Url,
    ) -> std::result::Result<PageMetadata, FetchError> {
        let mut current_url = start_url;
        let mut redirects = 0usize;

        loop {
            debug!("Fetching {}", current_url);
            let response = self.client.get(current_url.clone()).send().await?;
            let status = response.status();

            if status.is_redirection()
                && let Some(location) = response
                    .headers()
                    .get(header::LOCATION)
                    .and_then(|value| value.to_str().ok())
            {
                if redirects >= self.max_redirects {
                    return Err(FetchError::TooManyRedirects);
                }
                // Location may be relative; resolve it against the URL that
                // produced the redirect.
                current_url = current_url
                    .join(location)
                    .map_err(|_| FetchError::BadLocation(location.to_string()))?;
                redirects += 1;
                debug!("Redirect {} -> {}", status.as_u16(), current_url);
                continue;
            }

            // A 3xx without a usable Location falls through here too.
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            let body = response.text().await?;
            debug!("Fetched {} bytes from {}", body.len(), current_url);
            return Ok(extract::page_metadata(&body, &current_url));
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize raw user input into an absolute URL: trim, default the scheme
/// to https, then parse. Runs before any network activity.
pub fn normalize_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ResolveError::MissingUrl);
    }

    let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    Url::parse(&candidate).map_err(|err| ResolveError::InvalidUrl(err.to_string()))
}

fn navigation_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8",
        ),
    );
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static("en-US,en;q=0.9"),
    );
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert("sec-fetch-dest", HeaderValue::from_static("document"));
    headers.insert("sec-fetch-mode", HeaderValue::from_static("navigate"));
    headers.insert("sec-fetch-site", HeaderValue::from_static("none"));
    headers.insert("sec-fetch-user", HeaderValue::from_static("?1"));
    headers.insert("upgrade-insecure-requests", HeaderValue::from_static("1"));
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url_with_scheme() {
        let url = normalize_url("https://example.com/page").unwrap();
        assert_eq!(url.as_str(), "https://example.com/page");
    }

    #[test]
    fn test_normalize_url_keeps_http() {
        let url = normalize_url("http://example.com").unwrap();
        assert_eq!(url.scheme(), "http");
    }

    #[test]
    fn test_normalize_url_without_scheme_defaults_to_https() {
        let url = normalize_url("example.com").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn test_normalize_url_empty_is_missing() {
        assert!(matches!(normalize_url(""), Err(ResolveError::MissingUrl)));
        assert!(matches!(normalize_url("   "), Err(ResolveError::MissingUrl)));
    }

    #[test]
    fn test_normalize_url_malformed_is_invalid() {
        assert!(matches!(
            normalize_url("http://exa mple.com"),
            Err(ResolveError::InvalidUrl(_))
        ));
    }
}
