use serde::{Deserialize, Serialize};
use url::Url;

/// Display metadata for a single page. Every field is guaranteed non-empty:
/// missing values are filled with synthesized defaults before this struct is
/// handed to a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub favicon: String,
}

impl PageMetadata {
    /// Synthesize metadata from nothing but the target hostname. Used when
    /// the fetch itself failed and there is no HTML to extract from.
    ///
    /// The visible text strips a leading `www.` from the hostname, but the
    /// favicon keeps the original origin so the icon request still hits the
    /// host the user typed.
    pub fn fallback_for(url: &Url) -> Self {
        let host = url.host_str().unwrap_or("unknown");
        let domain = host.strip_prefix("www.").unwrap_or(host);
        let project_name = capitalize(domain.split('.').next().unwrap_or(domain));

        Self {
            title: format!("{project_name} Project"),
            description: format!("A project hosted at {domain}"),
            favicon: format!("{}/favicon.ico", url.origin().ascii_serialization()),
        }
    }
}

/// Uppercase the first character, leave the rest untouched.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("acme"), "Acme");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("Already"), "Already");
    }

    #[test]
    fn test_fallback_strips_www_from_text_but_not_favicon() {
        let url = Url::parse("https://www.acme.io/page").unwrap();
        let meta = PageMetadata::fallback_for(&url);
        assert_eq!(meta.title, "Acme Project");
        assert_eq!(meta.description, "A project hosted at acme.io");
        assert_eq!(meta.favicon, "https://www.acme.io/favicon.ico");
    }

    #[test]
    fn test_fallback_plain_domain() {
        let url = Url::parse("https://example.com").unwrap();
        let meta = PageMetadata::fallback_for(&url);
        assert_eq!(meta.title, "Example Project");
        assert_eq!(meta.description, "A project hosted at example.com");
        assert_eq!(meta.favicon, "https://example.com/favicon.ico");
    }
}
