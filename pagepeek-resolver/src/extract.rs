//! Pattern-based metadata extraction.
//!
//! Each field has an ordered list of patterns tried in sequence; the first
//! one that matches wins. The patterns are deliberately shallow (no real HTML
//! parsing): they only need to cope with the head sections of real-world
//! pages, including both attribute orders for meta/link tags.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::metadata::PageMetadata;

static TITLE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)<title[^>]*>([^<]+)</title>").unwrap(),
        Regex::new(r#"(?i)<meta[^>]*property=["']og:title["'][^>]*content=["']([^"']+)["']"#)
            .unwrap(),
        Regex::new(r"(?i)<h1[^>]*>([^<]+)</h1>").unwrap(),
    ]
});

static DESCRIPTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r#"(?i)<meta[^>]*name=["']description["'][^>]*content=["']([^"']+)["']"#)
            .unwrap(),
        Regex::new(r#"(?i)<meta[^>]*content=["']([^"']+)["'][^>]*name=["']description["']"#)
            .unwrap(),
        Regex::new(r#"(?i)<meta[^>]*property=["']og:description["'][^>]*content=["']([^"']+)["']"#)
            .unwrap(),
        Regex::new(r#"(?i)<meta[^>]*name=["']twitter:description["'][^>]*content=["']([^"']+)["']"#)
            .unwrap(),
    ]
});

static FAVICON_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r#"(?i)<link[^>]*rel=["'](?:icon|shortcut icon)["'][^>]*href=["']([^"']+)["']"#)
            .unwrap(),
        Regex::new(r#"(?i)<link[^>]*href=["']([^"']+)["'][^>]*rel=["'](?:icon|shortcut icon)["']"#)
            .unwrap(),
        Regex::new(r#"(?i)<link[^>]*rel=["']apple-touch-icon["'][^>]*href=["']([^"']+)["']"#)
            .unwrap(),
        Regex::new(
            r#"(?i)<link[^>]*rel=["']apple-touch-icon-precomposed["'][^>]*href=["']([^"']+)["']"#,
        )
        .unwrap(),
    ]
});

// Entity sequences collapse to a single space, not the decoded character.
// Tests pin this exact behavior.
static ENTITY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&[^;]+;").unwrap());

/// Build the final metadata for a successfully fetched page.
///
/// `final_url` is the URL that produced the body (after redirects); relative
/// favicon paths are resolved against its origin.
pub fn page_metadata(html: &str, final_url: &Url) -> PageMetadata {
    let origin = final_url.origin().ascii_serialization();

    let favicon = extract_favicon(html).unwrap_or_else(|| "/favicon.ico".to_string());
    let favicon = if favicon.is_empty() {
        format!("{origin}/favicon.ico")
    } else {
        absolutize_favicon(&favicon, &origin)
    };

    PageMetadata {
        title: extract_title(html).unwrap_or_else(|| "Untitled Project".to_string()),
        description: extract_description(html).unwrap_or_else(|| "A web project".to_string()),
        favicon,
    }
}

/// `<title>` text, then `og:title`, then the first `<h1>`.
pub fn extract_title(html: &str) -> Option<String> {
    first_capture(&TITLE_PATTERNS, html).map(|raw| collapse_entities(&raw))
}

/// `name="description"` (either attribute order), then `og:description`,
/// then `twitter:description`.
pub fn extract_description(html: &str) -> Option<String> {
    first_capture(&DESCRIPTION_PATTERNS, html).map(|raw| collapse_entities(&raw))
}

/// Icon link href: `icon`/`shortcut icon` (either attribute order), then the
/// apple-touch variants. Returns the raw href, possibly relative.
pub fn extract_favicon(html: &str) -> Option<String> {
    first_capture(&FAVICON_PATTERNS, html)
}

fn first_capture(patterns: &[Regex], html: &str) -> Option<String> {
    patterns
        .iter()
        .find_map(|pattern| pattern.captures(html).map(|caps| caps[1].to_string()))
}

/// Trim, replace every `&...;` token with a single space, trim again.
pub fn collapse_entities(raw: &str) -> String {
    ENTITY.replace_all(raw.trim(), " ").trim().to_string()
}

/// Prefix a non-absolute favicon href with the page origin, inserting a `/`
/// separator when the href doesn't carry one.
pub fn absolutize_favicon(href: &str, origin: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else if href.starts_with('/') {
        format!("{origin}{href}")
    } else {
        format!("{origin}/{href}")
    }
}
