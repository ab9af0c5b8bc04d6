use thiserror::Error;

/// Input-tier errors: the only failures a caller of
/// [`Resolver::resolve`](crate::Resolver::resolve) can observe. Anything that
/// goes wrong after the URL has been validated is converted into fallback
/// metadata instead of an error.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("URL is required")]
    MissingUrl,

    #[error("Invalid URL format: {0}")]
    InvalidUrl(String),
}

/// Resolution-tier errors. These never escape the resolver; they select the
/// fallback path.
#[derive(Error, Debug)]
pub(crate) enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Too many redirects")]
    TooManyRedirects,

    #[error("Unresolvable redirect location: {0}")]
    BadLocation(String),

    #[error("Timed out")]
    Timeout,
}

pub type Result<T> = std::result::Result<T, ResolveError>;
