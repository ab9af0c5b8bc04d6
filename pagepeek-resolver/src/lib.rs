pub mod error;
pub mod extract;
pub mod metadata;
pub mod resolver;

pub use error::ResolveError;
pub use metadata::PageMetadata;
pub use resolver::Resolver;
