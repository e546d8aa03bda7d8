pub mod error;
pub mod pagination;
pub mod snippet;
pub mod tracing;
pub mod types;

pub use error::PaginationError;
pub use pagination::{DEFAULT_PAGE_SIZE, PageEntry, pages_count, paginate};
pub use snippet::{SnippetConfig, SnippetExtractor};
pub use types::Document;
