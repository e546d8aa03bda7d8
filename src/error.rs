//! Error handling types and utilities.

/// Error returned when pagination input violates its precondition.
///
/// The pagination builder never clamps or repairs malformed input; the caller
/// is expected to validate upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    /// `pages_count` was zero; there is nothing to paginate.
    NoPages,
    /// `current_page` fell outside `[1, pages_count]`.
    OutOfRange {
        current_page: usize,
        pages_count: usize,
    },
}

impl std::fmt::Display for PaginationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPages => write!(f, "pages_count must be at least 1"),
            Self::OutOfRange {
                current_page,
                pages_count,
            } => {
                write!(
                    f,
                    "current_page {} is outside the valid range [1, {}]",
                    current_page, pages_count
                )
            }
        }
    }
}

impl std::error::Error for PaginationError {}
