//! Error types for enquete-nav

use enquete_router::{PatternError, RenderError};
use thiserror::Error;

/// Result type alias for navigation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for route table construction and navigation
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed path pattern in the table definition
    #[error("invalid route pattern: {0}")]
    InvalidPattern(#[from] PatternError),

    /// Two entries share a route name
    #[error("duplicate route name: {0:?}")]
    DuplicateName(String),

    /// No catch-all entry, so resolution would not be total
    #[error("route table has no catch-all fallback entry")]
    MissingFallback,

    /// A catch-all entry declared before the end shadows later entries
    #[error("catch-all entry {0:?} must be declared last")]
    FallbackNotLast(String),

    /// Redirect chain that never reaches a view entry
    #[error("redirect cycle starting at {0:?}")]
    RedirectCycle(String),

    /// Navigation by a name the table does not contain
    #[error("unknown route name: {0:?}")]
    UnknownRoute(String),

    /// Reverse routing failed for a known route
    #[error("cannot build path for route {name:?}: {source}")]
    Render {
        name: String,
        #[source]
        source: RenderError,
    },
}
