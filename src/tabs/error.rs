use thiserror::Error;

use super::types::TabId;

/// Rejected tab operations
///
/// The store is left untouched whenever one of these is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabError {
    #[error("no tab with id {0}")]
    NotFound(TabId),

    #[error("cannot close the last remaining tab")]
    LastTab,
}

/// Result type for tab controller operations
pub type TabResult<T> = Result<T, TabError>;
