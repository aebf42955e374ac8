use thiserror::Error;

use crate::category::Category;

/// Failures of catalog loading and category selection.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A string key that is not one of the four fixed categories reached
    /// the selection boundary.
    #[error("unknown menu category: {0:?}")]
    UnknownCategory(String),

    /// The catalog document listed a category with no entries.
    #[error("menu category {0} has no entries")]
    EmptySection(Category),

    /// The catalog document is not valid JSON for the expected shape.
    #[error("invalid menu data: {0}")]
    InvalidData(#[from] serde_json::Error),
}
