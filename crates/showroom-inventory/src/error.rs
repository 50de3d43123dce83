//! Error types for the record browser.

/// Errors that can occur during browser operations.
///
/// Covers the three failure classes the browser surfaces to the user:
/// database access, input validation, and selection state. All of them are
/// reported through a dialog at the dispatch boundary; none abort the
/// process.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// A database statement failed.
    #[error("inventory database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A pooled connection could not be checked out.
    #[error("database connection unavailable: {0}")]
    Pool(#[from] r2d2::Error),

    /// A required input field was empty.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// The price field did not parse as a number.
    #[error("price is not a valid number: {0:?}")]
    InvalidPrice(String),

    /// No manufacturer row matches the entered name.
    #[error("manufacturer not found: {0:?}")]
    ManufacturerNotFound(String),

    /// Delete was requested with no row selected.
    #[error("no vehicle is selected")]
    NothingSelected,
}

impl InventoryError {
    /// Whether this error should be presented as a warning rather than an
    /// error dialog. Only the missing-selection case is a warning; it means
    /// "nothing to do", not "something failed".
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::NothingSelected)
    }
}
