use roster_types::RecordId;

/// Errors from record store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No live record has this identifier.
    #[error("record not found: {0}")]
    NotFound(RecordId),

    /// Every identifier in the configured id space is taken.
    #[error("record id space exhausted: all {capacity} ids are in use")]
    IdSpaceExhausted { capacity: u64 },

    /// A thread panicked while holding the store lock.
    #[error("store lock poisoned: {0}")]
    LockPoisoned(String),
}

impl StoreError {
    /// Returns `true` for [`StoreError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
