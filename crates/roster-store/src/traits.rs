use roster_types::{Record, RecordDraft, RecordId};

use crate::error::StoreResult;

/// Authoritative storage for student records.
///
/// All implementations must satisfy these invariants:
/// - Identifiers are assigned by the store, are non-zero, and are unique
///   among live records.
/// - `created_at <= updated_at` for every stored record.
/// - Every operation is atomic with respect to every other: no caller
///   observes a half-applied create, update, or delete.
/// - Records are handed out by value; callers never hold references into
///   the store.
pub trait RecordStore: Send + Sync {
    /// Snapshot of every live record.
    ///
    /// Ordering is backend-defined and callers must not rely on it.
    fn list(&self) -> StoreResult<Vec<Record>>;

    /// Fetch a record by identifier.
    ///
    /// Returns `StoreError::NotFound` if no live record has this id.
    fn get(&self, id: RecordId) -> StoreResult<Record>;

    /// Insert a new record built from `draft` and return it.
    ///
    /// The store assigns the identifier and sets `enrollment_date`,
    /// `created_at` and `updated_at` to the same instant.
    fn create(&self, draft: RecordDraft) -> StoreResult<Record>;

    /// Replace the caller-owned fields of an existing record.
    ///
    /// `id`, `enrollment_date` and `created_at` are preserved;
    /// `updated_at` is refreshed. Returns `StoreError::NotFound` if absent.
    fn update(&self, id: RecordId, draft: RecordDraft) -> StoreResult<Record>;

    /// Remove a record. Returns `StoreError::NotFound` if absent.
    fn delete(&self, id: RecordId) -> StoreResult<()>;

    /// Number of live records.
    fn len(&self) -> StoreResult<usize>;

    /// Returns `true` if the store holds no records.
    fn is_empty(&self) -> StoreResult<bool> {
        self.len().map(|n| n == 0)
    }
}
