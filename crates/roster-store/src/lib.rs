//! In-memory record storage for the Roster service.
//!
//! This crate holds the authoritative set of student records and exposes
//! the five CRUD primitives the HTTP layer is built on.
//!
//! # Storage Backends
//!
//! All backends implement the [`RecordStore`] trait:
//!
//! - [`InMemoryRecordStore`] -- `HashMap` behind a single `Mutex`
//!
//! # Design Rules
//!
//! 1. The store assigns identifiers and timestamps; callers only supply drafts.
//! 2. Identifiers are unique among live records and never zero.
//! 3. One exclusive lock covers every operation, reads included.
//! 4. Records leave the store as clones; nothing outside holds a reference in.
//! 5. The only ordinary failure is a missing identifier (`NotFound`).

pub mod config;
pub mod error;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryRecordStore;
pub use traits::RecordStore;
