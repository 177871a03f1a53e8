//! Domain types for the Roster record service.
//!
//! Every other Roster crate depends on `roster-types`. The types here carry
//! no locking or I/O; they describe what a student record is and which of
//! its fields belong to the caller versus the store.
//!
//! # Key Types
//!
//! - [`RecordId`] — Store-assigned, non-zero numeric identifier
//! - [`Status`] — Enrollment status (`new`, `returning`, `suspended`, `graduated`)
//! - [`Record`] — A stored student record, including store-owned timestamps
//! - [`RecordDraft`] — The caller-owned subset of a record
//! - [`Clock`] — Time source used by the store ([`SystemClock`], [`ManualClock`])

pub mod clock;
pub mod error;
pub mod id;
pub mod record;
pub mod status;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::TypeError;
pub use id::RecordId;
pub use record::{Record, RecordDraft};
pub use status::Status;
