use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::value::MapAccessDeserializer;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::id::RecordId;
use crate::status::Status;

/// The caller-owned fields of a student record.
///
/// This is what clients send on create and update. Every field is optional
/// on the wire; missing fields take their default. Store-owned keys (`id`,
/// `enrollment_date`, `created_at`, `updated_at`) are accepted in the body
/// and ignored. Only a JSON object is accepted; arrays and scalars are
/// rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RecordDraft {
    pub username: String,
    pub name: String,
    pub age: i32,
    pub grade: String,
    pub background: String,
    pub status: Status,
}

/// Field-level decoding for [`RecordDraft`]. Reached only through
/// [`DraftVisitor::visit_map`], so the positional form serde derives for
/// structs is never accepted.
#[derive(Default, Deserialize)]
#[serde(default)]
struct DraftFields {
    username: String,
    name: String,
    age: i32,
    grade: String,
    background: String,
    status: Status,
}

struct DraftVisitor;

impl<'de> Visitor<'de> for DraftVisitor {
    type Value = RecordDraft;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a record object")
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let fields = DraftFields::deserialize(MapAccessDeserializer::new(map))?;
        Ok(RecordDraft {
            username: fields.username,
            name: fields.name,
            age: fields.age,
            grade: fields.grade,
            background: fields.background,
            status: fields.status,
        })
    }
}

impl<'de> Deserialize<'de> for RecordDraft {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DraftVisitor)
    }
}

impl RecordDraft {
    /// Start a draft with a username and full name; everything else defaulted.
    pub fn new(username: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    pub fn with_grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = grade.into();
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }
}

/// A stored student record.
///
/// `id`, `enrollment_date` and `created_at` are fixed when the store
/// creates the record. `updated_at` moves on every mutation and is never
/// earlier than `created_at`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub username: String,
    pub name: String,
    pub age: i32,
    pub grade: String,
    pub background: String,
    pub enrollment_date: DateTime<Utc>,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record {
    /// Materialize a new record from a draft. All three timestamps are set
    /// to `now`.
    pub fn from_draft(id: RecordId, draft: RecordDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            username: draft.username,
            name: draft.name,
            age: draft.age,
            grade: draft.grade,
            background: draft.background,
            enrollment_date: now,
            status: draft.status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the caller-owned fields from `draft` and stamp `updated_at`.
    ///
    /// Identity fields are left untouched. `updated_at` is clamped so it
    /// never falls behind `created_at`.
    pub fn apply(&mut self, draft: RecordDraft, now: DateTime<Utc>) {
        self.username = draft.username;
        self.name = draft.name;
        self.age = draft.age;
        self.grade = draft.grade;
        self.background = draft.background;
        self.status = draft.status;
        self.updated_at = now.max(self.created_at);
    }

    /// The caller-owned portion of this record.
    pub fn to_draft(&self) -> RecordDraft {
        RecordDraft {
            username: self.username.clone(),
            name: self.name.clone(),
            age: self.age,
            grade: self.grade.clone(),
            background: self.background.clone(),
            status: self.status,
        }
    }
}
