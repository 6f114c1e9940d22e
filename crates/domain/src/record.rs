//! Record — a single student or tutor registration.

mod entry;
mod input;
mod patch;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::RecordId;
use crate::time::{self, Timestamp};

pub use entry::Entry;
pub use input::{NewRecord, NewRecordBuilder};
pub use patch::RecordPatch;

/// Status assigned to every freshly created record.
pub const INITIAL_STATUS: &str = "active";
/// Default for `preferred_mode` when the caller omits it.
pub const DEFAULT_PREFERRED_MODE: &str = "online";
/// Default for `language` when the caller omits it.
pub const DEFAULT_LANGUAGE: &str = "English";
/// Source label attached to records created over HTTP.
pub const WEBSITE_SOURCE: &str = "website";

/// Discriminates the two collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Student,
    Tutor,
}

impl RecordKind {
    /// Every kind, in a stable order.
    pub const ALL: [Self; 2] = [Self::Student, Self::Tutor];

    /// Lowercase wire name (`student`, `tutor`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Tutor => "tutor",
        }
    }

    /// Capitalised name for user-facing messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Tutor => "Tutor",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request metadata captured by the server when a record is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    pub ip_address: String,
    pub user_agent: String,
    pub source: String,
}

impl Provenance {
    /// Provenance for a record registered through the public website.
    #[must_use]
    pub fn website(ip_address: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            ip_address: ip_address.into(),
            user_agent: user_agent.into(),
            source: WEBSITE_SOURCE.to_string(),
        }
    }
}

/// A persisted student or tutor registration.
///
/// Keys this type does not know about are kept in `extra` so that rewriting a
/// collection never drops data written by another version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub kind: RecordKind,

    pub name: String,
    pub mobile_no: String,
    pub email: String,
    pub course: String,
    pub subject: String,

    #[serde(default)]
    pub qualification: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub preferred_mode: Option<String>,
    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,

    #[serde(default = "initial_status")]
    pub status: String,
    #[serde(deserialize_with = "time::lenient::deserialize")]
    pub joined_date: Timestamp,
    #[serde(deserialize_with = "time::lenient::deserialize")]
    pub created_at: Timestamp,
    #[serde(default, deserialize_with = "time::lenient::deserialize_option")]
    pub updated_at: Option<Timestamp>,

    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default = "website_source")]
    pub source: String,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn initial_status() -> String {
    INITIAL_STATUS.to_string()
}

fn website_source() -> String {
    WEBSITE_SOURCE.to_string()
}

impl Record {
    /// Build a new record of `kind` from validated input, stamped with the
    /// current time and a fresh id.
    #[must_use]
    pub fn create(kind: RecordKind, input: NewRecord, provenance: Provenance) -> Self {
        Self::create_at(kind, input, provenance, time::now())
    }

    /// Same as [`Record::create`] with an explicit clock value.
    #[must_use]
    pub fn create_at(
        kind: RecordKind,
        input: NewRecord,
        provenance: Provenance,
        now: Timestamp,
    ) -> Self {
        Self {
            id: RecordId::new(),
            kind,
            name: input.name,
            mobile_no: input.mobile_no,
            email: input.email,
            course: input.course,
            subject: input.subject,
            qualification: input.qualification,
            experience: input.experience,
            preferred_mode: input.preferred_mode,
            language: input.language,
            country: input.country,
            city: input.city,
            timezone: input.timezone,
            status: INITIAL_STATUS.to_string(),
            joined_date: now,
            created_at: now,
            updated_at: None,
            ip_address: Some(provenance.ip_address),
            user_agent: Some(provenance.user_agent),
            source: provenance.source,
            extra: serde_json::Map::new(),
        }
    }

    /// Apply the fields present in `patch` and stamp `updated_at`.
    ///
    /// Nothing is modified when the patch is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the patch clears or blanks a
    /// non-nullable field.
    pub fn apply(&mut self, patch: RecordPatch, now: Timestamp) -> Result<(), ValidationError> {
        patch.validate()?;

        let RecordPatch {
            name,
            mobile_no,
            course,
            subject,
            qualification,
            experience,
            preferred_mode,
            language,
            country,
            city,
            timezone,
            status,
        } = patch;

        set_required(&mut self.name, name);
        set_required(&mut self.mobile_no, mobile_no);
        set_required(&mut self.course, course);
        set_required(&mut self.subject, subject);
        set_required(&mut self.status, status);

        set_nullable(&mut self.qualification, qualification);
        set_nullable(&mut self.experience, experience);
        set_nullable(&mut self.preferred_mode, preferred_mode);
        set_nullable(&mut self.language, language);
        set_nullable(&mut self.country, country);
        set_nullable(&mut self.city, city);
        set_nullable(&mut self.timezone, timezone);

        self.updated_at = Some(now);
        Ok(())
    }
}

// `validate` has already rejected `Some(None)` for these.
fn set_required(slot: &mut String, value: Option<Option<String>>) {
    if let Some(Some(value)) = value {
        *slot = value;
    }
}

fn set_nullable(slot: &mut Option<String>, value: Option<Option<String>>) {
    if let Some(value) = value {
        *slot = value;
    }
}
