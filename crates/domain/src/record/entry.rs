//! One element of a stored collection.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::time::{self, Timestamp};

use super::{Record, RecordPatch};

/// A collection element as found on disk.
///
/// Elements that fit the [`Record`] schema are typed. Anything else (a
/// cleared required field, a missing timestamp, a number where text is
/// expected) is kept as raw JSON and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Record(Box<Record>),
    Raw(Value),
}

impl Entry {
    /// The element's `id`, when it has a textual one.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Record(record) => Some(record.id.as_str()),
            Self::Raw(value) => value.get("id").and_then(Value::as_str),
        }
    }

    /// The typed record, if this element fits the schema.
    #[must_use]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record.as_ref()),
            Self::Raw(_) => None,
        }
    }

    /// Apply `patch` and stamp `updated_at`.
    ///
    /// Raw elements get the supplied keys written straight into their object.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the patch clears or blanks a
    /// non-nullable field. Nothing is modified in that case.
    pub fn apply(&mut self, patch: RecordPatch, now: Timestamp) -> Result<(), ValidationError> {
        match self {
            Self::Record(record) => record.apply(patch, now),
            Self::Raw(value) => {
                patch.validate()?;
                if let Some(object) = value.as_object_mut() {
                    write_fields(object, patch);
                    object.insert("updated_at".to_string(), Value::String(time::format(now)));
                }
                Ok(())
            }
        }
    }
}

impl From<Record> for Entry {
    fn from(record: Record) -> Self {
        Self::Record(Box::new(record))
    }
}

fn write_fields(object: &mut Map<String, Value>, patch: RecordPatch) {
    for (key, value) in patch.into_fields() {
        if let Some(value) = value {
            object.insert(key.to_string(), value.map_or(Value::Null, Value::String));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{NewRecord, Provenance, RecordKind};
    use serde_json::json;

    fn drifted() -> Value {
        json!({
            "id": "old-1",
            "type": "student",
            "name": null,
            "mobile_no": "555",
            "email": "old@example.com",
            "course": "BA",
            "subject": "History",
            "status": "active",
            "joined_date": "2023-01-01T00:00:00",
            "created_at": "2023-01-01T00:00:00",
            "updated_at": null
        })
    }

    #[test]
    fn should_type_elements_that_fit_the_schema() {
        let input = NewRecord::builder()
            .name("Asha")
            .mobile_no("1")
            .email("asha@example.com")
            .course("BA")
            .subject("Art")
            .build()
            .unwrap();
        let record = Record::create(RecordKind::Tutor, input, Provenance::website("ip", "ua"));
        let value = serde_json::to_value(&record).unwrap();

        let entry: Entry = serde_json::from_value(value).unwrap();

        assert_eq!(entry, Entry::from(record));
    }

    #[test]
    fn should_keep_out_of_shape_elements_verbatim() {
        let entry: Entry = serde_json::from_value(drifted()).unwrap();

        assert!(entry.as_record().is_none());
        assert_eq!(entry.id(), Some("old-1"));
        assert_eq!(serde_json::to_value(&entry).unwrap(), drifted());
    }

    #[test]
    fn should_accept_non_object_elements() {
        let entry: Entry = serde_json::from_str("42").unwrap();

        assert_eq!(entry, Entry::Raw(json!(42)));
        assert_eq!(entry.id(), None);
    }

    #[test]
    fn should_patch_raw_element_in_place() {
        let mut entry = Entry::Raw(drifted());
        let patch: RecordPatch =
            serde_json::from_str(r#"{"name":"Restored","city":null}"#).unwrap();

        entry.apply(patch, time::now()).unwrap();

        let Entry::Raw(value) = entry else {
            panic!("raw element should stay raw");
        };
        assert_eq!(value["name"], "Restored");
        assert!(value["city"].is_null());
        assert_eq!(value["mobile_no"], "555");
        assert!(value["updated_at"].is_string());
    }

    #[test]
    fn should_reject_invalid_patch_on_raw_element_without_mutating() {
        let mut entry = Entry::Raw(drifted());
        let patch: RecordPatch = serde_json::from_str(r#"{"status":null}"#).unwrap();

        let result = entry.apply(patch, time::now());

        assert_eq!(result, Err(ValidationError::NullField("status")));
        assert_eq!(entry, Entry::Raw(drifted()));
    }
}
