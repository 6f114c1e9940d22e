//! Partial update of a record.

use serde::Deserialize;

use crate::error::ValidationError;
use crate::serde_ext::double_option;

/// Fields a caller may change on an existing record.
///
/// Each field is `None` when absent from the request, `Some(None)` when sent
/// as `null`, and `Some(Some(v))` otherwise. Identity, email, timestamps and
/// provenance are not patchable; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecordPatch {
    #[serde(default, deserialize_with = "double_option")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub mobile_no: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub course: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub subject: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub qualification: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub experience: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub preferred_mode: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub language: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub country: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub city: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub timezone: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub status: Option<Option<String>>,
}

impl RecordPatch {
    /// Check that non-nullable fields are neither cleared nor blanked.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NullField`] or [`ValidationError::EmptyField`]
    /// naming the first offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("name", &self.name),
            ("mobile_no", &self.mobile_no),
            ("course", &self.course),
            ("subject", &self.subject),
            ("status", &self.status),
        ] {
            match value {
                Some(None) => return Err(ValidationError::NullField(field)),
                Some(Some(text)) if text.trim().is_empty() => {
                    return Err(ValidationError::EmptyField(field));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Every field paired with its wire name, in declaration order.
    pub(crate) fn into_fields(self) -> [(&'static str, Option<Option<String>>); 12] {
        [
            ("name", self.name),
            ("mobile_no", self.mobile_no),
            ("course", self.course),
            ("subject", self.subject),
            ("qualification", self.qualification),
            ("experience", self.experience),
            ("preferred_mode", self.preferred_mode),
            ("language", self.language),
            ("country", self.country),
            ("city", self.city),
            ("timezone", self.timezone),
            ("status", self.status),
        ]
    }

    /// `true` when the request carried no recognised field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
