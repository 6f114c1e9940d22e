//! Caller-supplied fields for a new record.

use crate::email;
use crate::error::ValidationError;

use super::{DEFAULT_LANGUAGE, DEFAULT_PREFERRED_MODE};

/// Validated input for the record factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub name: String,
    pub mobile_no: String,
    pub email: String,
    pub course: String,
    pub subject: String,

    pub qualification: Option<String>,
    pub experience: Option<String>,
    pub preferred_mode: Option<String>,
    pub language: Option<String>,

    pub country: Option<String>,
    pub city: Option<String>,
    pub timezone: Option<String>,
}

impl NewRecord {
    /// Create a builder for constructing a [`NewRecord`].
    #[must_use]
    pub fn builder() -> NewRecordBuilder {
        NewRecordBuilder::default()
    }

    /// Check field invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] for a blank required field and
    /// [`ValidationError::InvalidEmail`] for a malformed address.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("name", &self.name),
            ("mobile_no", &self.mobile_no),
            ("email", &self.email),
            ("course", &self.course),
            ("subject", &self.subject),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::EmptyField(field));
            }
        }
        if !email::is_valid(&self.email) {
            return Err(ValidationError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

/// Step-by-step builder for [`NewRecord`].
///
/// `preferred_mode` and `language` fall back to their defaults only when the
/// setter is never called; passing `None` explicitly stores `null`.
#[derive(Debug, Default)]
pub struct NewRecordBuilder {
    name: Option<String>,
    mobile_no: Option<String>,
    email: Option<String>,
    course: Option<String>,
    subject: Option<String>,
    qualification: Option<String>,
    experience: Option<String>,
    preferred_mode: Option<Option<String>>,
    language: Option<Option<String>>,
    country: Option<String>,
    city: Option<String>,
    timezone: Option<String>,
}

impl NewRecordBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn mobile_no(mut self, mobile_no: impl Into<String>) -> Self {
        self.mobile_no = Some(mobile_no.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn course(mut self, course: impl Into<String>) -> Self {
        self.course = Some(course.into());
        self
    }

    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    #[must_use]
    pub fn qualification(mut self, qualification: Option<String>) -> Self {
        self.qualification = qualification;
        self
    }

    #[must_use]
    pub fn experience(mut self, experience: Option<String>) -> Self {
        self.experience = experience;
        self
    }

    #[must_use]
    pub fn preferred_mode(mut self, preferred_mode: Option<String>) -> Self {
        self.preferred_mode = Some(preferred_mode);
        self
    }

    #[must_use]
    pub fn language(mut self, language: Option<String>) -> Self {
        self.language = Some(language);
        self
    }

    #[must_use]
    pub fn country(mut self, country: Option<String>) -> Self {
        self.country = country;
        self
    }

    #[must_use]
    pub fn city(mut self, city: Option<String>) -> Self {
        self.city = city;
        self
    }

    #[must_use]
    pub fn timezone(mut self, timezone: Option<String>) -> Self {
        self.timezone = timezone;
        self
    }

    /// Consume the builder, apply defaults, validate, and return a [`NewRecord`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for the first required field
    /// that was never set, or any error from [`NewRecord::validate`].
    pub fn build(self) -> Result<NewRecord, ValidationError> {
        let record = NewRecord {
            name: self.name.ok_or(ValidationError::MissingField("name"))?,
            mobile_no: self
                .mobile_no
                .ok_or(ValidationError::MissingField("mobile_no"))?,
            email: self.email.ok_or(ValidationError::MissingField("email"))?,
            course: self.course.ok_or(ValidationError::MissingField("course"))?,
            subject: self
                .subject
                .ok_or(ValidationError::MissingField("subject"))?,
            qualification: self.qualification,
            experience: self.experience,
            preferred_mode: self
                .preferred_mode
                .unwrap_or_else(|| Some(DEFAULT_PREFERRED_MODE.to_string())),
            language: self
                .language
                .unwrap_or_else(|| Some(DEFAULT_LANGUAGE.to_string())),
            country: self.country,
            city: self.city,
            timezone: self.timezone,
        };
        record.validate()?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> NewRecordBuilder {
        NewRecord::builder()
            .name("Meera")
            .mobile_no("9000000001")
            .email("meera@example.org")
            .course("MBA")
            .subject("Finance")
    }

    #[test]
    fn should_apply_defaults_when_mode_and_language_omitted() {
        let record = complete().build().unwrap();
        assert_eq!(record.preferred_mode.as_deref(), Some("online"));
        assert_eq!(record.language.as_deref(), Some("English"));
        assert!(record.qualification.is_none());
        assert!(record.timezone.is_none());
    }

    #[test]
    fn should_keep_explicit_null_for_preferred_mode() {
        let record = complete().preferred_mode(None).build().unwrap();
        assert!(record.preferred_mode.is_none());
        assert_eq!(record.language.as_deref(), Some("English"));
    }

    #[test]
    fn should_keep_caller_values_for_optional_fields() {
        let record = complete()
            .preferred_mode(Some("offline".to_string()))
            .language(Some("Marathi".to_string()))
            .qualification(Some("M.Sc".to_string()))
            .build()
            .unwrap();
        assert_eq!(record.preferred_mode.as_deref(), Some("offline"));
        assert_eq!(record.language.as_deref(), Some("Marathi"));
        assert_eq!(record.qualification.as_deref(), Some("M.Sc"));
    }

    #[test]
    fn should_return_missing_field_when_required_field_unset() {
        let result = NewRecord::builder()
            .name("Meera")
            .email("meera@example.org")
            .course("MBA")
            .subject("Finance")
            .build();
        assert_eq!(result, Err(ValidationError::MissingField("mobile_no")));
    }

    #[test]
    fn should_return_empty_field_when_required_field_blank() {
        let result = complete().course("   ").build();
        assert_eq!(result, Err(ValidationError::EmptyField("course")));
    }

    #[test]
    fn should_return_invalid_email_when_malformed() {
        let result = complete().email("meera-at-example").build();
        assert_eq!(
            result,
            Err(ValidationError::InvalidEmail("meera-at-example".to_string()))
        );
    }
}
