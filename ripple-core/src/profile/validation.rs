//! Form-level validation schema.
//!
//! Validation is exhaustive by design: every field is checked independently
//! and every violation lands in the error map, so the form can surface all
//! inline messages at once instead of stopping at the first failure.
//! Re-validation happens on every field change in the UI; this module only
//! cares that a full pass over a draft yields either a complete
//! [`ValidatedProfile`] or the complete set of errors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::value_objects::{Bio, DisplayName, PhotoRef, Username};

/// The editable profile fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    ProfilePhoto,
    Name,
    Username,
    Bio,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::ProfilePhoto => "profile_photo",
            Field::Name => "name",
            Field::Username => "username",
            Field::Bio => "bio",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-field validation messages, keyed by field.
///
/// Never a partial set: a draft with three violations produces a map with
/// three entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    errors: BTreeMap<Field, String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Raw form values as submitted, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub profile_photo: String,
    pub name: String,
    pub username: String,
    pub bio: String,
}

/// The fully-checked, error-free set of submittable field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedProfile {
    pub photo: PhotoRef,
    pub name: DisplayName,
    pub username: Username,
    pub bio: Bio,
}

impl ProfileDraft {
    /// Validate every field and collect every violation.
    pub fn validate(&self) -> Result<ValidatedProfile, FieldErrors> {
        let mut errors = FieldErrors::default();

        let photo = PhotoRef::new(&self.profile_photo)
            .map_err(|e| errors.insert(Field::ProfilePhoto, e.to_string()))
            .ok();
        let name = DisplayName::new(&self.name)
            .map_err(|e| errors.insert(Field::Name, e.to_string()))
            .ok();
        let username = Username::new(&self.username)
            .map_err(|e| errors.insert(Field::Username, e.to_string()))
            .ok();
        let bio = Bio::new(&self.bio)
            .map_err(|e| errors.insert(Field::Bio, e.to_string()))
            .ok();

        match (photo, name, username, bio) {
            (Some(photo), Some(name), Some(username), Some(bio)) => Ok(ValidatedProfile {
                photo,
                name,
                username,
                bio,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ProfileDraft {
        ProfileDraft {
            profile_photo: "https://img/x.png".to_string(),
            name: "Alice".to_string(),
            username: "alice1".to_string(),
            bio: "hello world".to_string(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        let validated = valid_draft().validate().expect("draft validates");
        assert_eq!(validated.username.as_str(), "alice1");
        assert_eq!(validated.photo.as_str(), "https://img/x.png");
    }

    #[test]
    fn short_name_fails_on_name_only() {
        let mut draft = valid_draft();
        draft.name = "Al".to_string();

        let errors = draft.validate().expect_err("name too short");
        assert_eq!(errors.len(), 1);
        assert!(errors.get(Field::Name).unwrap().contains("at least 3"));
        assert!(!errors.contains(Field::Username));
        assert!(!errors.contains(Field::Bio));
        assert!(!errors.contains(Field::ProfilePhoto));
    }

    #[test]
    fn every_violation_is_reported() {
        let draft = ProfileDraft::default();

        let errors = draft.validate().expect_err("empty draft fails");
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(Field::ProfilePhoto));
        assert!(errors.contains(Field::Name));
        assert!(errors.contains(Field::Username));
        assert!(errors.contains(Field::Bio));
    }

    #[test]
    fn error_map_serializes_by_field_name() {
        let draft = ProfileDraft {
            bio: "x".to_string(),
            ..valid_draft()
        };
        let errors = draft.validate().expect_err("bio too short");
        let json = serde_json::to_value(&errors).unwrap();
        assert!(json["errors"]["bio"].is_string());
    }
}
