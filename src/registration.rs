use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RegError, RegResult};
use crate::logging::log_debug;
use crate::validation::is_valid_email;

/// Form fields a draft knows how to store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = RegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            _ => Err(RegError::InvalidField(s.trim().to_string())),
        }
    }
}

/// In-memory registration form state.
///
/// `email_valid` is `None` until an email has been supplied, and afterwards
/// always holds the verdict for the current `email`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DraftFields")]
pub struct RegistrationDraft {
    name: String,
    email: String,
    #[serde(rename = "emailValid")]
    email_valid: Option<bool>,
}

/// Wire shape of a draft. Any incoming verdict is discarded and recomputed
/// from the email.
#[derive(Deserialize)]
struct DraftFields {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(rename = "emailValid", default)]
    email_valid: Option<bool>,
}

impl From<DraftFields> for RegistrationDraft {
    fn from(fields: DraftFields) -> Self {
        let mut draft = RegistrationDraft {
            name: fields.name,
            ..RegistrationDraft::default()
        };
        // An untouched email stays unevaluated.
        if !fields.email.is_empty() || fields.email_valid.is_some() {
            draft.set_email(fields.email);
        }
        draft
    }
}

impl RegistrationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn email_valid(&self) -> Option<bool> {
        self.email_valid
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        log_debug(&format!("draft name set ({} chars)", self.name.chars().count()));
    }

    /// Store a new email together with its verdict.
    pub fn set_email(&mut self, value: impl Into<String>) {
        let value = value.into();
        let valid = is_valid_email(&value);
        self.email = value;
        self.email_valid = Some(valid);
        log_debug(&format!("draft email set, valid={}", valid));
    }

    pub fn apply(&mut self, field: Field, value: impl Into<String>) {
        match field {
            Field::Name => self.set_name(value),
            Field::Email => self.set_email(value),
        }
    }

    /// Like [`apply`](Self::apply) but with the field given by its input name.
    /// An unknown name leaves the draft as it was.
    pub fn apply_named(&mut self, name: &str, value: impl Into<String>) -> RegResult<()> {
        let field = name.parse::<Field>()?;
        self.apply(field, value);
        Ok(())
    }

    /// A draft can be submitted once it has a name and a valid email.
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty() && self.email_valid == Some(true)
    }
}
