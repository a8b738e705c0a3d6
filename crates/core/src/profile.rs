//! The customer profile.
//!
//! Created once when the customer identifies themselves, overwritten
//! wholesale on re-submission, never deleted by the system.

use serde::{Deserialize, Serialize};

use crate::types::{Phone, PhoneError};

/// Validation errors for the identification form.
#[derive(thiserror::Error, Debug, Clone)]
pub enum ProfileError {
    /// The phone number is missing or malformed.
    #[error(transparent)]
    Phone(#[from] PhoneError),
    /// The trimmed name has fewer than 2 characters.
    #[error("name must have at least {min} characters")]
    NameTooShort {
        /// Minimum accepted length.
        min: usize,
    },
}

impl ProfileError {
    /// Inline message shown next to the offending field (pt-BR).
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Phone(_) => "Informe um número de WhatsApp válido.",
            Self::NameTooShort { .. } => "Informe seu nome e sobrenome.",
        }
    }
}

/// The identified customer.
///
/// Persisted under the `userProfile` key as `{ "phone": ..., "name": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// WhatsApp number, serialized in masked display form.
    pub phone: Phone,
    /// Full name, stored trimmed.
    pub name: String,
}

impl Profile {
    /// Minimum length of the trimmed name.
    pub const MIN_NAME_LEN: usize = 2;

    /// Validate raw form input into a profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the phone is not a valid 11-digit mobile number
    /// or the trimmed name is shorter than [`Self::MIN_NAME_LEN`].
    pub fn parse(phone_input: &str, name_input: &str) -> Result<Self, ProfileError> {
        let phone = Phone::parse(phone_input)?;
        let name = name_input.trim();

        if name.chars().count() < Self::MIN_NAME_LEN {
            return Err(ProfileError::NameTooShort {
                min: Self::MIN_NAME_LEN,
            });
        }

        Ok(Self {
            phone,
            name: name.to_owned(),
        })
    }
}
