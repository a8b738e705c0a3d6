//! Brazilian mobile phone number type.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PhoneError {
    /// The input contains no digits at all.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input does not have exactly 11 digits.
    #[error("phone number must have 11 digits (got {got})")]
    WrongLength {
        /// Number of digits found in the input.
        got: usize,
    },
}

/// An 11-digit Brazilian mobile phone number.
///
/// Only the digits are stored; any mask characters in the input are
/// stripped. The display form is the standard mobile mask,
/// `(DD) NNNNN-NNNN`, which is also the serialized representation so
/// profiles written by earlier clients round-trip unchanged.
///
/// ## Examples
///
/// ```
/// use cardapio_core::Phone;
///
/// let phone = Phone::parse("92984076278").unwrap();
/// assert_eq!(phone.masked(), "(92) 98407-6278");
///
/// // Masked input is accepted too
/// assert!(Phone::parse("(92) 98407-6278").is_ok());
///
/// // Landline-length numbers are rejected
/// assert!(Phone::parse("9284076278").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Number of digits in a Brazilian mobile number (DDD + 9 digits).
    pub const DIGITS: usize = 11;

    /// Parse a `Phone` from a string, ignoring any non-digit characters.
    ///
    /// # Errors
    ///
    /// Returns an error if the input has no digits or does not contain
    /// exactly 11 of them.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        let digits: String = s.chars().filter(char::is_ascii_digit).collect();

        if digits.is_empty() {
            return Err(PhoneError::Empty);
        }

        if digits.len() != Self::DIGITS {
            return Err(PhoneError::WrongLength { got: digits.len() });
        }

        Ok(Self(digits))
    }

    /// Returns the bare digits.
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// Returns the number in `(DD) NNNNN-NNNN` display form.
    #[must_use]
    pub fn masked(&self) -> String {
        mask_partial(&self.0)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Phone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.masked())
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Apply the Brazilian phone mask to a partially-typed input.
///
/// Mirrors what an input field shows while the customer is still typing:
/// non-digits are stripped, the input is truncated to 11 digits, and the
/// mask grows with the number of digits entered. Ten-digit (landline)
/// input renders as `(DD) NNNN-NNNN`.
#[must_use]
pub fn mask_partial(raw: &str) -> String {
    let d: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(Phone::DIGITS)
        .collect();

    match d.len() {
        0..=2 => format!("({d}"),
        3..=6 => format!("({}) {}", &d[..2], &d[2..]),
        7..=10 => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
        _ => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_raw_digits() {
        let phone = Phone::parse("92984076278").unwrap();
        assert_eq!(phone.digits(), "92984076278");
        assert_eq!(phone.masked(), "(92) 98407-6278");
    }

    #[test]
    fn test_parse_masked_input() {
        let phone = Phone::parse("(92) 98407-6278").unwrap();
        assert_eq!(phone.digits(), "92984076278");
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Phone::parse(""), Err(PhoneError::Empty)));
        assert!(matches!(Phone::parse("(  ) -"), Err(PhoneError::Empty)));
    }

    #[test]
    fn test_parse_wrong_length() {
        assert!(matches!(
            Phone::parse("9298407627"),
            Err(PhoneError::WrongLength { got: 10 })
        ));
        assert!(matches!(
            Phone::parse("929840762789"),
            Err(PhoneError::WrongLength { got: 12 })
        ));
    }

    #[test]
    fn test_mask_partial_grows_with_input() {
        assert_eq!(mask_partial(""), "(");
        assert_eq!(mask_partial("9"), "(9");
        assert_eq!(mask_partial("92"), "(92");
        assert_eq!(mask_partial("929"), "(92) 9");
        assert_eq!(mask_partial("929840"), "(92) 9840");
        assert_eq!(mask_partial("9298407"), "(92) 9840-7");
        assert_eq!(mask_partial("9298407627"), "(92) 9840-7627");
        assert_eq!(mask_partial("92984076278"), "(92) 98407-6278");
    }

    #[test]
    fn test_mask_partial_truncates_extra_digits() {
        assert_eq!(mask_partial("929840762789999"), "(92) 98407-6278");
    }

    #[test]
    fn test_serde_roundtrip_masked() {
        let phone = Phone::parse("92984076278").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"(92) 98407-6278\"");

        let back: Phone = serde_json::from_str(&json).unwrap();
        assert_eq!(back, phone);
    }

    #[test]
    fn test_deserialize_invalid_is_error() {
        assert!(serde_json::from_str::<Phone>("\"123\"").is_err());
    }
}
