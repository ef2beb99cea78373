//! Canonical location type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Location`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum LocationError {
    /// The input string is empty (or whitespace only).
    #[error("location cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("location must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// A cafe location in canonical form.
///
/// Locations are free text ("Peckham", "Shoreditch"), but lookups must not
/// depend on how the client cased the query. Canonical form uppercases the
/// first character and lowercases the rest, so `peckham`, `PECKHAM` and
/// `Peckham` all canonicalize to the same value.
///
/// ## Examples
///
/// ```
/// use cafe_wifi_core::Location;
///
/// let loc = Location::canonicalize("peckham").unwrap();
/// assert_eq!(loc.as_str(), "Peckham");
///
/// // Idempotent: canonicalizing a canonical value changes nothing
/// let again = Location::canonicalize(loc.as_str()).unwrap();
/// assert_eq!(loc, again);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    /// Maximum length of a location string.
    pub const MAX_LENGTH: usize = 250;

    /// Parse a `Location` from a string, converting it to canonical form.
    ///
    /// Leading and trailing whitespace is trimmed before canonicalization.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty or longer than
    /// [`Self::MAX_LENGTH`] characters.
    pub fn canonicalize(s: &str) -> Result<Self, LocationError> {
        let s = s.trim();

        if s.is_empty() {
            return Err(LocationError::Empty);
        }

        if s.chars().count() > Self::MAX_LENGTH {
            return Err(LocationError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        let mut chars = s.chars();
        let canonical = match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        };

        Ok(Self(canonical))
    }

    /// Returns the canonical location as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Location` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Location {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::canonicalize(s)
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_lowercase() {
        assert_eq!(Location::canonicalize("peckham").unwrap().as_str(), "Peckham");
    }

    #[test]
    fn test_canonicalize_uppercase() {
        assert_eq!(Location::canonicalize("PECKHAM").unwrap().as_str(), "Peckham");
    }

    #[test]
    fn test_canonicalize_mixed_case() {
        assert_eq!(
            Location::canonicalize("shOreDitch").unwrap().as_str(),
            "Shoreditch"
        );
    }

    #[test]
    fn test_canonicalize_idempotent() {
        let once = Location::canonicalize("bermondsey").unwrap();
        let twice = Location::canonicalize(once.as_str()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_canonicalize_trims_whitespace() {
        assert_eq!(Location::canonicalize("  hackney ").unwrap().as_str(), "Hackney");
    }

    #[test]
    fn test_canonicalize_multi_word_lowers_rest() {
        // Canonical form only uppercases the very first character
        assert_eq!(
            Location::canonicalize("london bridge").unwrap().as_str(),
            "London bridge"
        );
    }

    #[test]
    fn test_canonicalize_empty_rejected() {
        assert!(matches!(
            Location::canonicalize(""),
            Err(LocationError::Empty)
        ));
        assert!(matches!(
            Location::canonicalize("   "),
            Err(LocationError::Empty)
        ));
    }

    #[test]
    fn test_canonicalize_too_long_rejected() {
        let long = "a".repeat(Location::MAX_LENGTH + 1);
        assert!(matches!(
            Location::canonicalize(&long),
            Err(LocationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_from_str() {
        let loc: Location = "camden".parse().unwrap();
        assert_eq!(loc.as_str(), "Camden");
    }
}
