//! Digit-wise wildcard patterns over item numbers.

use core::fmt;
use core::str::FromStr;

use crate::model::item::ItemNumber;

/// A four-character pattern where `*` matches any single digit.
///
/// Used by constraint recipes to require ingredient families, e.g. `51*1`
/// matches `5101`, `5111`, and so on. The matcher is deliberately independent
/// of the store layer; stores hand patterns back verbatim and the engine
/// evaluates them.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberPattern([u8; 4]);

impl NumberPattern {
    const WILDCARD: u8 = b'*';

    /// Returns true if the given item number matches this pattern.
    pub fn matches(&self, number: ItemNumber) -> bool {
        self.0
            .iter()
            .zip(number.digits().iter())
            .all(|(p, d)| *p == Self::WILDCARD || p == d)
    }

    /// Returns the pattern as a string slice.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.0).unwrap_or("????")
    }
}

impl From<ItemNumber> for NumberPattern {
    /// An exact number is also a (wildcard-free) pattern.
    fn from(number: ItemNumber) -> Self {
        Self(number.digits())
    }
}

/// Error parsing a number pattern from text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("pattern must be exactly 4 characters, got {0}")]
    WrongLength(usize),

    #[error("pattern may only contain digits and '*', got '{0}'")]
    InvalidCharacter(String),
}

impl FromStr for NumberPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 4 {
            return Err(PatternError::WrongLength(bytes.len()));
        }
        if !bytes
            .iter()
            .all(|b| b.is_ascii_digit() || *b == Self::WILDCARD)
        {
            return Err(PatternError::InvalidCharacter(s.to_owned()));
        }
        Ok(Self([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}

impl fmt::Display for NumberPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for NumberPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NumberPattern({})", self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for NumberPattern {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NumberPattern {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(s: &str) -> ItemNumber {
        s.parse().unwrap()
    }

    #[test]
    fn wildcard_matches_any_single_digit() {
        let pattern: NumberPattern = "51*1".parse().unwrap();
        assert!(pattern.matches(number("5101")));
        assert!(pattern.matches(number("5111")));
        assert!(!pattern.matches(number("5112")));
        assert!(!pattern.matches(number("6111")));
    }

    #[test]
    fn exact_pattern_matches_only_itself() {
        let pattern: NumberPattern = "5419".parse().unwrap();
        assert!(pattern.matches(number("5419")));
        assert!(!pattern.matches(number("5418")));
    }

    #[test]
    fn rejects_malformed_patterns() {
        assert_eq!(
            "51*".parse::<NumberPattern>(),
            Err(PatternError::WrongLength(3))
        );
        assert_eq!(
            "5x*1".parse::<NumberPattern>(),
            Err(PatternError::InvalidCharacter("5x*1".to_owned()))
        );
    }
}
