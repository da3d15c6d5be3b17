//! Four-digit item numbers and their digit-level encoding.

use core::fmt;
use core::str::FromStr;

/// Domain digit for ingredient item numbers.
pub const INGREDIENT_DOMAIN: u8 = b'5';

/// Domain digit for product item numbers.
pub const PRODUCT_DOMAIN: u8 = b'6';

/// A four-digit item identifier.
///
/// The digits carry meaning:
/// - digit 1: domain (`5` = ingredient, `6` = product)
/// - digit 2: primary-axis digit
/// - digit 3: secondary-axis digit, or a special-rule marker (`8`, `9`)
/// - digit 4: strength, tier, or polarity depending on domain
///
/// Stored as ASCII digits so digit access and pattern matching stay cheap.
/// Ordering is numeric (equivalent to lexical over equal-length digits).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemNumber([u8; 4]);

impl ItemNumber {
    /// Creates an item number from four ASCII digits.
    ///
    /// Panics at compile time (or in const context) if any byte is not a
    /// digit. Use [`ItemNumber::from_str`] for runtime input.
    pub const fn from_ascii(digits: [u8; 4]) -> Self {
        let mut i = 0;
        while i < 4 {
            assert!(digits[i].is_ascii_digit(), "item number digit out of range");
            i += 1;
        }
        Self(digits)
    }

    /// Returns the raw ASCII digits.
    pub const fn digits(&self) -> [u8; 4] {
        self.0
    }

    /// Returns the domain digit (first digit).
    pub const fn domain(&self) -> u8 {
        self.0[0]
    }

    /// Returns the primary-axis digit (second digit).
    pub const fn axis_digit(&self) -> u8 {
        self.0[1]
    }

    /// Returns the third digit, used as a marker by the special
    /// single-ingredient rules.
    pub const fn marker_digit(&self) -> u8 {
        self.0[2]
    }

    /// Returns the strength/tier/polarity digit (fourth digit).
    pub const fn potency_digit(&self) -> u8 {
        self.0[3]
    }

    /// Returns true if this number lives in the ingredient domain.
    pub const fn is_ingredient(&self) -> bool {
        self.domain() == INGREDIENT_DOMAIN
    }

    /// Returns true if this number lives in the product domain.
    pub const fn is_product(&self) -> bool {
        self.domain() == PRODUCT_DOMAIN
    }

    /// Builds a product number from an axis digit, a marker digit, and a
    /// tier. The tier digit clamps to 3; products above tier 3 do not exist.
    pub fn product_for(axis_digit: u8, marker_digit: u8, tier: u8) -> Self {
        let tier_digit = b'0' + tier.min(3);
        Self([PRODUCT_DOMAIN, axis_digit, marker_digit, tier_digit])
    }

    /// Returns the number as a string slice.
    pub fn as_str(&self) -> &str {
        // Invariant: all four bytes are ASCII digits.
        core::str::from_utf8(&self.0).unwrap_or("????")
    }
}

/// Error parsing an item number from text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ItemNumberError {
    #[error("item number must be exactly 4 characters, got {0}")]
    WrongLength(usize),

    #[error("item number must be all digits, got '{0}'")]
    NonDigit(String),
}

impl FromStr for ItemNumber {
    type Err = ItemNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 4 {
            return Err(ItemNumberError::WrongLength(bytes.len()));
        }
        if !bytes.iter().all(|b| b.is_ascii_digit()) {
            return Err(ItemNumberError::NonDigit(s.to_owned()));
        }
        Ok(Self([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}

impl fmt::Display for ItemNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for ItemNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemNumber({})", self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ItemNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ItemNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
