//! Chakra axes and polarity.

use core::fmt;

/// A named chakra axis.
///
/// Labels are normalized (trimmed, lowercased) at construction so lookups and
/// recipe constraints compare case-insensitively, matching how catalog data
/// arrives in mixed case. Ordering is lexical over the normalized label and is
/// the documented tie-break when two axes carry equal absolute totals.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Axis(String);

impl Axis {
    /// Creates an axis from a label, normalizing it.
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(label.as_ref().trim().to_lowercase())
    }

    /// Returns the normalized label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Axis({})", self.0)
    }
}

impl From<&str> for Axis {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// Direction of an axis total: boon for positive, bane for negative.
///
/// A zero total has no polarity and can never become a primary or secondary
/// axis.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Polarity {
    Boon,
    Bane,
}

impl Polarity {
    /// Classifies a nonzero total. Returns `None` for zero.
    pub fn of(total: i32) -> Option<Self> {
        match total {
            t if t > 0 => Some(Self::Boon),
            t if t < 0 => Some(Self::Bane),
            _ => None,
        }
    }
}

/// An axis label paired with a signed strength, as carried by an ingredient.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisStrength {
    pub axis: Axis,
    /// Signed strength in [-3, 3].
    pub strength: i8,
}

impl AxisStrength {
    /// Creates a reading, clamping the strength into the valid [-3, 3] range.
    pub fn new(axis: impl Into<Axis>, strength: i8) -> Self {
        Self {
            axis: axis.into(),
            strength: strength.clamp(-3, 3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_normalizes_label() {
        assert_eq!(Axis::new("  Heart "), Axis::new("heart"));
        assert_eq!(Axis::new("CROWN").as_str(), "crown");
    }

    #[test]
    fn polarity_of_total() {
        assert_eq!(Polarity::of(5), Some(Polarity::Boon));
        assert_eq!(Polarity::of(-1), Some(Polarity::Bane));
        assert_eq!(Polarity::of(0), None);
    }

    #[test]
    fn polarity_parses_case_insensitively() {
        assert_eq!("boon".parse::<Polarity>().unwrap(), Polarity::Boon);
        assert_eq!("Bane".parse::<Polarity>().unwrap(), Polarity::Bane);
    }

    #[test]
    fn strength_clamps_to_valid_range() {
        assert_eq!(AxisStrength::new("root", 7).strength, 3);
        assert_eq!(AxisStrength::new("root", -7).strength, -3);
    }
}
