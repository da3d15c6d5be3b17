//! Chakra aggregation: axis totals, polarity, and tier.

use std::collections::BTreeMap;

use crate::model::{Axis, Ingredient, Polarity};

/// A nonzero signed total on one axis.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisTotal {
    pub axis: Axis,
    pub total: i32,
}

impl AxisTotal {
    /// Polarity of the total. Construction guarantees the total is nonzero.
    pub fn polarity(&self) -> Polarity {
        if self.total > 0 {
            Polarity::Boon
        } else {
            Polarity::Bane
        }
    }
}

/// Outcome of aggregating a blend's chakra readings.
///
/// `primary` is absent only when no ingredient carried any axis, or every
/// axis netted to zero; such blends are always tier 0.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChakraProfile {
    pub primary: Option<AxisTotal>,
    pub secondary: Option<AxisTotal>,
    pub tier: u8,
}

impl ChakraProfile {
    pub fn primary_axis(&self) -> Option<&Axis> {
        self.primary.as_ref().map(|t| &t.axis)
    }

    pub fn primary_polarity(&self) -> Option<Polarity> {
        self.primary.as_ref().map(AxisTotal::polarity)
    }

    pub fn secondary_axis(&self) -> Option<&Axis> {
        self.secondary.as_ref().map(|t| &t.axis)
    }

    pub fn secondary_polarity(&self) -> Option<Polarity> {
        self.secondary.as_ref().map(AxisTotal::polarity)
    }
}

/// Sums every ingredient's axis readings and derives primary, secondary, and
/// tier.
///
/// Each ingredient contributes its primary strength to its primary axis and,
/// independently, its secondary strength to its secondary axis. Axes whose
/// totals net to zero are dropped; a zero-total axis can never be primary or
/// secondary. Remaining axes rank by absolute total descending, ties broken
/// by lexical axis label ascending (documented contract, not sort accident).
///
/// Tier comes from `d = |primary| - |secondary|` (`|primary|` alone if no
/// secondary exists): `d < 4` is tier 0, `4..=7` tier 1, `8..=10` tier 2,
/// `> 10` tier 3. When no secondary axis exists and the banded tier is at
/// least 1, the tier rises by one; a blend that never reached tier 1 stays
/// ruined.
pub fn aggregate(ingredients: &[Ingredient]) -> ChakraProfile {
    let mut totals: BTreeMap<Axis, i32> = BTreeMap::new();

    for ingredient in ingredients {
        if let Some(reading) = &ingredient.primary {
            *totals.entry(reading.axis.clone()).or_insert(0) += i32::from(reading.strength);
        }
        if let Some(reading) = &ingredient.secondary {
            *totals.entry(reading.axis.clone()).or_insert(0) += i32::from(reading.strength);
        }
    }

    // BTreeMap iteration already yields lexical label order, so a stable sort
    // by absolute total leaves ties lexically ascending.
    let mut ranked: Vec<AxisTotal> = totals
        .into_iter()
        .filter(|(_, total)| *total != 0)
        .map(|(axis, total)| AxisTotal { axis, total })
        .collect();
    ranked.sort_by_key(|entry| core::cmp::Reverse(entry.total.abs()));

    let mut ranked = ranked.into_iter();
    let primary = ranked.next();
    let secondary = ranked.next();

    let primary_abs = primary.as_ref().map_or(0, |t| t.total.abs());
    let secondary_abs = secondary.as_ref().map_or(0, |t| t.total.abs());
    let d = primary_abs - secondary_abs;

    let mut tier: u8 = match d {
        d if d > 10 => 3,
        8..=10 => 2,
        4..=7 => 1,
        _ => 0,
    };
    if secondary.is_none() && tier >= 1 {
        tier += 1;
    }

    ChakraProfile {
        primary,
        secondary,
        tier,
    }
}
