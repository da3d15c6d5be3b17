//! Engine configuration constants and tunable parameters.

use std::collections::BTreeMap;

use crate::model::{Category, ItemNumber};

/// Tunable parameters of the blend engine.
///
/// Everything that is data rather than rule lives here: the universal
/// fallback product, the designated special healing ingredient, and the
/// per-category healing products that ingredient can yield.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Universal last-resort product when even a ruined-product lookup fails.
    pub sludge_number: ItemNumber,

    /// Ingredient that triggers the healing special rule when the blend's
    /// primary polarity is boon.
    pub special_healing_ingredient: ItemNumber,

    /// Per-category product produced by the healing special rule. Categories
    /// without an entry fall through to constraint matching.
    pub healing_products: BTreeMap<Category, ItemNumber>,
}

impl EngineConfig {
    /// Maximum ingredients in one blend submission.
    pub const MAX_INGREDIENTS: usize = 6;

    /// More than this many alcohol-bearing ingredients ruins the blend.
    pub const MAX_ALCOHOL: usize = 2;

    /// Default sludge item number.
    pub const DEFAULT_SLUDGE: ItemNumber = ItemNumber::from_ascii(*b"6000");

    /// Default special healing ingredient (Healing Lotus).
    pub const DEFAULT_HEALING_INGREDIENT: ItemNumber = ItemNumber::from_ascii(*b"5419");

    pub fn new() -> Self {
        Self {
            sludge_number: Self::DEFAULT_SLUDGE,
            special_healing_ingredient: Self::DEFAULT_HEALING_INGREDIENT,
            healing_products: BTreeMap::new(),
        }
    }

    /// Registers the healing product for a category (builder pattern).
    #[must_use]
    pub fn with_healing_product(mut self, category: Category, number: ItemNumber) -> Self {
        self.healing_products.insert(category, number);
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
