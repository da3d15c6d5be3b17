//! Subset and constraint recipes.

use crate::model::axis::{Axis, Polarity};
use crate::model::item::ItemNumber;
use crate::model::pattern::NumberPattern;
use crate::model::product::Category;

/// Error constructing a recipe.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecipeError {
    #[error("subset recipe requires at least one ingredient")]
    EmptyIngredients,

    #[error("subset recipe holds at most {max} ingredients, got {got}")]
    TooManyIngredients { max: usize, got: usize },
}

/// An exact-set recipe: matches whenever its ingredient set is contained in
/// the submitted blend. The largest matching recipe overrides everything else
/// for its category.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubsetRecipe {
    pub product: ItemNumber,
    pub category: Category,
    pub quantity: u32,
    /// 1-6 ingredient numbers, kept sorted descending.
    ingredients: Vec<ItemNumber>,
}

impl SubsetRecipe {
    pub const MAX_INGREDIENTS: usize = 6;

    /// Creates a recipe, sorting its ingredient list descending.
    pub fn new(
        product: ItemNumber,
        category: Category,
        quantity: u32,
        mut ingredients: Vec<ItemNumber>,
    ) -> Result<Self, RecipeError> {
        if ingredients.is_empty() {
            return Err(RecipeError::EmptyIngredients);
        }
        if ingredients.len() > Self::MAX_INGREDIENTS {
            return Err(RecipeError::TooManyIngredients {
                max: Self::MAX_INGREDIENTS,
                got: ingredients.len(),
            });
        }
        ingredients.sort_unstable_by(|a, b| b.cmp(a));
        Ok(Self {
            product,
            category,
            quantity: quantity.max(1),
            ingredients,
        })
    }

    /// The recipe's ingredient numbers, sorted descending.
    pub fn ingredients(&self) -> &[ItemNumber] {
        &self.ingredients
    }

    /// Number of ingredients the recipe requires.
    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    /// Always false; construction rejects empty recipes.
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Returns true if every recipe ingredient appears in `numbers`.
    ///
    /// Set semantics: duplicates in either list carry no extra weight.
    pub fn is_subset_of(&self, numbers: &[ItemNumber]) -> bool {
        self.ingredients
            .iter()
            .all(|required| numbers.contains(required))
    }
}

/// A predicate recipe matching on chakra outcome and ingredient families
/// rather than an exact set.
///
/// Absent fields are wildcards. Stores preserve insertion order; when several
/// constraint recipes match, the earliest inserted wins.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstraintRecipe {
    pub product: ItemNumber,
    pub category: Category,
    pub quantity: u32,
    /// Each pattern must be satisfied by at least one submitted ingredient.
    pub patterns: Vec<NumberPattern>,
    pub primary_axis: Option<Axis>,
    pub primary_polarity: Option<Polarity>,
    pub secondary_axis: Option<Axis>,
    pub secondary_polarity: Option<Polarity>,
    /// Exact tier requirement.
    pub tier: Option<u8>,
}

impl ConstraintRecipe {
    /// Creates an unconstrained recipe for the category; add constraints via
    /// the `with_*` methods.
    pub fn new(product: ItemNumber, category: Category, quantity: u32) -> Self {
        Self {
            product,
            category,
            quantity: quantity.max(1),
            patterns: Vec::new(),
            primary_axis: None,
            primary_polarity: None,
            secondary_axis: None,
            secondary_polarity: None,
            tier: None,
        }
    }

    pub fn with_pattern(mut self, pattern: NumberPattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    pub fn with_primary(mut self, axis: impl Into<Axis>, polarity: Polarity) -> Self {
        self.primary_axis = Some(axis.into());
        self.primary_polarity = Some(polarity);
        self
    }

    pub fn with_secondary(mut self, axis: impl Into<Axis>, polarity: Polarity) -> Self {
        self.secondary_axis = Some(axis.into());
        self.secondary_polarity = Some(polarity);
        self
    }

    pub fn with_tier(mut self, tier: u8) -> Self {
        self.tier = Some(tier);
        self
    }

    /// Evaluates every specified constraint against the blend outcome.
    ///
    /// `numbers` is the submitted ingredient multiset; axis/polarity arguments
    /// come from chakra aggregation and may be absent when the blend produced
    /// no such axis.
    #[allow(clippy::too_many_arguments)]
    pub fn matches(
        &self,
        numbers: &[ItemNumber],
        primary_axis: Option<&Axis>,
        primary_polarity: Option<Polarity>,
        secondary_axis: Option<&Axis>,
        secondary_polarity: Option<Polarity>,
        tier: u8,
    ) -> bool {
        if let Some(required) = self.tier {
            if required != tier {
                return false;
            }
        }
        if let Some(required) = &self.primary_axis {
            if primary_axis != Some(required) {
                return false;
            }
        }
        if let Some(required) = self.primary_polarity {
            if primary_polarity != Some(required) {
                return false;
            }
        }
        if let Some(required) = &self.secondary_axis {
            if secondary_axis != Some(required) {
                return false;
            }
        }
        if let Some(required) = self.secondary_polarity {
            if secondary_polarity != Some(required) {
                return false;
            }
        }
        self.patterns
            .iter()
            .all(|pattern| numbers.iter().any(|number| pattern.matches(*number)))
    }
}
