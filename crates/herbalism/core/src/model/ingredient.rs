//! Ingredient records.

use std::collections::BTreeSet;

use crate::model::axis::AxisStrength;
use crate::model::item::ItemNumber;

/// An herbal ingredient as loaded from the store.
///
/// Immutable once constructed; the engine only reads these. Properties mix
/// hidden traits (aromatic, ingestible, spirit, ...) and visible ones
/// (alcohol, salt, ...) in one set because every rule treats them uniformly.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ingredient {
    pub number: ItemNumber,
    pub name: String,
    pub macro_name: Option<String>,
    pub rarity: Option<String>,
    pub primary: Option<AxisStrength>,
    pub secondary: Option<AxisStrength>,
    /// Normalized (lowercased) property names.
    properties: BTreeSet<String>,
    pub flavor_text: Option<String>,
    pub rules_text: Option<String>,
    pub skip_export: bool,
}

impl Ingredient {
    /// Starts building an ingredient with the given identity.
    pub fn builder(number: ItemNumber, name: impl Into<String>) -> IngredientBuilder {
        IngredientBuilder {
            inner: Ingredient {
                number,
                name: name.into(),
                macro_name: None,
                rarity: None,
                primary: None,
                secondary: None,
                properties: BTreeSet::new(),
                flavor_text: None,
                rules_text: None,
                skip_export: false,
            },
        }
    }

    /// Case-insensitive membership test over the property set.
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains(&name.trim().to_lowercase())
    }

    /// Iterates the normalized property names.
    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(String::as_str)
    }
}

/// Builder for [`Ingredient`].
#[derive(Clone, Debug)]
pub struct IngredientBuilder {
    inner: Ingredient,
}

impl IngredientBuilder {
    pub fn macro_name(mut self, value: impl Into<String>) -> Self {
        self.inner.macro_name = Some(value.into());
        self
    }

    pub fn rarity(mut self, value: impl Into<String>) -> Self {
        self.inner.rarity = Some(value.into());
        self
    }

    /// Sets the primary axis reading. Strength clamps into [-3, 3].
    pub fn primary(mut self, axis: &str, strength: i8) -> Self {
        self.inner.primary = Some(AxisStrength::new(axis, strength));
        self
    }

    /// Sets the secondary axis reading. Strength clamps into [-3, 3].
    pub fn secondary(mut self, axis: &str, strength: i8) -> Self {
        self.inner.secondary = Some(AxisStrength::new(axis, strength));
        self
    }

    /// Adds one property, normalizing the name.
    pub fn property(mut self, name: &str) -> Self {
        let normalized = name.trim().to_lowercase();
        if !normalized.is_empty() {
            self.inner.properties.insert(normalized);
        }
        self
    }

    /// Adds several properties at once.
    pub fn properties<'a>(mut self, names: impl IntoIterator<Item = &'a str>) -> Self {
        for name in names {
            self = self.property(name);
        }
        self
    }

    pub fn flavor_text(mut self, value: impl Into<String>) -> Self {
        self.inner.flavor_text = Some(value.into());
        self
    }

    pub fn rules_text(mut self, value: impl Into<String>) -> Self {
        self.inner.rules_text = Some(value.into());
        self
    }

    pub fn skip_export(mut self, value: bool) -> Self {
        self.inner.skip_export = value;
        self
    }

    pub fn build(self) -> Ingredient {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(s: &str) -> ItemNumber {
        s.parse().unwrap()
    }

    #[test]
    fn property_lookup_is_case_insensitive() {
        let ingredient = Ingredient::builder(number("5111"), "Calming Chamomile")
            .properties(["Ingestible", "AROMATIC"])
            .build();

        assert!(ingredient.has_property("ingestible"));
        assert!(ingredient.has_property("Aromatic"));
        assert!(!ingredient.has_property("alcohol"));
    }

    #[test]
    fn blank_properties_are_dropped() {
        let ingredient = Ingredient::builder(number("5111"), "Calming Chamomile")
            .property("  ")
            .property("salt")
            .build();

        assert_eq!(ingredient.properties().collect::<Vec<_>>(), vec!["salt"]);
    }
}
