//! Property predicates over ingredient collections.
//!
//! Pure, total functions. The classifier keys on these names; anything else
//! in an ingredient's property set is inert data for the engine.

use crate::model::Ingredient;

pub const ALCOHOL: &str = "alcohol";
pub const AROMATIC: &str = "aromatic";
pub const INGESTIBLE: &str = "ingestible";
pub const SALT: &str = "salt";
pub const SPIRIT: &str = "spirit";

/// True iff every ingredient carries the property. False for an empty slice:
/// an empty blend carries nothing.
pub fn all_have(ingredients: &[Ingredient], name: &str) -> bool {
    if ingredients.is_empty() {
        return false;
    }
    ingredients.iter().all(|ing| ing.has_property(name))
}

/// True iff no ingredient carries the property. Vacuously true for an empty
/// slice.
pub fn none_have(ingredients: &[Ingredient], name: &str) -> bool {
    !ingredients.iter().any(|ing| ing.has_property(name))
}

/// True iff at least one ingredient carries the property.
pub fn any_has(ingredients: &[Ingredient], name: &str) -> bool {
    ingredients.iter().any(|ing| ing.has_property(name))
}

/// Count of ingredients carrying the property.
pub fn count_having(ingredients: &[Ingredient], name: &str) -> usize {
    ingredients
        .iter()
        .filter(|ing| ing.has_property(name))
        .count()
}
