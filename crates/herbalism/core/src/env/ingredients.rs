use crate::model::{Ingredient, ItemNumber};

/// Read-only access to ingredient records.
pub trait IngredientOracle: Send + Sync {
    /// Looks up an ingredient by item number. `None` means the number does
    /// not belong to a known ingredient.
    fn ingredient(&self, number: ItemNumber) -> Option<Ingredient>;
}
