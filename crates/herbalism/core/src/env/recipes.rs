use crate::model::{Category, ConstraintRecipe, ItemNumber, SubsetRecipe};

/// Read-only access to recipe tables.
pub trait RecipeOracle: Send + Sync {
    /// Returns every subset recipe of the category whose ingredient set is
    /// contained in `numbers`, largest recipe first. Recipes of equal size
    /// keep their insertion order, which is the documented tie-break.
    fn subset_recipes(&self, category: Category, numbers: &[ItemNumber]) -> Vec<SubsetRecipe>;

    /// Returns every constraint recipe of the category in insertion (FIFO)
    /// order. Predicate evaluation happens in the engine, so stores only
    /// pre-filter by category.
    fn constraint_recipes(&self, category: Category) -> Vec<ConstraintRecipe>;
}
