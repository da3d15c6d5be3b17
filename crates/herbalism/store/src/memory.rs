//! In-memory store backing every engine oracle.

use std::collections::BTreeMap;

use herbalism_core::{
    Category, ConstraintRecipe, Ingredient, IngredientOracle, ItemNumber, Product, ProductOracle,
    RecipeOracle, SubsetRecipe,
};

/// A complete in-memory store.
///
/// Serves as the test double the engine was designed against and as a real
/// backing for deployments small enough to load their catalog up front.
/// Mutation happens only while assembling the store; during resolution the
/// engine sees it through the read-only oracle traits.
///
/// Constraint recipes keep strict insertion order; that order is the FIFO
/// tie-break the resolver relies on, so there is deliberately no API that
/// re-sorts them.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    ingredients: BTreeMap<ItemNumber, Ingredient>,
    products: BTreeMap<ItemNumber, Product>,
    subset_recipes: Vec<SubsetRecipe>,
    constraint_recipes: Vec<ConstraintRecipe>,
    failed_blends: BTreeMap<Category, ItemNumber>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an ingredient, keyed by item number.
    pub fn upsert_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.insert(ingredient.number, ingredient);
    }

    /// Inserts or replaces a product, keyed by item number.
    pub fn upsert_product(&mut self, product: Product) {
        self.products.insert(product.number, product);
    }

    /// Appends a subset recipe.
    pub fn insert_subset_recipe(&mut self, recipe: SubsetRecipe) {
        self.subset_recipes.push(recipe);
    }

    /// Appends a constraint recipe. Insertion order is load order and decides
    /// FIFO matching.
    pub fn insert_constraint_recipe(&mut self, recipe: ConstraintRecipe) {
        self.constraint_recipes.push(recipe);
    }

    /// Registers the category's canonical ruined product.
    pub fn register_failed_blend(&mut self, category: Category, product: ItemNumber) {
        self.failed_blends.insert(category, product);
    }

    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

impl IngredientOracle for MemoryStore {
    fn ingredient(&self, number: ItemNumber) -> Option<Ingredient> {
        self.ingredients.get(&number).cloned()
    }
}

impl ProductOracle for MemoryStore {
    fn product(&self, number: ItemNumber) -> Option<Product> {
        self.products.get(&number).cloned()
    }

    fn ruined_product_number(&self, category: Category) -> Option<ItemNumber> {
        self.failed_blends.get(&category).copied()
    }
}

impl RecipeOracle for MemoryStore {
    fn subset_recipes(&self, category: Category, numbers: &[ItemNumber]) -> Vec<SubsetRecipe> {
        let mut matching: Vec<SubsetRecipe> = self
            .subset_recipes
            .iter()
            .filter(|recipe| recipe.category == category && recipe.is_subset_of(numbers))
            .cloned()
            .collect();
        // Stable sort: equal sizes keep insertion order.
        matching.sort_by_key(|recipe| std::cmp::Reverse(recipe.len()));
        matching
    }

    fn constraint_recipes(&self, category: Category) -> Vec<ConstraintRecipe> {
        self.constraint_recipes
            .iter()
            .filter(|recipe| recipe.category == category)
            .cloned()
            .collect()
    }
}
