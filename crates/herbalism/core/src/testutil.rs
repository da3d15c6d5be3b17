//! Shared fixtures for engine unit tests.

use std::sync::Mutex;

use crate::env::{
    Diagnostic, DiagnosticsSink, Env, IngredientOracle, ProductOracle, RecipeOracle,
};
use crate::model::{
    Category, ConstraintRecipe, Ingredient, ItemNumber, Product, SubsetRecipe,
};

/// Minimal in-memory store implementing every oracle.
#[derive(Default)]
pub(crate) struct TestStore {
    pub ingredients: Vec<Ingredient>,
    pub products: Vec<Product>,
    pub ruined: Vec<(Category, ItemNumber)>,
    pub subset_recipes: Vec<SubsetRecipe>,
    pub constraint_recipes: Vec<ConstraintRecipe>,
}

impl TestStore {
    pub fn env<'a>(&'a self, sink: Option<&'a dyn DiagnosticsSink>) -> crate::env::BlendEnv<'a> {
        let env = Env::with_all(self, self, self);
        match sink {
            Some(sink) => env.with_sink(sink).into_blend_env(),
            None => env.into_blend_env(),
        }
    }
}

impl IngredientOracle for TestStore {
    fn ingredient(&self, number: ItemNumber) -> Option<Ingredient> {
        self.ingredients
            .iter()
            .find(|ing| ing.number == number)
            .cloned()
    }
}

impl ProductOracle for TestStore {
    fn product(&self, number: ItemNumber) -> Option<Product> {
        self.products.iter().find(|p| p.number == number).cloned()
    }

    fn ruined_product_number(&self, category: Category) -> Option<ItemNumber> {
        self.ruined
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, n)| *n)
    }
}

impl RecipeOracle for TestStore {
    fn subset_recipes(&self, category: Category, numbers: &[ItemNumber]) -> Vec<SubsetRecipe> {
        let mut matching: Vec<SubsetRecipe> = self
            .subset_recipes
            .iter()
            .filter(|recipe| recipe.category == category && recipe.is_subset_of(numbers))
            .cloned()
            .collect();
        // Stable sort keeps insertion order within equal sizes.
        matching.sort_by_key(|recipe| core::cmp::Reverse(recipe.len()));
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

/// Sink that records every event for assertions.
#[derive(Default)]
pub(crate) struct Recorder(Mutex<Vec<Diagnostic>>);

impl Recorder {
    pub fn events(&self) -> Vec<Diagnostic> {
        self.0.lock().unwrap().clone()
    }
}

impl DiagnosticsSink for Recorder {
    fn report(&self, event: &Diagnostic) {
        self.0.lock().unwrap().push(event.clone());
    }
}

pub(crate) fn num(s: &str) -> ItemNumber {
    s.parse().unwrap()
}
