//! Traits describing the external store and diagnostics capability.
//!
//! Oracles expose ingredient records, product records, and recipe tables as
//! narrow read-only interfaces. The [`Env`] aggregate bundles them so the
//! resolution pipeline can reach everything it needs without hard coupling to
//! a concrete store; tests run the whole engine against in-memory fakes.
mod error;
mod ingredients;
mod products;
mod recipes;
mod sink;

pub use error::{Diagnostic, OracleError};
pub use ingredients::IngredientOracle;
pub use products::ProductOracle;
pub use recipes::RecipeOracle;
pub use sink::{DiagnosticsSink, NoopSink};

/// Aggregates the read-only oracles and the optional diagnostics sink
/// required by one blend resolution.
#[derive(Clone, Copy)]
pub struct Env<'a, I, P, R>
where
    I: IngredientOracle + ?Sized,
    P: ProductOracle + ?Sized,
    R: RecipeOracle + ?Sized,
{
    ingredients: Option<&'a I>,
    products: Option<&'a P>,
    recipes: Option<&'a R>,
    sink: Option<&'a dyn DiagnosticsSink>,
}

/// Trait-object form of [`Env`], used throughout the resolution pipeline.
pub type BlendEnv<'a> = Env<
    'a,
    dyn IngredientOracle + 'a,
    dyn ProductOracle + 'a,
    dyn RecipeOracle + 'a,
>;

impl<'a, I, P, R> Env<'a, I, P, R>
where
    I: IngredientOracle + ?Sized,
    P: ProductOracle + ?Sized,
    R: RecipeOracle + ?Sized,
{
    pub fn new(
        ingredients: Option<&'a I>,
        products: Option<&'a P>,
        recipes: Option<&'a R>,
        sink: Option<&'a dyn DiagnosticsSink>,
    ) -> Self {
        Self {
            ingredients,
            products,
            recipes,
            sink,
        }
    }

    pub fn with_all(ingredients: &'a I, products: &'a P, recipes: &'a R) -> Self {
        Self::new(Some(ingredients), Some(products), Some(recipes), None)
    }

    pub fn empty() -> Self {
        Self {
            ingredients: None,
            products: None,
            recipes: None,
            sink: None,
        }
    }

    /// Attaches a diagnostics sink (builder pattern).
    #[must_use]
    pub fn with_sink(mut self, sink: &'a dyn DiagnosticsSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Returns the IngredientOracle, or an error if not available.
    pub fn ingredients(&self) -> Result<&'a I, OracleError> {
        self.ingredients.ok_or(OracleError::IngredientsNotAvailable)
    }

    /// Returns the ProductOracle, or an error if not available.
    pub fn products(&self) -> Result<&'a P, OracleError> {
        self.products.ok_or(OracleError::ProductsNotAvailable)
    }

    /// Returns the RecipeOracle, or an error if not available.
    pub fn recipes(&self) -> Result<&'a R, OracleError> {
        self.recipes.ok_or(OracleError::RecipesNotAvailable)
    }

    /// Reports an internal-consistency event to the sink, if one is attached.
    pub fn report(&self, event: Diagnostic) {
        if let Some(sink) = self.sink {
            sink.report(&event);
        }
    }
}

impl<'a, I, P, R> Env<'a, I, P, R>
where
    I: IngredientOracle + 'a,
    P: ProductOracle + 'a,
    R: RecipeOracle + 'a,
{
    /// Converts this environment into the trait-object based [`BlendEnv`].
    pub fn into_blend_env(self) -> BlendEnv<'a> {
        let ingredients: Option<&'a dyn IngredientOracle> =
            self.ingredients.map(|oracle| oracle as _);
        let products: Option<&'a dyn ProductOracle> = self.products.map(|oracle| oracle as _);
        let recipes: Option<&'a dyn RecipeOracle> = self.recipes.map(|oracle| oracle as _);
        Env::new(ingredients, products, recipes, self.sink)
    }
}

impl<'a, I, P, R> core::fmt::Debug for Env<'a, I, P, R>
where
    I: IngredientOracle + ?Sized,
    P: ProductOracle + ?Sized,
    R: RecipeOracle + ?Sized,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Env")
            .field("ingredients", &self.ingredients.is_some())
            .field("products", &self.products.is_some())
            .field("recipes", &self.recipes.is_some())
            .field("sink", &self.sink.is_some())
            .finish()
    }
}
