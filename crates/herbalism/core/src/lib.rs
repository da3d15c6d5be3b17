//! Deterministic herbal blend resolution.
//!
//! `herbalism-core` turns a submitted multiset of up to six ingredient item
//! numbers into one product plus a quantity, or an aggregated lookup failure.
//! All resolution flows through [`engine::BlendEngine`]; store access and
//! diagnostics go through the read-only capabilities in [`env`], so the whole
//! pipeline runs unchanged against an in-memory fake or a real backend.
pub mod chakra;
pub mod classify;
pub mod config;
pub mod engine;
pub mod env;
pub mod fallback;
pub mod model;
pub mod props;
pub mod resolve;

#[cfg(test)]
pub(crate) mod testutil;

pub use chakra::{AxisTotal, ChakraProfile};
pub use classify::{Classification, validate_category};
pub use config::EngineConfig;
pub use engine::{BlendEngine, BlendError, BlendOutcome};
pub use env::{
    BlendEnv, Diagnostic, DiagnosticsSink, Env, IngredientOracle, NoopSink, OracleError,
    ProductOracle, RecipeOracle,
};
pub use model::{
    Axis, AxisStrength, Category, ConstraintRecipe, Ingredient, IngredientBuilder, ItemNumber,
    ItemNumberError, NumberPattern, PatternError, Polarity, Product, ProductBuilder, RecipeError,
    SubsetRecipe,
};
