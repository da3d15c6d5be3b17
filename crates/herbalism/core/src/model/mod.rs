//! Data model shared by the engine and store implementations.
//!
//! Records are immutable once loaded: the store owns them, the engine only
//! reads. Item numbers, axes, and categories are small value types with
//! normalized representations so every comparison in the rules is exact.
mod axis;
mod ingredient;
mod item;
mod pattern;
mod product;
mod recipe;

pub use axis::{Axis, AxisStrength, Polarity};
pub use ingredient::{Ingredient, IngredientBuilder};
pub use item::{INGREDIENT_DOMAIN, ItemNumber, ItemNumberError, PRODUCT_DOMAIN};
pub use pattern::{NumberPattern, PatternError};
pub use product::{Category, Product, ProductBuilder};
pub use recipe::{ConstraintRecipe, RecipeError, SubsetRecipe};
