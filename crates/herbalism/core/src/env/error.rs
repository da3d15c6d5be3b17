use crate::model::Category;

/// Errors raised when the environment lacks an oracle the engine needs.
///
/// These indicate a mis-assembled environment, not bad player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("ingredient oracle not available in environment")]
    IngredientsNotAvailable,

    #[error("product oracle not available in environment")]
    ProductsNotAvailable,

    #[error("recipe oracle not available in environment")]
    RecipesNotAvailable,
}

/// Internal-consistency events reported to the diagnostics sink.
///
/// None of these abort a resolution: the engine degrades to a ruined product
/// or sludge and keeps going, but each occurrence is worth investigating.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    #[error("{caller}: invalid product category '{label}'")]
    InvalidCategory { label: String, caller: &'static str },

    #[error("no ruined-product registration for category '{category}'")]
    MissingRuinedProduct { category: Category },

    #[error("{context}: product '{number}' not found in store")]
    MissingProduct { number: String, context: &'static str },

    #[error("sludge product '{number}' missing from store, synthesized a default")]
    MissingSludge { number: String },
}
