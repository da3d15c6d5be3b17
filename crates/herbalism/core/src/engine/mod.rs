//! Blend orchestration, the engine's single inbound surface.
//!
//! [`BlendEngine::resolve`] takes raw submitted identifiers and drives the
//! whole pipeline: lookup, classification, chakra aggregation, recipe
//! resolution. Once every identifier resolves to an ingredient, the call is
//! total: it always ends in a product and quantity, however degraded.

use arrayvec::ArrayVec;

use crate::chakra;
use crate::classify::{self, Classification};
use crate::config::EngineConfig;
use crate::env::{BlendEnv, OracleError};
use crate::model::{Ingredient, ItemNumber, Product};
use crate::resolve;

/// Result of one successful blend resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlendOutcome {
    pub product: Product,
    /// Always at least 1.
    pub quantity: u32,
}

/// Failures surfaced to the caller.
///
/// Only these abort a resolution; everything past ingredient lookup degrades
/// to a concrete product instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BlendError {
    #[error("at least one ingredient is required")]
    EmptyBlend,

    #[error("maximum of {max} ingredients allowed, got {got}")]
    TooManyIngredients { max: usize, got: usize },

    #[error("the following item numbers cannot be used for herbalism: {}", .0.join(", "))]
    UnknownIngredients(Vec<String>),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

/// Deterministic blend resolver.
///
/// Stateless apart from its configuration: every call is independent, so one
/// engine may serve arbitrarily many concurrent resolutions as long as the
/// store supports concurrent reads.
#[derive(Clone, Debug, Default)]
pub struct BlendEngine {
    config: EngineConfig,
}

impl BlendEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolves 1-6 submitted identifiers into a product and quantity.
    ///
    /// Identifiers are sorted descending, then each is looked up; every
    /// identifier that fails to parse or resolve is collected, and any
    /// failure aborts before classification with the full list.
    pub fn resolve<S: AsRef<str>>(
        &self,
        env: BlendEnv<'_>,
        identifiers: &[S],
    ) -> Result<BlendOutcome, BlendError> {
        if identifiers.is_empty() {
            return Err(BlendError::EmptyBlend);
        }
        if identifiers.len() > EngineConfig::MAX_INGREDIENTS {
            return Err(BlendError::TooManyIngredients {
                max: EngineConfig::MAX_INGREDIENTS,
                got: identifiers.len(),
            });
        }

        let mut submitted: Vec<&str> = identifiers.iter().map(AsRef::as_ref).collect();
        submitted.sort_unstable_by(|a, b| b.cmp(a));

        let mut ingredients: ArrayVec<Ingredient, { EngineConfig::MAX_INGREDIENTS }> =
            ArrayVec::new();
        let mut unknown: Vec<String> = Vec::new();

        for raw in submitted {
            let Ok(number) = raw.trim().parse::<ItemNumber>() else {
                unknown.push(raw.to_owned());
                continue;
            };
            match env.ingredients()?.ingredient(number) {
                Some(ingredient) => ingredients.push(ingredient),
                None => unknown.push(raw.to_owned()),
            }
        }

        if !unknown.is_empty() {
            return Err(BlendError::UnknownIngredients(unknown));
        }

        let category = match classify::classify(&env, &self.config, &ingredients)? {
            Classification::Finished(product) => {
                return Ok(BlendOutcome {
                    product,
                    quantity: 1,
                });
            }
            Classification::Category(category) => category,
        };

        let profile = chakra::aggregate(&ingredients);
        let (product, quantity) =
            resolve::resolve(&env, &self.config, category, &ingredients, &profile)?;

        Ok(BlendOutcome { product, quantity })
    }
}
