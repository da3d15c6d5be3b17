//! Product-type classification.

use core::str::FromStr;

use crate::config::EngineConfig;
use crate::env::{BlendEnv, Diagnostic, OracleError};
use crate::fallback;
use crate::model::{Category, Ingredient, Product};
use crate::props;

/// Outcome of classification: either the blend already resolved to a finished
/// (ruined) product, or a category for the recipe resolver to work with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    Finished(Product),
    Category(Category),
}

/// Maps an ingredient set to its delivery category.
///
/// Evaluated in order: the alcohol count decides the family, then
/// ingestible/aromatic/salt refine it. Too much alcohol, or two alcohols over
/// something not fully ingestible, short-circuits to the ruined tincture.
pub fn classify(
    env: &BlendEnv<'_>,
    config: &EngineConfig,
    ingredients: &[Ingredient],
) -> Result<Classification, OracleError> {
    let alcohol_count = props::count_having(ingredients, props::ALCOHOL);
    let all_ingestible = props::all_have(ingredients, props::INGESTIBLE);

    let category = match alcohol_count {
        count if count > EngineConfig::MAX_ALCOHOL => {
            let ruined = fallback::ruined_product(env, config, Category::Tincture)?;
            return Ok(Classification::Finished(ruined));
        }
        2 => {
            if all_ingestible {
                Category::Tincture
            } else {
                let ruined = fallback::ruined_product(env, config, Category::Tincture)?;
                return Ok(Classification::Finished(ruined));
            }
        }
        1 => {
            if all_ingestible {
                Category::Tincture
            } else if props::any_has(ingredients, props::AROMATIC) {
                Category::Incense
            } else {
                Category::Decoction
            }
        }
        _ => {
            if all_ingestible {
                Category::Tea
            } else if props::any_has(ingredients, props::SALT) {
                Category::Bath
            } else {
                Category::Salve
            }
        }
    };

    Ok(Classification::Category(category))
}

/// Parses a category label, failing closed.
///
/// An unknown label reports to the sink and yields `None`. Callers that take
/// category strings from outside (command surfaces, imports) go through here
/// so a bad label never reaches the resolver.
pub fn validate_category(
    env: &BlendEnv<'_>,
    label: &str,
    caller: &'static str,
) -> Option<Category> {
    match Category::from_str(label.trim()) {
        Ok(category) => Some(category),
        Err(_) => {
            env.report(Diagnostic::InvalidCategory {
                label: label.to_owned(),
                caller,
            });
            None
        }
    }
}
