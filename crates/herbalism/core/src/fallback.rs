//! Ruined-product and sludge fallbacks.
//!
//! Every degraded path in the engine funnels through here, so a blend always
//! resolves to some product no matter how broken the store data is.

use crate::config::EngineConfig;
use crate::env::{BlendEnv, Diagnostic, OracleError};
use crate::model::{Category, Product};

/// Fetches the category's canonical ruined product.
///
/// A missing registry entry or a dangling product number logs to the sink and
/// degrades to sludge.
pub fn ruined_product(
    env: &BlendEnv<'_>,
    config: &EngineConfig,
    category: Category,
) -> Result<Product, OracleError> {
    let Some(number) = env.products()?.ruined_product_number(category) else {
        env.report(Diagnostic::MissingRuinedProduct { category });
        return sludge(env, config);
    };

    match env.products()?.product(number) {
        Some(product) => Ok(product),
        None => {
            env.report(Diagnostic::MissingProduct {
                number: number.to_string(),
                context: "ruined_product",
            });
            sludge(env, config)
        }
    }
}

/// Fetches the universal sludge product, synthesizing a default if even that
/// row is missing.
pub fn sludge(env: &BlendEnv<'_>, config: &EngineConfig) -> Result<Product, OracleError> {
    if let Some(product) = env.products()?.product(config.sludge_number) {
        return Ok(product);
    }
    env.report(Diagnostic::MissingSludge {
        number: config.sludge_number.to_string(),
    });
    Ok(Product::builder(config.sludge_number, "Sludge", Category::Salve)
        .flavor_text("A goopy, unpleasant mess.")
        .rules_text("This blend has failed. It has no useful properties.")
        .build())
}
