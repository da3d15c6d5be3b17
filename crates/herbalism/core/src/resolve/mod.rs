//! Recipe resolution.
//!
//! Once a blend has a category, resolution walks a strict precedence chain:
//! subset recipes, the tier-0 short circuit, the special single-ingredient
//! rules, then constraint recipes. Every declined path falls to the next;
//! the chain always ends in a product.

mod specials;

use crate::chakra::ChakraProfile;
use crate::config::EngineConfig;
use crate::env::{BlendEnv, Diagnostic, OracleError};
use crate::fallback;
use crate::model::{Category, Ingredient, ItemNumber, Product};

/// Resolves a categorized blend into a product and quantity.
pub fn resolve(
    env: &BlendEnv<'_>,
    config: &EngineConfig,
    category: Category,
    ingredients: &[Ingredient],
    profile: &ChakraProfile,
) -> Result<(Product, u32), OracleError> {
    let numbers: Vec<ItemNumber> = ingredients.iter().map(|ing| ing.number).collect();

    // Subset recipes override everything; the store returns matches largest
    // first, earliest inserted first within a size.
    let subset_matches = env.recipes()?.subset_recipes(category, &numbers);
    if let Some(best) = subset_matches.first() {
        match env.products()?.product(best.product) {
            Some(product) => return Ok((product, best.quantity)),
            None => {
                // Dangling product number: fall through to the general rules.
                env.report(Diagnostic::MissingProduct {
                    number: best.product.to_string(),
                    context: "subset_recipe",
                });
            }
        }
    }

    if profile.tier == 0 {
        let ruined = fallback::ruined_product(env, config, category)?;
        return Ok((ruined, 1));
    }

    if let Some(outcome) = specials::apply(env, config, category, ingredients, profile)? {
        return Ok(outcome);
    }

    for recipe in env.recipes()?.constraint_recipes(category) {
        if !recipe.matches(
            &numbers,
            profile.primary_axis(),
            profile.primary_polarity(),
            profile.secondary_axis(),
            profile.secondary_polarity(),
            profile.tier,
        ) {
            continue;
        }
        match env.products()?.product(recipe.product) {
            Some(product) => return Ok((product, recipe.quantity)),
            None => {
                env.report(Diagnostic::MissingProduct {
                    number: recipe.product.to_string(),
                    context: "constraint_recipe",
                });
                let ruined = fallback::ruined_product(env, config, category)?;
                return Ok((ruined, 1));
            }
        }
    }

    // No recipe claimed the blend: a ruined result, not an error.
    let ruined = fallback::ruined_product(env, config, category)?;
    Ok((ruined, 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chakra;
    use crate::model::{ConstraintRecipe, Polarity, SubsetRecipe};
    use crate::testutil::{num, Recorder, TestStore};

    fn ingredient(number: &str, axis: &str, strength: i8) -> Ingredient {
        Ingredient::builder(num(number), "test")
            .primary(axis, strength)
            .build()
    }

    fn tea_store() -> TestStore {
        TestStore {
            products: vec![
                Product::builder(num("6111"), "Calming Tea", Category::Tea).build(),
                Product::builder(num("6112"), "Strong Tea", Category::Tea).build(),
                Product::builder(num("6910"), "Ruined Tea", Category::Tea).build(),
            ],
            ruined: vec![(Category::Tea, num("6910"))],
            ..Default::default()
        }
    }

    #[test]
    fn subset_recipe_overrides_constraint_recipe() {
        let mut store = tea_store();
        store.subset_recipes.push(
            SubsetRecipe::new(num("6111"), Category::Tea, 2, vec![num("5111"), num("5112")])
                .unwrap(),
        );
        store
            .constraint_recipes
            .push(ConstraintRecipe::new(num("6112"), Category::Tea, 1));

        let blend = vec![
            ingredient("5111", "heart", 3),
            ingredient("5112", "heart", 3),
        ];
        let profile = chakra::aggregate(&blend);
        let (product, quantity) = resolve(
            &store.env(None),
            &EngineConfig::default(),
            Category::Tea,
            &blend,
            &profile,
        )
        .unwrap();
        assert_eq!(product.name, "Calming Tea");
        assert_eq!(quantity, 2);
    }

    #[test]
    fn largest_subset_wins() {
        let mut store = tea_store();
        store.subset_recipes.push(
            SubsetRecipe::new(num("6112"), Category::Tea, 1, vec![num("5111")]).unwrap(),
        );
        store.subset_recipes.push(
            SubsetRecipe::new(num("6111"), Category::Tea, 1, vec![num("5111"), num("5112")])
                .unwrap(),
        );

        let blend = vec![
            ingredient("5111", "heart", 3),
            ingredient("5112", "heart", 3),
        ];
        let profile = chakra::aggregate(&blend);
        let (product, _) = resolve(
            &store.env(None),
            &EngineConfig::default(),
            Category::Tea,
            &blend,
            &profile,
        )
        .unwrap();
        assert_eq!(product.name, "Calming Tea");
    }

    #[test]
    fn dangling_subset_product_falls_through() {
        let mut store = tea_store();
        store.subset_recipes.push(
            SubsetRecipe::new(num("6999"), Category::Tea, 1, vec![num("5111")]).unwrap(),
        );
        store.constraint_recipes.push(
            ConstraintRecipe::new(num("6112"), Category::Tea, 1).with_tier(2),
        );

        let blend = vec![
            ingredient("5111", "heart", 3),
            ingredient("5112", "heart", 3),
        ];
        let profile = chakra::aggregate(&blend);
        let recorder = Recorder::default();
        let (product, _) = resolve(
            &store.env(Some(&recorder)),
            &EngineConfig::default(),
            Category::Tea,
            &blend,
            &profile,
        )
        .unwrap();
        assert_eq!(product.name, "Strong Tea");
        assert_eq!(
            recorder.events(),
            vec![Diagnostic::MissingProduct {
                number: "6999".to_owned(),
                context: "subset_recipe",
            }]
        );
    }

    #[test]
    fn tier_zero_short_circuits_to_ruined() {
        let mut store = tea_store();
        // Even a wildcard constraint recipe cannot rescue a tier-0 blend.
        store
            .constraint_recipes
            .push(ConstraintRecipe::new(num("6112"), Category::Tea, 1));

        let blend = vec![ingredient("5111", "heart", 2)];
        let profile = chakra::aggregate(&blend);
        assert_eq!(profile.tier, 0);

        let (product, quantity) = resolve(
            &store.env(None),
            &EngineConfig::default(),
            Category::Tea,
            &blend,
            &profile,
        )
        .unwrap();
        assert_eq!(product.name, "Ruined Tea");
        assert_eq!(quantity, 1);
    }

    #[test]
    fn earliest_inserted_constraint_recipe_wins() {
        let mut store = tea_store();
        store.constraint_recipes.push(
            ConstraintRecipe::new(num("6111"), Category::Tea, 1)
                .with_primary("heart", Polarity::Boon),
        );
        store.constraint_recipes.push(
            ConstraintRecipe::new(num("6112"), Category::Tea, 1)
                .with_primary("heart", Polarity::Boon),
        );

        let blend = vec![
            ingredient("5111", "heart", 3),
            ingredient("5112", "heart", 3),
        ];
        let profile = chakra::aggregate(&blend);
        let (product, _) = resolve(
            &store.env(None),
            &EngineConfig::default(),
            Category::Tea,
            &blend,
            &profile,
        )
        .unwrap();
        assert_eq!(product.name, "Calming Tea");
    }

    #[test]
    fn no_match_yields_ruined_product() {
        let store = tea_store();
        let blend = vec![
            ingredient("5111", "heart", 3),
            ingredient("5112", "heart", 3),
        ];
        let profile = chakra::aggregate(&blend);
        assert!(profile.tier > 0);

        let (product, quantity) = resolve(
            &store.env(None),
            &EngineConfig::default(),
            Category::Tea,
            &blend,
            &profile,
        )
        .unwrap();
        assert_eq!(product.name, "Ruined Tea");
        assert_eq!(quantity, 1);
    }

    #[test]
    fn dangling_constraint_product_degrades_to_ruined() {
        let mut store = tea_store();
        store
            .constraint_recipes
            .push(ConstraintRecipe::new(num("6999"), Category::Tea, 1));

        let blend = vec![
            ingredient("5111", "heart", 3),
            ingredient("5112", "heart", 3),
        ];
        let profile = chakra::aggregate(&blend);
        let recorder = Recorder::default();
        let (product, _) = resolve(
            &store.env(Some(&recorder)),
            &EngineConfig::default(),
            Category::Tea,
            &blend,
            &profile,
        )
        .unwrap();
        assert_eq!(product.name, "Ruined Tea");
        assert_eq!(recorder.events().len(), 1);
    }
}
