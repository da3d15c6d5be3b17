//! Special single-ingredient rules.
//!
//! Between the tier-0 check and constraint matching, three narrow rules give
//! certain marked ingredients a product of their own. Rules are tried in
//! order; within each rule, ingredients are scanned ascending by item number.
//! A rule that does not fully apply declines rather than failing the blend.

use crate::chakra::ChakraProfile;
use crate::config::EngineConfig;
use crate::env::{BlendEnv, Diagnostic, OracleError};
use crate::model::{Category, Ingredient, ItemNumber, Polarity, Product};

const BANE_MARKER: u8 = b'8';
const BOON_MARKER: u8 = b'9';

/// Applies the special rules. `Ok(None)` means every rule declined.
pub(crate) fn apply(
    env: &BlendEnv<'_>,
    config: &EngineConfig,
    category: Category,
    ingredients: &[Ingredient],
    profile: &ChakraProfile,
) -> Result<Option<(Product, u32)>, OracleError> {
    let Some(primary) = &profile.primary else {
        return Ok(None);
    };
    let polarity = primary.polarity();

    let mut ascending: Vec<&Ingredient> = ingredients.iter().collect();
    ascending.sort_by_key(|ing| ing.number);

    // Healing rule: the designated healing ingredient plus a boon primary
    // yields the category's healing product. Categories without a configured
    // healing product decline.
    if polarity == Polarity::Boon
        && ascending
            .iter()
            .any(|ing| ing.number == config.special_healing_ingredient)
    {
        if let Some(number) = config.healing_products.get(&category) {
            match env.products()?.product(*number) {
                Some(product) => return Ok(Some((product, 1))),
                None => env.report(Diagnostic::MissingProduct {
                    number: number.to_string(),
                    context: "healing_rule",
                }),
            }
        }
    }

    // Marker rules: an ingredient whose third digit is 8 (bane) or 9 (boon)
    // and whose own primary axis drives the blend maps to a product built
    // from its axis digit, the marker, and the clamped tier.
    let marker = match polarity {
        Polarity::Bane => BANE_MARKER,
        Polarity::Boon => BOON_MARKER,
    };
    for ingredient in &ascending {
        if ingredient.number.marker_digit() != marker {
            continue;
        }
        let own_axis = ingredient.primary.as_ref().map(|reading| &reading.axis);
        if own_axis != Some(&primary.axis) {
            continue;
        }
        let number = ItemNumber::product_for(ingredient.number.axis_digit(), marker, profile.tier);
        match env.products()?.product(number) {
            Some(product) => return Ok(Some((product, 1))),
            None => env.report(Diagnostic::MissingProduct {
                number: number.to_string(),
                context: "marker_rule",
            }),
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chakra;
    use crate::testutil::{num, Recorder, TestStore};

    fn healing_lotus() -> Ingredient {
        // Item 5419: heart axis (digit 4), designated healing ingredient.
        Ingredient::builder(num("5419"), "Healing Lotus")
            .primary("heart", 3)
            .build()
    }

    fn config_with_healing() -> EngineConfig {
        EngineConfig::default().with_healing_product(Category::Tea, num("6401"))
    }

    #[test]
    fn healing_rule_fires_on_boon_primary() {
        let store = TestStore {
            products: vec![
                Product::builder(num("6401"), "Mending Tea", Category::Tea).build(),
            ],
            ..Default::default()
        };
        let blend = vec![healing_lotus(), Ingredient::builder(num("5111"), "Chamomile")
            .primary("heart", 2)
            .build()];
        let profile = chakra::aggregate(&blend);
        assert_eq!(profile.primary_polarity(), Some(Polarity::Boon));

        let result = apply(
            &store.env(None),
            &config_with_healing(),
            Category::Tea,
            &blend,
            &profile,
        )
        .unwrap();
        let (product, quantity) = result.expect("healing rule should fire");
        assert_eq!(product.name, "Mending Tea");
        assert_eq!(quantity, 1);
    }

    #[test]
    fn healing_rule_declines_on_bane_primary() {
        let store = TestStore::default();
        let blend = vec![
            healing_lotus(),
            Ingredient::builder(num("5111"), "Nightshade")
                .primary("heart", -3)
                .build(),
            Ingredient::builder(num("5112"), "Wormwood")
                .primary("heart", -3)
                .build(),
        ];
        let profile = chakra::aggregate(&blend);
        assert_eq!(profile.primary_polarity(), Some(Polarity::Bane));

        let result = apply(
            &store.env(None),
            &config_with_healing(),
            Category::Tea,
            &blend,
            &profile,
        )
        .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn bane_marker_matches_axis_and_constructs_product() {
        // 5382: axis digit 3, marker 8.
        let cursed = Ingredient::builder(num("5382"), "Grave Moss")
            .primary("throat", -3)
            .build();
        let filler = Ingredient::builder(num("5381"), "Ash Root")
            .primary("throat", -3)
            .build();
        let blend = vec![cursed, filler];
        let profile = chakra::aggregate(&blend);
        // Total -6: tier 1 banded, +1 no secondary = 2. Product 6382.
        assert_eq!(profile.tier, 2);

        let store = TestStore {
            products: vec![
                Product::builder(num("6382"), "Silencing Salve", Category::Salve).build(),
            ],
            ..Default::default()
        };
        let result = apply(
            &store.env(None),
            &EngineConfig::default(),
            Category::Salve,
            &blend,
            &profile,
        )
        .unwrap();
        assert_eq!(result.unwrap().0.name, "Silencing Salve");
    }

    #[test]
    fn marker_rule_declines_on_axis_mismatch() {
        // Marker ingredient's own axis is not the blend's primary axis.
        let marked = Ingredient::builder(num("5382"), "Grave Moss")
            .primary("throat", -1)
            .build();
        let dominant = Ingredient::builder(num("5111"), "Nightshade")
            .primary("root", -3)
            .build();
        let second = Ingredient::builder(num("5112"), "Wormwood")
            .primary("root", -3)
            .build();
        let blend = vec![marked, dominant, second];
        let profile = chakra::aggregate(&blend);
        assert_eq!(profile.primary_axis().unwrap().as_str(), "root");

        let store = TestStore::default();
        let result = apply(
            &store.env(None),
            &EngineConfig::default(),
            Category::Salve,
            &blend,
            &profile,
        )
        .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn missing_marker_product_logs_and_declines() {
        let marked = Ingredient::builder(num("5493"), "Sun Petal")
            .primary("heart", 3)
            .build();
        let second = Ingredient::builder(num("5412"), "Rose Hip")
            .primary("heart", 3)
            .build();
        let blend = vec![marked, second];
        let profile = chakra::aggregate(&blend);
        assert_eq!(profile.primary_polarity(), Some(Polarity::Boon));

        let store = TestStore::default();
        let recorder = Recorder::default();
        let result = apply(
            &store.env(Some(&recorder)),
            &EngineConfig::default(),
            Category::Tea,
            &blend,
            &profile,
        )
        .unwrap();
        assert!(result.is_none());
        assert_eq!(
            recorder.events(),
            vec![Diagnostic::MissingProduct {
                number: "6492".to_owned(),
                context: "marker_rule",
            }]
        );
    }
}
