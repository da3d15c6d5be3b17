use crate::model::{Category, ItemNumber, Product};

/// Read-only access to product records and the ruined-product registry.
pub trait ProductOracle: Send + Sync {
    /// Looks up a product by item number.
    fn product(&self, number: ItemNumber) -> Option<Product>;

    /// Returns the item number of the category's canonical ruined product,
    /// if one is registered.
    fn ruined_product_number(&self, category: Category) -> Option<ItemNumber>;
}
