//! Product records and delivery categories.

use crate::model::item::ItemNumber;

/// The six delivery methods a product can take.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Category {
    Tea,
    Salve,
    Tincture,
    Decoction,
    Bath,
    Incense,
}

/// A finished herbal product.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    pub number: ItemNumber,
    pub name: String,
    pub macro_name: Option<String>,
    pub category: Category,
    pub flavor_text: Option<String>,
    pub rules_text: Option<String>,
    pub skip_export: bool,
    pub skip_prod: bool,
}

impl Product {
    /// Starts building a product with the given identity.
    pub fn builder(number: ItemNumber, name: impl Into<String>, category: Category) -> ProductBuilder {
        ProductBuilder {
            inner: Product {
                number,
                name: name.into(),
                macro_name: None,
                category,
                flavor_text: None,
                rules_text: None,
                skip_export: false,
                skip_prod: false,
            },
        }
    }
}

/// Builder for [`Product`].
#[derive(Clone, Debug)]
pub struct ProductBuilder {
    inner: Product,
}

impl ProductBuilder {
    pub fn macro_name(mut self, value: impl Into<String>) -> Self {
        self.inner.macro_name = Some(value.into());
        self
    }

    pub fn flavor_text(mut self, value: impl Into<String>) -> Self {
        self.inner.flavor_text = Some(value.into());
        self
    }

    pub fn rules_text(mut self, value: impl Into<String>) -> Self {
        self.inner.rules_text = Some(value.into());
        self
    }

    pub fn skip_export(mut self, value: bool) -> Self {
        self.inner.skip_export = value;
        self
    }

    pub fn skip_prod(mut self, value: bool) -> Self {
        self.inner.skip_prod = value;
        self
    }

    pub fn build(self) -> Product {
        self.inner
    }
}
