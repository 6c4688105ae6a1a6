//! Utilities for building product fixtures in tests, available under the `test_utils` feature.

use log::*;
use rand::Rng;

use crate::product_types::{
    BranchStock,
    LocalizedText,
    Product,
    ProductAttribute,
    Variation,
    VariationLocalizedText,
};

/// Installs the env_logger backend so `RUST_LOG` works in tests. Safe to call from every test; only the first call
/// does anything.
pub fn init_test_logging() {
    let _ = env_logger::try_init();
    debug!("Logging initialised");
}

/// A product id in the range the item service hands out, for fixtures where the exact value is irrelevant.
pub fn random_product_id() -> i64 {
    let mut rng = rand::thread_rng();
    rng.gen_range(1_000_000..100_000_000)
}

//--------------------------------------    ProductBuilder   ---------------------------------------------------------
/// Builds [`Product`] fixtures. Starts from a live (not deleted) record; `with_variation` flips `has_variations` so
/// the fixture obeys the stock/attribute ownership rule automatically.
#[derive(Debug, Clone)]
pub struct ProductBuilder {
    product: Product,
}

impl ProductBuilder {
    pub fn new(id: i64) -> Self {
        let product = Product { id, deleted: false, ..Product::default() };
        Self { product }
    }

    pub fn named(mut self, language: &str, name: &str, description: &str) -> Self {
        self.product.localized_texts.push(LocalizedText {
            language_code: language.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            ..LocalizedText::default()
        });
        self
    }

    pub fn priced(mut self, original: i64, new: i64, cost: i64) -> Self {
        self.product.original_price = original.into();
        self.product.new_price = new.into();
        self.product.cost_price = cost.into();
        self
    }

    pub fn with_branch_stock(mut self, branch_id: i64, total_units: i64, sold_units: i64) -> Self {
        self.product.branch_stocks.push(BranchStock { branch_id, total_units, sold_units });
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str, is_displayed: bool) -> Self {
        self.product.attributes.push(ProductAttribute {
            name: name.to_string(),
            value: value.to_string(),
            is_displayed,
        });
        self
    }

    pub fn with_variation(mut self, variation: Variation) -> Self {
        self.product.has_variations = true;
        self.product.variations.push(variation);
        self
    }

    pub fn build(self) -> Product {
        self.product
    }
}

//--------------------------------------   VariationBuilder  ---------------------------------------------------------
/// Builds [`Variation`] fixtures for [`ProductBuilder::with_variation`].
#[derive(Debug, Clone)]
pub struct VariationBuilder {
    variation: Variation,
}

impl VariationBuilder {
    pub fn new(id: i64) -> Self {
        let variation = Variation { id, ..Variation::default() };
        Self { variation }
    }

    pub fn priced(mut self, original: i64, new: i64, cost: i64) -> Self {
        self.variation.original_price = original.into();
        self.variation.new_price = new.into();
        self.variation.cost_price = cost.into();
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.variation.status = status.to_string();
        self
    }

    pub fn with_barcode(mut self, barcode: &str) -> Self {
        self.variation.barcode = Some(barcode.to_string());
        self
    }

    pub fn localized(mut self, language: &str, name: &str, label: &str) -> Self {
        self.variation.localized_texts.push(VariationLocalizedText {
            language_code: language.to_string(),
            name: name.to_string(),
            label: label.to_string(),
            ..VariationLocalizedText::default()
        });
        self
    }

    /// Sets the optional version texts for `language`, updating the existing entry for that language if one was
    /// added with [`localized`](Self::localized) so language codes stay unique.
    pub fn with_version_text(mut self, language: &str, version_name: &str, description: Option<&str>) -> Self {
        match self.variation.localized_texts.iter_mut().find(|t| t.language_code == language) {
            Some(text) => {
                text.version_name = Some(version_name.to_string());
                text.description = description.map(String::from);
            },
            None => self.variation.localized_texts.push(VariationLocalizedText {
                language_code: language.to_string(),
                version_name: Some(version_name.to_string()),
                description: description.map(String::from),
                ..VariationLocalizedText::default()
            }),
        }
        self
    }

    pub fn with_branch_stock(mut self, branch_id: i64, total_units: i64, sold_units: i64) -> Self {
        self.variation.branch_stocks.push(BranchStock { branch_id, total_units, sold_units });
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str, is_displayed: bool) -> Self {
        self.variation.attributes.push(ProductAttribute {
            name: name.to_string(),
            value: value.to_string(),
            is_displayed,
        });
        self
    }

    pub fn build(self) -> Variation {
        self.variation
    }
}
