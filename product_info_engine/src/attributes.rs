//! Attribute projections.
//!
//! Attributes follow the same ownership rule as stock: a varied product's attributes live on its variations, an
//! unvaried product's at product level. The accessors take a variation index so call sites read the same either way;
//! on an unvaried product the index is ignored.

use crate::product_types::{Product, ProductAttribute};

impl Product {
    fn attribute_source(&self, variation_index: usize) -> &[ProductAttribute] {
        if self.has_variations {
            &self.variations[variation_index].attributes
        } else {
            &self.attributes
        }
    }

    /// Attribute names of the variation at `variation_index`, or of the product itself when it has no variations.
    ///
    /// # Panics
    /// Panics when the product has variations and `variation_index` is outside the variation list.
    pub fn attribute_names(&self, variation_index: usize) -> Vec<String> {
        self.attribute_source(variation_index).iter().map(|a| a.name.clone()).collect()
    }

    /// Attribute values, aligned index-for-index with [`attribute_names`](Self::attribute_names).
    ///
    /// # Panics
    /// Panics when the product has variations and `variation_index` is outside the variation list.
    pub fn attribute_values(&self, variation_index: usize) -> Vec<String> {
        self.attribute_source(variation_index).iter().map(|a| a.value.clone()).collect()
    }

    /// Storefront visibility flags, aligned index-for-index with [`attribute_names`](Self::attribute_names).
    ///
    /// # Panics
    /// Panics when the product has variations and `variation_index` is outside the variation list.
    pub fn displayed_attribute_flags(&self, variation_index: usize) -> Vec<bool> {
        self.attribute_source(variation_index).iter().map(|a| a.is_displayed).collect()
    }
}
