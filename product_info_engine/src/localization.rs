//! Language-keyed text resolution for products and their variations.
//!
//! Product-level lookups resolve against `localized_texts` and return the empty string when the language is absent.
//! Variation-level lookups add a second layer: a variation may carry its own text for a language, carry the entry
//! but leave a field unset, or miss the language entirely. The version accessors collapse all three absences into a
//! fallback to the product-level text, so callers always receive a displayable string.

use crate::product_types::{LocalizedText, Product, Variation, VariationLocalizedText};

//--------------------------------------  Product texts  --------------------------------------------------------------
impl Product {
    /// The product-level text block for `language`, if the store has entered one.
    pub fn localized_text(&self, language: &str) -> Option<&LocalizedText> {
        self.localized_texts.iter().find(|t| t.language_code == language)
    }

    /// Product name in `language`, or the empty string when no entry exists for that language.
    pub fn main_name(&self, language: &str) -> String {
        self.localized_text(language).map(|t| t.name.clone()).unwrap_or_default()
    }

    /// Product description in `language`, or the empty string when no entry exists for that language.
    pub fn main_description(&self, language: &str) -> String {
        self.localized_text(language).map(|t| t.description.clone()).unwrap_or_default()
    }

    /// The label of the variation group (for example "Size" or "Màu sắc") in `language`, read from the first
    /// variation. The empty string when the first variation has no entry for `language`.
    ///
    /// # Panics
    /// Panics when the product has no variations. Callers are expected to check `has_variations` first.
    pub fn variation_group_label(&self, language: &str) -> String {
        let first = &self.variations[0];
        first.localized_text(language).map(|t| t.label.clone()).unwrap_or_default()
    }

    /// Display name of the variation with id `model_id` in `language`.
    ///
    /// Falls back to [`main_name`](Self::main_name) when the variation does not exist, has no entry for `language`,
    /// or has an entry without a version name.
    pub fn version_name(&self, model_id: i64, language: &str) -> String {
        self.variations
            .iter()
            .find(|v| v.id == model_id)
            .and_then(|v| v.localized_text(language))
            .and_then(|t| t.version_name.clone())
            .unwrap_or_else(|| self.main_name(language))
    }

    /// Description of the variation with id `model_id` in `language`, falling back to
    /// [`main_description`](Self::main_description) under the same rules as [`version_name`](Self::version_name).
    pub fn version_description(&self, model_id: i64, language: &str) -> String {
        self.variations
            .iter()
            .find(|v| v.id == model_id)
            .and_then(|v| v.localized_text(language))
            .and_then(|t| t.description.clone())
            .unwrap_or_else(|| self.main_description(language))
    }

    /// The per-variation display names for `language`, in variation order. Variations without an entry for
    /// `language` are skipped, so the result can be shorter than `variations`.
    pub fn variation_values(&self, language: &str) -> Vec<String> {
        self.variations.iter().filter_map(|v| v.localized_text(language).map(|t| t.name.clone())).collect()
    }

    /// The `index`-th entry of [`variation_values`](Self::variation_values), or the empty string when the resolved
    /// list is shorter than that. The index addresses the filtered list, not `variations`.
    pub fn variation_value_at(&self, index: usize, language: &str) -> String {
        self.variation_values(language).get(index).cloned().unwrap_or_default()
    }
}

//-------------------------------------- Variation texts --------------------------------------------------------------
impl Variation {
    /// The variation's text block for `language`, if one was entered.
    pub fn localized_text(&self, language: &str) -> Option<&VariationLocalizedText> {
        self.localized_texts.iter().find(|t| t.language_code == language)
    }
}
