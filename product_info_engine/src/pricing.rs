//! Price and identity projections over the variation list.
//!
//! Every accessor comes in a list form and an indexed form. The indexed price accessors require a valid index and
//! panic outside the variation list; the id and status accessors instead return the `-1` / empty-string sentinels the
//! rest of the suite matches on.

use sps_common::MinorUnits;

use crate::product_types::Product;

impl Product {
    //--------------------------------------      Prices      --------------------------------------------------------
    /// Listing (pre-discount) price of every variation, in variation order.
    pub fn listing_prices(&self) -> Vec<MinorUnits> {
        self.variations.iter().map(|v| v.original_price).collect()
    }

    /// Listing price of the variation at `index`.
    ///
    /// # Panics
    /// Panics when `index` is outside the variation list.
    pub fn listing_price_at(&self, index: usize) -> MinorUnits {
        self.variations[index].original_price
    }

    /// Selling (post-discount) price of every variation, in variation order.
    pub fn selling_prices(&self) -> Vec<MinorUnits> {
        self.variations.iter().map(|v| v.new_price).collect()
    }

    /// Selling price of the variation at `index`.
    ///
    /// # Panics
    /// Panics when `index` is outside the variation list.
    pub fn selling_price_at(&self, index: usize) -> MinorUnits {
        self.variations[index].new_price
    }

    /// Cost price of every variation, in variation order.
    pub fn cost_prices(&self) -> Vec<MinorUnits> {
        self.variations.iter().map(|v| v.cost_price).collect()
    }

    /// Cost price of the variation at `index`.
    ///
    /// # Panics
    /// Panics when `index` is outside the variation list.
    pub fn cost_price_at(&self, index: usize) -> MinorUnits {
        self.variations[index].cost_price
    }

    //--------------------------------------     Identity     --------------------------------------------------------
    /// Ids of every variation, in variation order.
    pub fn variation_ids(&self) -> Vec<i64> {
        self.variations.iter().map(|v| v.id).collect()
    }

    /// Id of the variation at `index`, or `-1` when `index` is outside the variation list.
    pub fn variation_id_at(&self, index: usize) -> i64 {
        self.variations.get(index).map(|v| v.id).unwrap_or(-1)
    }

    /// Barcode of every variation, in variation order. Variations without a barcode contribute the empty string, so
    /// the result always lines up index-for-index with `variations`.
    pub fn barcodes(&self) -> Vec<String> {
        self.variations.iter().map(|v| v.barcode.clone().unwrap_or_default()).collect()
    }

    /// Status label of the variation at `index`, or the empty string when `index` is outside the variation list.
    pub fn variation_status_at(&self, index: usize) -> String {
        self.variations.get(index).map(|v| v.status.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
mod test {
    use sps_common::MinorUnits;

    use crate::test_utils::{ProductBuilder, VariationBuilder};

    fn two_variation_product() -> crate::Product {
        ProductBuilder::new(90)
            .with_variation(
                VariationBuilder::new(901)
                    .priced(150_000, 120_000, 80_000)
                    .with_status("ACTIVE")
                    .with_barcode("8931234500017")
                    .build(),
            )
            .with_variation(VariationBuilder::new(902).priced(180_000, 145_000, 95_000).with_status("DEACTIVATED").build())
            .build()
    }

    #[test]
    fn price_lists_follow_variation_order() {
        let product = two_variation_product();
        assert_eq!(product.listing_prices(), vec![MinorUnits::from(150_000), MinorUnits::from(180_000)]);
        assert_eq!(product.selling_prices(), vec![MinorUnits::from(120_000), MinorUnits::from(145_000)]);
        assert_eq!(product.cost_prices(), vec![MinorUnits::from(80_000), MinorUnits::from(95_000)]);
    }

    #[test]
    fn indexed_prices_match_the_lists() {
        let product = two_variation_product();
        assert_eq!(product.listing_price_at(1), MinorUnits::from(180_000));
        assert_eq!(product.selling_price_at(0), MinorUnits::from(120_000));
        assert_eq!(product.cost_price_at(1), MinorUnits::from(95_000));
    }

    #[test]
    #[should_panic]
    fn indexed_price_panics_out_of_range() {
        two_variation_product().listing_price_at(2);
    }

    #[test]
    fn variation_ids_and_sentinel() {
        let product = two_variation_product();
        assert_eq!(product.variation_ids(), vec![901, 902]);
        assert_eq!(product.variation_id_at(0), 901);
        assert_eq!(product.variation_id_at(7), -1);
    }

    #[test]
    fn barcodes_fill_missing_entries_with_empty_strings() {
        let product = two_variation_product();
        assert_eq!(product.barcodes(), vec!["8931234500017".to_string(), String::new()]);
    }

    #[test]
    fn status_uses_the_empty_string_sentinel() {
        let product = two_variation_product();
        assert_eq!(product.variation_status_at(0), "ACTIVE");
        assert_eq!(product.variation_status_at(1), "DEACTIVATED");
        assert_eq!(product.variation_status_at(9), "");
    }

    #[test]
    fn an_unvaried_product_projects_empty_lists() {
        let product = ProductBuilder::new(91).priced(99_000, 89_000, 50_000).build();
        assert!(product.listing_prices().is_empty());
        assert!(product.variation_ids().is_empty());
        assert!(product.barcodes().is_empty());
        assert_eq!(product.variation_id_at(0), -1);
    }
}
