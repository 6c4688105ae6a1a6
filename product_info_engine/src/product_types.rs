//! Data model of the item-service product-detail document.
//!
//! The structs mirror the JSON the service returns (camelCase on the wire). Decoding is forward-compatible: unknown
//! fields are dropped and missing fields fall back to the container defaults, so schema additions upstream never
//! break the suite. The graph is immutable once decoded; every query lives in the sibling modules as `impl Product`
//! blocks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sps_common::{MinorUnits, DEFAULT_CURRENCY_CODE};

//--------------------------------------       Product       ---------------------------------------------------------
/// Root entity of a product-detail fetch.
///
/// `has_variations` governs where stock and attributes live: `true` means every stock/attribute query reads from
/// `variations`, `false` means the product-level `branch_stocks`/`attributes` are authoritative. Mixing the two is a
/// data defect upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    /// Denormalized name in the store's default language; per-language values live in `localized_texts`.
    pub name: String,
    pub description: String,
    pub currency: String,
    pub original_price: MinorUnits,
    pub new_price: MinorUnits,
    pub cost_price: MinorUnits,
    pub discount: i64,
    pub has_variations: bool,
    /// Set on records synthesized for a 404; absent in live payloads means deleted, matching the item service.
    pub deleted: bool,
    pub show_out_of_stock: bool,
    pub last_modified_date: Option<DateTime<Utc>>,
    pub shipping_info: ShippingInfo,
    /// One entry per language; `language_code` is unique within the list.
    pub localized_texts: Vec<LocalizedText>,
    /// Per-branch stock counters. Only read when `has_variations` is `false`.
    pub branch_stocks: Vec<BranchStock>,
    /// Only read when `has_variations` is `false`.
    pub attributes: Vec<ProductAttribute>,
    /// Ordered; queries address variations both by index and by id.
    pub variations: Vec<Variation>,
}

impl Default for Product {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            description: String::new(),
            currency: DEFAULT_CURRENCY_CODE.to_string(),
            original_price: MinorUnits::default(),
            new_price: MinorUnits::default(),
            cost_price: MinorUnits::default(),
            discount: 0,
            has_variations: false,
            deleted: true,
            show_out_of_stock: false,
            last_modified_date: None,
            shipping_info: ShippingInfo::default(),
            localized_texts: Vec::new(),
            branch_stocks: Vec::new(),
            attributes: Vec::new(),
            variations: Vec::new(),
        }
    }
}

impl Product {
    /// Minimal record for a product the item service no longer knows (HTTP 404): just the id and the `deleted` flag.
    pub fn not_found(id: i64) -> Self {
        Self { id, ..Self::default() }
    }
}

//--------------------------------------      Variation      ---------------------------------------------------------
/// A purchasable model of a product, with its own prices, stock, texts and attributes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Variation {
    pub id: i64,
    pub sku: Option<String>,
    pub barcode: Option<String>,
    /// Free-text lifecycle label as reported upstream (for example `ACTIVE` or `DEACTIVATED`); not enumerated here.
    pub status: String,
    pub original_price: MinorUnits,
    pub new_price: MinorUnits,
    pub cost_price: MinorUnits,
    pub localized_texts: Vec<VariationLocalizedText>,
    pub branch_stocks: Vec<BranchStock>,
    pub attributes: Vec<ProductAttribute>,
}

//--------------------------------------    LocalizedText    ---------------------------------------------------------
/// Product-level display strings for one language.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocalizedText {
    pub language_code: String,
    pub name: String,
    pub description: String,
    pub seo_title: String,
    pub seo_description: String,
    pub seo_keywords: String,
}

//---------------------------------- VariationLocalizedText ----------------------------------------------------------
/// Variation-level display strings for one language.
///
/// `description` and `version_name` are optional on purpose: a present language entry with an absent field falls
/// back to the product-level text for the same language.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VariationLocalizedText {
    pub language_code: String,
    pub name: String,
    pub label: String,
    pub description: Option<String>,
    pub version_name: Option<String>,
}

//--------------------------------------     BranchStock     ---------------------------------------------------------
/// Stock counters for one branch. `branch_id` is unique within a branch-stock list.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BranchStock {
    pub branch_id: i64,
    pub total_units: i64,
    pub sold_units: i64,
}

impl BranchStock {
    /// Units still available at this branch. Negative when upstream has oversold the branch; not clamped.
    pub fn available_units(&self) -> i64 {
        self.total_units - self.sold_units
    }
}

//------------------------------------   ProductAttribute    ---------------------------------------------------------
/// A name/value attribute with its storefront visibility flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductAttribute {
    pub name: String,
    pub value: String,
    pub is_displayed: bool,
}

//--------------------------------------    ShippingInfo     ---------------------------------------------------------
/// Parcel dimensions as entered on the dashboard.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingInfo {
    pub weight: i64,
    pub width: i64,
    pub height: i64,
    pub length: i64,
}
