//! Product Information Engine
//!
//! Read-only derivation layer over the seller platform's product-detail payload. The dashboard's item service
//! returns one denormalized document per product (prices, per-language texts, per-branch stock, attributes, and the
//! variation list); this crate decodes that document into an immutable [`Product`] graph and answers the questions
//! the test suites keep asking of it:
//!
//! 1. Localized text resolution — per-language names and descriptions, including the fallback chain from a
//!    variation's own text to the product-level text for the same language.
//! 2. Pricing and identity projections — listing/selling/cost prices, variation ids, barcodes and statuses, in
//!    variation order.
//! 3. Stock aggregation — the stock-by-model map ([`StockByModel`]), keyed by [`StockKey`], with per-branch
//!    availability, totals and the in-stock flag.
//! 4. Attribute projection — display flags, names and values, sourced from the variation or the product root
//!    depending on `hasVariations`.
//!
//! Everything here is pure: no I/O, no caching, no shared state. Fetching the document over HTTP is the calling
//! harness's job; the [`product_from_response`] boundary turns its raw `(status, body)` outcome into a `Product`
//! (resolving 404 into a minimal deleted record) so the interpretation rules live in one place.

mod api;
mod attributes;
mod errors;
mod localization;
mod pricing;
pub mod product_types;
mod stock;

#[cfg(any(feature = "test_utils", test))]
pub mod test_utils;

pub use api::{product_detail_path, product_from_response};
pub use errors::{ProductApiError, StockError};
pub use product_types::{
    BranchStock,
    LocalizedText,
    Product,
    ProductAttribute,
    ShippingInfo,
    Variation,
    VariationLocalizedText,
};
pub use stock::{StockByModel, StockKey};
