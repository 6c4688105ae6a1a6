//! Stock aggregation across variations and branches.
//!
//! The source of truth switches on `has_variations`: a varied product's stock lives on its variations and the
//! product-level `branch_stocks` are ignored, an unvaried product's stock lives at product level. [`StockByModel`]
//! normalizes both shapes into one model-keyed view so downstream assertions never branch on product shape. The view
//! is rebuilt from the document on every call; nothing is cached.

use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter},
};

use crate::{
    errors::StockError,
    product_types::{BranchStock, Product},
};

//--------------------------------------       StockKey      ---------------------------------------------------------
/// Identifies whose stock a model-keyed entry describes: the base product of an unvaried product, or one variation
/// of a varied one. A given [`StockByModel`] only ever contains one of the two kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StockKey {
    NoVariation,
    Variation(i64),
}

impl From<i64> for StockKey {
    fn from(model_id: i64) -> Self {
        StockKey::Variation(model_id)
    }
}

impl From<Option<i64>> for StockKey {
    fn from(model_id: Option<i64>) -> Self {
        match model_id {
            Some(id) => StockKey::Variation(id),
            None => StockKey::NoVariation,
        }
    }
}

impl Display for StockKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StockKey::NoVariation => write!(f, "base product"),
            StockKey::Variation(id) => write!(f, "variation {id}"),
        }
    }
}

//--------------------------------------     StockByModel    ---------------------------------------------------------
/// Available stock per model per branch, derived from one product document.
///
/// Availability is `total_units - sold_units` and is passed through unclamped, so an oversold branch shows up as a
/// negative count. Iteration order is ascending by model, then by branch id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockByModel(BTreeMap<StockKey, BTreeMap<i64, i64>>);

impl StockByModel {
    /// Available units of `model` at `branch_id`.
    pub fn available(&self, model: StockKey, branch_id: i64) -> Result<i64, StockError> {
        let branches = self.0.get(&model).ok_or(StockError::UnknownModel(model))?;
        branches.get(&branch_id).copied().ok_or(StockError::UnknownBranch { model, branch_id })
    }

    /// Available units of `model` at every branch, in ascending branch-id order. An empty vector means the model is
    /// tracked but no branch carries it.
    pub fn branch_stocks(&self, model: StockKey) -> Result<Vec<i64>, StockError> {
        let branches = self.0.get(&model).ok_or(StockError::UnknownModel(model))?;
        Ok(branches.values().copied().collect())
    }

    /// Sum of available units over every model and branch.
    pub fn total(&self) -> i64 {
        self.0.values().flat_map(|branches| branches.values()).sum()
    }

    /// Whether at least one branch of at least one model has units available. A product whose every branch is fully
    /// sold (or oversold) is out of stock even when `total_units` is positive.
    pub fn is_in_stock(&self) -> bool {
        self.0.values().flat_map(|branches| branches.values()).any(|&units| units > 0)
    }
}

fn branch_availability(stocks: &[BranchStock]) -> BTreeMap<i64, i64> {
    stocks.iter().map(|s| (s.branch_id, s.available_units())).collect()
}

//--------------------------------------   Product queries   ---------------------------------------------------------
impl Product {
    /// The model-keyed stock view of this document. Keyed by variation id when the product has variations, and by
    /// [`StockKey::NoVariation`] otherwise.
    pub fn stock_by_model(&self) -> StockByModel {
        let mut by_model = BTreeMap::new();
        if self.has_variations {
            for variation in &self.variations {
                by_model.insert(StockKey::Variation(variation.id), branch_availability(&variation.branch_stocks));
            }
        } else {
            by_model.insert(StockKey::NoVariation, branch_availability(&self.branch_stocks));
        }
        StockByModel(by_model)
    }

    /// Available units of `model` at `branch_id`.
    pub fn stock_by_model_and_branch(&self, model: impl Into<StockKey>, branch_id: i64) -> Result<i64, StockError> {
        self.stock_by_model().available(model.into(), branch_id)
    }

    /// Available units of `model` at every branch, in ascending branch-id order.
    pub fn branch_stocks_for(&self, model: impl Into<StockKey>) -> Result<Vec<i64>, StockError> {
        self.stock_by_model().branch_stocks(model.into())
    }

    /// Total available units across every model and branch of the document.
    pub fn total_stock_quantity(&self) -> i64 {
        self.stock_by_model().total()
    }

    /// Whether any branch of any model still has units available.
    pub fn is_in_stock(&self) -> bool {
        self.stock_by_model().is_in_stock()
    }
}
