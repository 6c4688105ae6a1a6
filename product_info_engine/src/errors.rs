use thiserror::Error;

use crate::stock::StockKey;

//--------------------------------------      StockError     ---------------------------------------------------------
/// Failures from the stock lookups. Both variants mean the caller asked about a model or branch the document does
/// not track; neither is an upstream fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StockError {
    #[error("No stock is tracked for {0}")]
    UnknownModel(StockKey),
    #[error("No stock entry for branch {branch_id} under {model}")]
    UnknownBranch { model: StockKey, branch_id: i64 },
}

//--------------------------------------   ProductApiError   ---------------------------------------------------------
/// Failures from the item-service response boundary.
#[derive(Debug, Clone, Error)]
pub enum ProductApiError {
    #[error("Could not deserialize product detail. {0}")]
    JsonError(String),
    #[error("Product query failed. Error {status}. {body}")]
    QueryError { status: u16, body: String },
}
