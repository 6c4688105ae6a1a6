//! Response boundary of the item service.
//!
//! The HTTP client itself lives with the caller; this module only fixes the contract between a raw response and the
//! [`Product`] graph the queries run over. Keeping the interpretation transport-free makes it trivial to drive from
//! canned fixtures.

use log::*;

use crate::{errors::ProductApiError, product_types::Product};

/// Request path of the product-detail endpoint for `product_id`, relative to the item-service base URL.
pub fn product_detail_path(product_id: i64) -> String {
    format!("/itemservice/api/beehive-items/{product_id}")
}

/// Interprets a raw product-detail response.
///
/// A 200 decodes the body, ignoring unknown fields. A 404 is not a failure: the item service answers 404 for deleted
/// products, so it maps to [`Product::not_found`] with the `deleted` flag set. Any other status is unrecoverable and
/// surfaces as [`ProductApiError::QueryError`] with the raw body attached for diagnosis.
pub fn product_from_response(product_id: i64, status: u16, body: &[u8]) -> Result<Product, ProductApiError> {
    trace!("Interpreting product detail response for product {product_id}. Status: {status}");
    match status {
        200 => {
            let product: Product =
                serde_json::from_slice(body).map_err(|e| ProductApiError::JsonError(e.to_string()))?;
            debug!("Decoded product {} with {} variation(s)", product.id, product.variations.len());
            Ok(product)
        },
        404 => {
            info!("Product {product_id} is not known upstream. Treating it as deleted");
            Ok(Product::not_found(product_id))
        },
        status => {
            warn!("Product query for {product_id} failed with status {status}");
            Err(ProductApiError::QueryError { status, body: String::from_utf8_lossy(body).into_owned() })
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        errors::ProductApiError,
        test_utils::{init_test_logging, random_product_id},
    };

    #[test]
    fn the_detail_path_embeds_the_product_id() {
        assert_eq!(product_detail_path(1_089_477), "/itemservice/api/beehive-items/1089477");
    }

    #[test]
    fn a_200_decodes_the_body() {
        init_test_logging();
        let body = serde_json::json!({ "id": 31, "deleted": false, "futureField": [1, 2, 3] }).to_string();
        let product = product_from_response(31, 200, body.as_bytes()).unwrap();
        assert_eq!(product.id, 31);
        assert!(!product.deleted);
    }

    #[test]
    fn a_200_with_a_malformed_body_is_a_json_error() {
        let err = product_from_response(31, 200, b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, ProductApiError::JsonError(_)), "got {err:?}");
    }

    #[test]
    fn a_404_becomes_a_deleted_record() {
        init_test_logging();
        let id = random_product_id();
        let product = product_from_response(id, 404, b"").unwrap();
        assert_eq!(product.id, id);
        assert!(product.deleted);
    }

    #[test]
    fn any_other_status_is_fatal_and_keeps_the_body() {
        let err = product_from_response(31, 503, b"upstream timeout").unwrap_err();
        match err {
            ProductApiError::QueryError { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "upstream timeout");
            },
            other => panic!("expected a query error, got {other:?}"),
        }
    }
}
