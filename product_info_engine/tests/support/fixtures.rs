use log::*;
use product_info_engine::Product;
use serde_json::{json, Value};

pub fn init_logging() {
    let _ = env_logger::try_init();
    debug!("🚀 Logging initialised");
}

pub fn decode(document: Value) -> Product {
    serde_json::from_value(document).expect("fixture document must decode")
}

/// A varied product: two colour variations sold at two branches, with English and Vietnamese texts.
pub fn varied_document() -> Value {
    json!({
        "id": 1_089_477,
        "currency": "VND",
        "hasVariations": true,
        "deleted": false,
        "localizedTexts": [
            { "languageCode": "vi", "name": "Giày sneaker", "description": "Đế cao su" },
            { "languageCode": "en", "name": "Sneaker", "description": "Rubber sole" }
        ],
        "variations": [
            {
                "id": 42,
                "barcode": "8931234500017",
                "status": "ACTIVE",
                "originalPrice": 450_000,
                "newPrice": 399_000,
                "costPrice": 210_000,
                "localizedTexts": [
                    { "languageCode": "vi", "name": "Trắng", "label": "Màu sắc" }
                ],
                "branchStocks": [
                    { "branchId": 1, "totalUnits": 8, "soldUnits": 3 },
                    { "branchId": 2, "totalUnits": 4, "soldUnits": 4 }
                ],
                "attributes": [
                    { "name": "Chất liệu", "value": "Da tổng hợp", "isDisplayed": true }
                ]
            },
            {
                "id": 43,
                "status": "ACTIVE",
                "originalPrice": 450_000,
                "newPrice": 405_000,
                "costPrice": 210_000,
                "localizedTexts": [
                    { "languageCode": "vi", "name": "Đen", "label": "Màu sắc" },
                    { "languageCode": "en", "name": "Black", "label": "Colour", "versionName": "Sneaker - Black" }
                ],
                "branchStocks": [
                    { "branchId": 1, "totalUnits": 6, "soldUnits": 6 }
                ]
            }
        ]
    })
}

/// An unvaried product: stock and attributes live at product level.
pub fn unvaried_document() -> Value {
    json!({
        "id": 2_204_910,
        "hasVariations": false,
        "deleted": false,
        "originalPrice": 120_000,
        "newPrice": 99_000,
        "costPrice": 45_000,
        "localizedTexts": [
            { "languageCode": "vi", "name": "Bình giữ nhiệt", "description": "500ml" }
        ],
        "branchStocks": [
            { "branchId": 1, "totalUnits": 20, "soldUnits": 7 },
            { "branchId": 3, "totalUnits": 5, "soldUnits": 9 }
        ],
        "attributes": [
            { "name": "Dung tích", "value": "500ml", "isDisplayed": true },
            { "name": "Mã nội bộ", "value": "BGN-500", "isDisplayed": false }
        ]
    })
}
