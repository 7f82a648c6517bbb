use serde::{Deserialize, Serialize};

use stockroom_core::{FieldRule, FieldType, Resource, Schema};

/// Catalog entry for a stocked item.
///
/// `category_id` and `supplier_id` are informational references; they are
/// validated for shape, never for existence. Stock quantity is a plain
/// attribute — transactions do not adjust it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_quantity: i64,
    pub category_id: String,
    pub supplier_id: String,
}

const RULES: &[FieldRule] = &[
    FieldRule {
        name: "name",
        label: "Name",
        required: true,
        ty: FieldType::Str { max_len: None },
    },
    FieldRule {
        name: "description",
        label: "Description",
        required: true,
        ty: FieldType::Str { max_len: None },
    },
    FieldRule {
        name: "price",
        label: "Price",
        required: true,
        ty: FieldType::Number { min: Some(0.0) },
    },
    FieldRule {
        name: "stockQuantity",
        label: "Stock quantity",
        required: true,
        ty: FieldType::Integer { min: Some(0) },
    },
    FieldRule {
        name: "categoryId",
        label: "Category ID",
        required: true,
        ty: FieldType::Id,
    },
    FieldRule {
        name: "supplierId",
        label: "Supplier ID",
        required: true,
        ty: FieldType::Id,
    },
];

static SCHEMA: Schema = Schema::new(RULES);

impl Resource for InventoryItem {
    const COLLECTION: &'static str = "inventory_items";
    // The original client-facing wording is "Item", not "InventoryItem".
    const DISPLAY_NAME: &'static str = "Item";

    fn schema() -> &'static Schema {
        &SCHEMA
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn valid_payload() -> Value {
        json!({
            "name": "Widget",
            "description": "A standard widget",
            "price": 19.99,
            "stockQuantity": 42,
            "categoryId": "0195f2a6-0000-7000-8000-000000000001",
            "supplierId": "0195f2a6-0000-7000-8000-000000000002",
        })
    }

    #[test]
    fn valid_payload_passes_and_round_trips() {
        let normalized = InventoryItem::schema().validate(&valid_payload()).unwrap();
        let item: InventoryItem = serde_json::from_value(Value::Object(normalized)).unwrap();
        assert_eq!(item.name, "Widget");
        assert_eq!(item.stock_quantity, 42);
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut payload = valid_payload();
        payload["price"] = json!(-0.01);
        let err = InventoryItem::schema().validate(&payload).unwrap_err();
        assert_eq!(err.messages(), ["Price must be at least 0"]);
    }

    #[test]
    fn fractional_stock_quantity_is_rejected() {
        let mut payload = valid_payload();
        payload["stockQuantity"] = json!(1.5);
        let err = InventoryItem::schema().validate(&payload).unwrap_err();
        assert_eq!(err.messages(), ["Stock quantity must be an integer"]);
    }

    #[test]
    fn reference_fields_must_be_identifiers() {
        let mut payload = valid_payload();
        payload["categoryId"] = json!("electronics");
        let err = InventoryItem::schema().validate(&payload).unwrap_err();
        assert_eq!(err.messages(), ["Category ID must be a valid identifier"]);
    }
}
