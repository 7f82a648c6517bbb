use serde::{Deserialize, Serialize};

use stockroom_core::{FieldRule, FieldType, Resource, Schema};

/// Direction of a recorded transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Purchase,
    Sale,
}

/// Ledger-style record of a purchase or sale.
///
/// Reference fields are informational only; recording a transaction never
/// touches the referenced inventory item's stock quantity. `transaction_date`
/// defaults to the creation time when the client omits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "transactionID")]
    pub transaction_id: String,
    #[serde(rename = "productID")]
    pub product_id: String,
    #[serde(rename = "inventoryID")]
    pub inventory_id: String,
    #[serde(rename = "orderID")]
    pub order_id: String,
    #[serde(rename = "transactionType")]
    pub transaction_type: TransactionType,
    #[serde(rename = "transactionDate")]
    pub transaction_date: String,
    pub quantity: i64,
    pub payment: f64,
}

const RULES: &[FieldRule] = &[
    FieldRule {
        name: "transactionID",
        label: "Transaction ID",
        required: true,
        ty: FieldType::Str { max_len: None },
    },
    FieldRule {
        name: "productID",
        label: "Product ID",
        required: true,
        ty: FieldType::Id,
    },
    FieldRule {
        name: "inventoryID",
        label: "Inventory ID",
        required: true,
        ty: FieldType::Id,
    },
    FieldRule {
        name: "orderID",
        label: "Order ID",
        required: true,
        ty: FieldType::Id,
    },
    FieldRule {
        name: "transactionType",
        label: "Transaction type",
        required: true,
        ty: FieldType::Enumerated {
            allowed: &["purchase", "sale"],
            default: None,
        },
    },
    FieldRule {
        name: "transactionDate",
        label: "Transaction date",
        required: false,
        ty: FieldType::Timestamp,
    },
    FieldRule {
        name: "quantity",
        label: "Quantity",
        required: true,
        ty: FieldType::Integer { min: Some(1) },
    },
    FieldRule {
        name: "payment",
        label: "Payment",
        required: true,
        ty: FieldType::Number { min: None },
    },
];

static SCHEMA: Schema = Schema::new(RULES);

impl Resource for Transaction {
    const COLLECTION: &'static str = "transactions";
    const DISPLAY_NAME: &'static str = "Transaction";

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
            "transactionID": "TXN-9",
            "productID": "0195f2a6-0000-7000-8000-000000000010",
            "inventoryID": "0195f2a6-0000-7000-8000-000000000011",
            "orderID": "0195f2a6-0000-7000-8000-000000000012",
            "transactionType": "sale",
            "quantity": 2,
            "payment": 39.98,
        })
    }

    #[test]
    fn valid_sale_passes() {
        let mut payload = valid_payload();
        payload["transactionDate"] = json!("2026-02-01T00:00:00Z");

        let normalized = Transaction::schema().validate(&payload).unwrap();
        let tx: Transaction = serde_json::from_value(Value::Object(normalized)).unwrap();
        assert_eq!(tx.transaction_type, TransactionType::Sale);
        assert_eq!(tx.quantity, 2);
    }

    #[test]
    fn zero_quantity_violates_the_minimum() {
        let mut payload = valid_payload();
        payload["quantity"] = json!(0);
        let err = Transaction::schema().validate(&payload).unwrap_err();
        assert_eq!(err.messages(), ["Quantity must be at least 1"]);
    }

    #[test]
    fn transaction_type_has_no_default() {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("transactionType");
        let err = Transaction::schema().validate(&payload).unwrap_err();
        assert_eq!(err.messages(), ["Transaction type is required"]);
    }

    #[test]
    fn refund_is_not_a_transaction_type() {
        let mut payload = valid_payload();
        payload["transactionType"] = json!("refund");
        let err = Transaction::schema().validate(&payload).unwrap_err();
        assert_eq!(err.messages(), ["Transaction type must be one of: purchase, sale"]);
    }
}
