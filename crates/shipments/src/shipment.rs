use serde::{Deserialize, Serialize};

use stockroom_core::{FieldRule, FieldType, Resource, Schema};

/// Delivery status of a shipment.
///
/// Status is free-set on update; no transition ordering is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipmentStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "shipped")]
    Shipped,
    #[serde(rename = "in transit")]
    InTransit,
    #[serde(rename = "delivered")]
    Delivered,
    #[serde(rename = "cancelled")]
    Cancelled,
}

const STATUSES: &[&str] = &["pending", "shipped", "in transit", "delivered", "cancelled"];

/// Outbound shipment record.
///
/// `order_id` is an informational reference. `shipment_date` defaults to the
/// creation time when the client omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub shipment_id: String,
    pub order_id: String,
    pub shipment_date: String,
    pub shipment_method: String,
    pub tracking_number: String,
    pub status: ShipmentStatus,
}

const RULES: &[FieldRule] = &[
    FieldRule {
        name: "shipmentId",
        label: "Shipment ID",
        required: true,
        ty: FieldType::Str { max_len: None },
    },
    FieldRule {
        name: "orderId",
        label: "Order ID",
        required: true,
        ty: FieldType::Id,
    },
    FieldRule {
        name: "shipmentDate",
        label: "Shipment date",
        required: false,
        ty: FieldType::Timestamp,
    },
    FieldRule {
        name: "shipmentMethod",
        label: "Shipment method",
        required: true,
        ty: FieldType::Str { max_len: None },
    },
    FieldRule {
        name: "trackingNumber",
        label: "Tracking number",
        required: true,
        ty: FieldType::Str { max_len: None },
    },
    FieldRule {
        name: "status",
        label: "Status",
        required: false,
        ty: FieldType::Enumerated {
            allowed: STATUSES,
            default: Some("pending"),
        },
    },
];

static SCHEMA: Schema = Schema::new(RULES);

impl Resource for Shipment {
    const COLLECTION: &'static str = "shipments";
    const DISPLAY_NAME: &'static str = "Shipment";

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
            "shipmentId": "SHP-100",
            "orderId": "0195f2a6-0000-7000-8000-00000000000a",
            "shipmentMethod": "ground",
            "trackingNumber": "1Z999",
        })
    }

    #[test]
    fn status_defaults_to_pending() {
        let normalized = Shipment::schema().validate(&valid_payload()).unwrap();
        assert_eq!(normalized["status"], json!("pending"));
    }

    #[test]
    fn unknown_status_is_rejected_with_the_full_member_list() {
        let mut payload = valid_payload();
        payload["status"] = json!("lost");
        let err = Shipment::schema().validate(&payload).unwrap_err();
        assert_eq!(
            err.messages(),
            ["Status must be one of: pending, shipped, in transit, delivered, cancelled"]
        );
    }

    #[test]
    fn in_transit_round_trips_through_the_record_type() {
        let mut payload = valid_payload();
        payload["status"] = json!("in transit");
        payload["shipmentDate"] = json!("2026-01-05T08:30:00Z");

        let normalized = Shipment::schema().validate(&payload).unwrap();
        let shipment: Shipment = serde_json::from_value(Value::Object(normalized)).unwrap();
        assert_eq!(shipment.status, ShipmentStatus::InTransit);
    }

    #[test]
    fn order_reference_must_be_an_identifier() {
        let mut payload = valid_payload();
        payload["orderId"] = json!("ORD-1");
        let err = Shipment::schema().validate(&payload).unwrap_err();
        assert_eq!(err.messages(), ["Order ID must be a valid identifier"]);
    }
}
