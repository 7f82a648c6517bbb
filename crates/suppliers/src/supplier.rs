use serde::{Deserialize, Serialize};

use stockroom_core::{FieldRule, FieldType, Resource, Schema};

/// Supplier directory entry.
///
/// `supplier_id` is a client-supplied business key; the store key is the
/// generated record identifier, assigned once at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(rename = "supplierID")]
    pub supplier_id: String,
    #[serde(rename = "supplierName")]
    pub supplier_name: String,
    #[serde(rename = "contactInfo")]
    pub contact_info: String,
    pub address: String,
}

const RULES: &[FieldRule] = &[
    FieldRule {
        name: "supplierID",
        label: "Supplier ID",
        required: true,
        ty: FieldType::Str { max_len: None },
    },
    FieldRule {
        name: "supplierName",
        label: "Supplier name",
        required: true,
        ty: FieldType::Str { max_len: Some(100) },
    },
    FieldRule {
        name: "contactInfo",
        label: "Contact information",
        required: true,
        ty: FieldType::Str { max_len: Some(100) },
    },
    FieldRule {
        name: "address",
        label: "Address",
        required: true,
        ty: FieldType::Str { max_len: Some(200) },
    },
];

static SCHEMA: Schema = Schema::new(RULES);

impl Resource for Supplier {
    const COLLECTION: &'static str = "suppliers";
    const DISPLAY_NAME: &'static str = "Supplier";

    fn schema() -> &'static Schema {
        &SCHEMA
    }
}
