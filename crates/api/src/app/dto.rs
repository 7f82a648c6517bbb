use serde_json::{Map, Value};

use stockroom_store::Document;

/// Client-facing JSON for a stored record: generated identifier, the
/// declared fields, then the store timestamps.
pub fn document_to_json(doc: &Document) -> Value {
    let mut body = Map::new();
    body.insert("id".to_string(), Value::String(doc.id.to_string()));
    for (name, value) in &doc.fields {
        body.insert(name.clone(), value.clone());
    }
    body.insert(
        "createdAt".to_string(),
        Value::String(doc.created_at.to_rfc3339()),
    );
    body.insert(
        "updatedAt".to_string(),
        Value::String(doc.updated_at.to_rfc3339()),
    );
    Value::Object(body)
}
