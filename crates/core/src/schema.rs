//! Declarative field-rule validation.
//!
//! Each resource carries one rule table (a `const` slice of [`FieldRule`]);
//! [`Schema::validate`] checks an untyped JSON payload against it and either
//! yields a normalized field map or the full list of violations. Validation
//! never stops at the first error and has no side effects.

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::ValidationErrors;

/// Normalized payload: exactly the declared fields, defaults applied.
pub type FieldMap = Map<String, Value>;

/// Primitive shape a field must satisfy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldType {
    /// UTF-8 string, optionally bounded in length (counted in characters).
    Str { max_len: Option<usize> },
    /// Numeric value with an optional lower bound.
    Number { min: Option<f64> },
    /// Whole number with an optional lower bound. Rejects fractional input.
    Integer { min: Option<i64> },
    /// String drawn from a fixed set; `default` is applied when absent.
    Enumerated {
        allowed: &'static [&'static str],
        default: Option<&'static str>,
    },
    /// Reference to another record, carried as a stringified identifier.
    /// Never checked for existence.
    Id,
    /// RFC 3339 date-time, normalized to UTC. Absent values are filled in
    /// by the store at creation.
    Timestamp,
}

/// One field's validation rule.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Wire name of the field (as it appears in payloads and documents).
    pub name: &'static str,
    /// Human-readable label used to build error messages.
    pub label: &'static str,
    pub required: bool,
    pub ty: FieldType,
}

impl FieldRule {
    /// Check a present value against this rule, yielding its normalized form.
    fn check(&self, value: &Value) -> Result<Value, String> {
        match self.ty {
            FieldType::Str { max_len } => {
                let Some(s) = value.as_str() else {
                    return Err(format!("{} must be a string", self.label));
                };
                if let Some(max) = max_len {
                    if s.chars().count() > max {
                        return Err(format!("{} cannot exceed {} characters", self.label, max));
                    }
                }
                Ok(value.clone())
            }
            FieldType::Number { min } => {
                let Some(n) = value.as_f64() else {
                    return Err(format!("{} must be a number", self.label));
                };
                if let Some(min) = min {
                    if n < min {
                        return Err(format!("{} must be at least {}", self.label, min));
                    }
                }
                Ok(value.clone())
            }
            FieldType::Integer { min } => {
                let Some(n) = value.as_i64() else {
                    return Err(format!("{} must be an integer", self.label));
                };
                if let Some(min) = min {
                    if n < min {
                        return Err(format!("{} must be at least {}", self.label, min));
                    }
                }
                Ok(value.clone())
            }
            FieldType::Enumerated { allowed, .. } => {
                let member = value.as_str().is_some_and(|s| allowed.iter().any(|a| *a == s));
                if !member {
                    return Err(format!(
                        "{} must be one of: {}",
                        self.label,
                        allowed.join(", ")
                    ));
                }
                Ok(value.clone())
            }
            FieldType::Id => {
                let parsed = value.as_str().map(Uuid::try_parse);
                match parsed {
                    Some(Ok(_)) => Ok(value.clone()),
                    _ => Err(format!("{} must be a valid identifier", self.label)),
                }
            }
            FieldType::Timestamp => {
                let parsed = value.as_str().map(chrono::DateTime::parse_from_rfc3339);
                match parsed {
                    Some(Ok(dt)) => Ok(Value::String(
                        dt.with_timezone(&chrono::Utc).to_rfc3339(),
                    )),
                    _ => Err(format!("{} must be a valid RFC 3339 date-time", self.label)),
                }
            }
        }
    }
}

/// Field-rule table for one resource.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    fields: &'static [FieldRule],
}

impl Schema {
    pub const fn new(fields: &'static [FieldRule]) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &'static [FieldRule] {
        self.fields
    }

    /// Validate an untyped payload against the rule table.
    ///
    /// Collects every violation in one pass. On success the returned map
    /// contains exactly the declared fields that were present (plus enum
    /// defaults); undeclared fields are dropped.
    pub fn validate(&self, payload: &Value) -> Result<FieldMap, ValidationErrors> {
        let Some(input) = payload.as_object() else {
            return Err(ValidationErrors::new(vec![
                "Request body must be a JSON object".to_string(),
            ]));
        };

        let mut normalized = FieldMap::new();
        let mut errors = Vec::new();

        for rule in self.fields {
            match input.get(rule.name) {
                None | Some(Value::Null) => {
                    if let FieldType::Enumerated {
                        default: Some(default),
                        ..
                    } = rule.ty
                    {
                        normalized.insert(rule.name.to_string(), Value::String(default.to_string()));
                    } else if rule.required {
                        errors.push(format!("{} is required", rule.label));
                    }
                }
                Some(value) => match rule.check(value) {
                    Ok(v) => {
                        normalized.insert(rule.name.to_string(), v);
                    }
                    Err(message) => errors.push(message),
                },
            }
        }

        if errors.is_empty() {
            Ok(normalized)
        } else {
            Err(ValidationErrors::new(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    const RULES: &[FieldRule] = &[
        FieldRule {
            name: "code",
            label: "Code",
            required: true,
            ty: FieldType::Str { max_len: Some(8) },
        },
        FieldRule {
            name: "amount",
            label: "Amount",
            required: true,
            ty: FieldType::Number { min: Some(0.0) },
        },
        FieldRule {
            name: "count",
            label: "Count",
            required: true,
            ty: FieldType::Integer { min: Some(1) },
        },
        FieldRule {
            name: "state",
            label: "State",
            required: false,
            ty: FieldType::Enumerated {
                allowed: &["open", "closed"],
                default: Some("open"),
            },
        },
        FieldRule {
            name: "ownerId",
            label: "Owner ID",
            required: false,
            ty: FieldType::Id,
        },
        FieldRule {
            name: "openedAt",
            label: "Opened at",
            required: false,
            ty: FieldType::Timestamp,
        },
    ];

    static SCHEMA: Schema = Schema::new(RULES);

    #[test]
    fn non_object_payload_is_rejected() {
        let err = SCHEMA.validate(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.messages(), ["Request body must be a JSON object"]);
    }

    #[test]
    fn valid_payload_normalizes_declared_fields_only() {
        let payload = json!({
            "code": "A1",
            "amount": 9.5,
            "count": 3,
            "undeclared": "dropped",
        });

        let normalized = SCHEMA.validate(&payload).unwrap();
        let keys: Vec<&str> = normalized.keys().map(String::as_str).collect();
        assert_eq!(keys, ["code", "amount", "count", "state"]);
        assert_eq!(normalized["state"], json!("open"));
        assert!(!normalized.contains_key("undeclared"));
    }

    #[test]
    fn collects_all_violations_in_declaration_order() {
        let payload = json!({
            "code": "way-too-long-code",
            "amount": -1,
            "count": 0.5,
            "state": "pending",
        });

        let err = SCHEMA.validate(&payload).unwrap_err();
        assert_eq!(
            err.messages(),
            [
                "Code cannot exceed 8 characters",
                "Amount must be at least 0",
                "Count must be an integer",
                "State must be one of: open, closed",
            ]
        );
    }

    #[test]
    fn missing_required_fields_are_all_reported() {
        let err = SCHEMA.validate(&json!({})).unwrap_err();
        assert_eq!(
            err.messages(),
            ["Code is required", "Amount is required", "Count is required"]
        );
    }

    #[test]
    fn null_is_treated_as_absent() {
        let err = SCHEMA
            .validate(&json!({"code": null, "amount": 1, "count": 1}))
            .unwrap_err();
        assert_eq!(err.messages(), ["Code is required"]);
    }

    #[test]
    fn integer_minimum_is_enforced() {
        let err = SCHEMA
            .validate(&json!({"code": "A", "amount": 1, "count": 0}))
            .unwrap_err();
        assert_eq!(err.messages(), ["Count must be at least 1"]);
    }

    #[test]
    fn identifier_fields_must_parse_as_uuid() {
        let err = SCHEMA
            .validate(&json!({"code": "A", "amount": 1, "count": 1, "ownerId": "not-a-uuid"}))
            .unwrap_err();
        assert_eq!(err.messages(), ["Owner ID must be a valid identifier"]);
    }

    #[test]
    fn timestamps_normalize_to_utc() {
        let normalized = SCHEMA
            .validate(&json!({
                "code": "A",
                "amount": 1,
                "count": 1,
                "openedAt": "2026-03-01T12:00:00+02:00",
            }))
            .unwrap();
        assert_eq!(normalized["openedAt"], json!("2026-03-01T10:00:00+00:00"));
    }

    proptest! {
        /// Every missing required field is named in the error list, whatever
        /// else the payload contains.
        #[test]
        fn missing_required_fields_are_named(
            include_code in any::<bool>(),
            include_amount in any::<bool>(),
            include_count in any::<bool>(),
        ) {
            prop_assume!(!(include_code && include_amount && include_count));

            let mut payload = serde_json::Map::new();
            if include_code {
                payload.insert("code".into(), json!("A"));
            }
            if include_amount {
                payload.insert("amount".into(), json!(1));
            }
            if include_count {
                payload.insert("count".into(), json!(1));
            }

            let err = SCHEMA.validate(&Value::Object(payload)).unwrap_err();
            for (present, label) in [
                (include_code, "Code"),
                (include_amount, "Amount"),
                (include_count, "Count"),
            ] {
                if !present {
                    let expected = format!("{} is required", label);
                    prop_assert!(err.messages().iter().any(|m| m == &expected));
                }
            }
        }
    }
}
