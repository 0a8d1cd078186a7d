//! Schema-driven baseline validator.
//!
//! Expresses the same five rules as a JSON Schema and evaluates them with the
//! `jsonschema` crate. This is the generic, data-driven counterpart the
//! hand-written [`crate::validator`] is compared against, both for agreement
//! (`validate --compare`) and for throughput (`benches/validation_bench.rs`).

use anyhow::Result;
use serde_json::{json, Value};

use crate::email::EMAIL_PATTERN;
use crate::record::Record;
use crate::validator::{NAME_MAX_CHARS, NAME_MIN_CHARS, SECRET_MAX_CHARS, SECRET_MIN_CHARS};
use crate::violation::{Violation, ViolationKind};

/// JSON Schema describing a valid record.
pub fn record_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "Record",
        "type": "object",
        "required": ["id", "name", "age", "password", "email"],
        "properties": {
            "id": { "type": "integer", "not": { "const": 0 } },
            "name": {
                "type": "string",
                "minLength": NAME_MIN_CHARS,
                "maxLength": NAME_MAX_CHARS
            },
            "age": { "type": "integer", "not": { "const": 0 } },
            "password": {
                "type": "string",
                "minLength": SECRET_MIN_CHARS,
                "maxLength": SECRET_MAX_CHARS
            },
            "email": { "type": "string", "pattern": EMAIL_PATTERN }
        }
    })
}

/// Compiled record schema.
pub struct SchemaValidator {
    validator: jsonschema::Validator,
}

impl SchemaValidator {
    pub fn new() -> Result<Self> {
        let validator = jsonschema::validator_for(&record_schema())
            .map_err(|e| anyhow::anyhow!("Failed to compile record schema: {}", e))?;
        Ok(Self { validator })
    }

    /// Validate a record, returning at most one violation per rule, in rule
    /// order.
    pub fn validate(&self, record: &Record) -> Vec<Violation> {
        let instance = to_instance(record);
        let mut violations: Vec<Violation> = Vec::new();

        for error in self.validator.iter_errors(&instance) {
            let path = error.instance_path.to_string();
            // Record always serializes every key, so errors sit on a field
            let Some(kind) = field_of(&path).and_then(ViolationKind::from_field) else {
                continue;
            };
            if violations.iter().any(|v| v.kind == kind) {
                continue;
            }
            let message = if kind == ViolationKind::InvalidSecret {
                format!("{} failed schema check", kind.field())
            } else {
                format!("{}: {}", kind.field(), error)
            };
            violations.push(Violation::new(kind, message));
        }

        violations.sort_by_key(|v| v.kind);
        violations
    }

    pub fn is_valid(&self, record: &Record) -> bool {
        self.validator.is_valid(&to_instance(record))
    }
}

/// Wire form of a record, using the same keys `Record` serializes with.
fn to_instance(record: &Record) -> Value {
    // Plain integers and strings always serialize
    serde_json::to_value(record).unwrap()
}

/// Top-level property named by an instance path such as `/name`.
fn field_of(path: &str) -> Option<&str> {
    path.strip_prefix('/')
        .map(|rest| rest.split('/').next().unwrap_or(rest))
        .filter(|field| !field.is_empty())
}
