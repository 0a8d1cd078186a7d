//! The fixed-shape record and loading records from disk.
//!
//! Record files are JSON or YAML and hold either a single record object or a
//! list of them. Missing keys take the zero value so that an absent field is
//! reported as a violation instead of failing the parse. Text fields accept
//! any scalar, so an unquoted YAML `password: 123456789` reads as text.

use anyhow::{Context, Result};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::validator;
use crate::violation::Violation;

/// A record with five fixed fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    #[serde(deserialize_with = "integer_or_null")]
    pub id: i64,
    #[serde(deserialize_with = "scalar_text")]
    pub name: String,
    #[serde(deserialize_with = "integer_or_null")]
    pub age: i64,
    #[serde(rename = "password", deserialize_with = "scalar_text")]
    pub secret: String,
    #[serde(deserialize_with = "scalar_text")]
    pub email: String,
}

impl Record {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        age: i64,
        secret: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            secret: secret.into(),
            email: email.into(),
        }
    }

    /// Run every rule against this record. See [`validator::validate`].
    pub fn validate(&self) -> Vec<Violation> {
        validator::validate(self)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// Read an integer field, treating null as zero.
fn integer_or_null<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read a text field from any scalar. Null reads as the empty string.
fn scalar_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct ScalarText;

    impl<'de> Visitor<'de> for ScalarText {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string, number or boolean")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<String, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> std::result::Result<String, E> {
            Ok(String::new())
        }

        fn visit_none<E: de::Error>(self) -> std::result::Result<String, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(ScalarText)
}

/// Format of a record file, picked from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Json,
    Yaml,
    /// Unknown extension: try JSON, then YAML.
    Sniff,
}

impl RecordFormat {
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => RecordFormat::Json,
            Some("yaml") | Some("yml") => RecordFormat::Yaml,
            _ => RecordFormat::Sniff,
        }
    }
}

/// Parse records from a string in the given format.
///
/// The document must be a mapping (one record), a sequence of mappings, or
/// empty (no records).
pub fn parse_records(content: &str, format: RecordFormat) -> Result<Vec<Record>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let doc: Value = match format {
        RecordFormat::Json => {
            serde_json::from_str(content).context("Failed to parse records as JSON")?
        }
        RecordFormat::Yaml => {
            serde_yaml::from_str(content).context("Failed to parse records as YAML")?
        }
        RecordFormat::Sniff => match serde_json::from_str(content) {
            Ok(doc) => doc,
            Err(_) => serde_yaml::from_str(content)
                .context("Failed to parse records as JSON or YAML")?,
        },
    };

    match &doc {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                record_from_value(item)
                    .with_context(|| format!("Invalid record at index {}", index))
            })
            .collect(),
        Value::Object(_) => Ok(vec![record_from_value(&doc)?]),
        other => anyhow::bail!(
            "Expected a record or a list of records, got {}",
            value_kind(other)
        ),
    }
}

fn record_from_value(value: &Value) -> Result<Record> {
    let Value::Object(map) = value else {
        anyhow::bail!("Expected a record mapping, got {}", value_kind(value));
    };

    Record::deserialize(value).map_err(|err| field_error(map, err))
}

/// Name the first field that fails on its own, falling back to the whole
/// record's error.
fn field_error(map: &Map<String, Value>, err: serde_json::Error) -> anyhow::Error {
    for (key, value) in map {
        let single = Value::Object(Map::from_iter([(key.clone(), value.clone())]));
        if let Err(field_err) = Record::deserialize(&single) {
            return anyhow::anyhow!("Invalid field `{}`: {}", key, field_err);
        }
    }
    anyhow::Error::new(err)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

/// Load every record in a file.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read records from {}", path.display()))?;

    parse_records(&content, RecordFormat::from_path(path))
        .with_context(|| format!("Invalid record file {}", path.display()))
}
