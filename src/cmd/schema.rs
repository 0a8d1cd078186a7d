//! `fieldcheck schema`: print the record JSON Schema.

use anyhow::{Context, Result};

use fieldcheck::schema::record_schema;

pub fn cmd_schema() -> Result<()> {
    let schema = serde_json::to_string_pretty(&record_schema())
        .context("Failed to serialize record schema")?;
    println!("{}", schema);
    Ok(())
}
