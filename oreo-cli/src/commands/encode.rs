use crate::schema::Schema;
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use tracing::info;

use super::read_input;

pub fn execute(schema: &str, input: &str, output: &str) -> Result<()> {
    info!("Encoding {} with schema {}", input, schema);

    let schema = Schema::load(schema)?;

    let content = read_input(input)?;
    let value: Value =
        serde_json::from_slice(&content).with_context(|| "Failed to parse JSON input")?;

    let encoded = schema
        .encode(&value)
        .with_context(|| "Input does not match the schema")?;

    fs::write(output, &encoded)
        .with_context(|| format!("Failed to write output file: {}", output))?;

    info!("Wrote {} bytes to {}", encoded.len(), output);

    Ok(())
}
