use crate::schema::Schema;
use anyhow::{Context, Result};
use colored::*;
use std::fs;
use tracing::{info, warn};

use super::{load_limits, read_input};

pub fn execute(schema: &str, input: &str, output: Option<&str>, limits: Option<&str>) -> Result<()> {
    info!("Decoding {} with schema {}", input, schema);

    let schema = Schema::load(schema)?;
    let limits = load_limits(limits)?;
    let data = read_input(input)?;

    let (value, used) = match schema.decode(&data, limits) {
        Ok(decoded) => decoded,
        Err(e) => {
            eprintln!("{} Decoding failed: {}", "✗".red(), e);
            return Err(e).with_context(|| format!("Failed to decode {}", input));
        }
    };

    let trailing = data.len() - used;
    if trailing > 0 {
        warn!("{} trailing bytes after the decoded value", trailing);
    }

    let json = serde_json::to_string_pretty(&value)?;
    match output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write output file: {}", path))?;
            eprintln!("{} Decoded {} bytes into {}", "✓".green(), used, path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
