//! Subcommand implementations

pub mod decode;
pub mod encode;
pub mod varint;

use anyhow::{Context, Result};
use oreo_core::Limits;
use std::fs;
use std::io::{self, Read};

/// Read a file, or stdin when `path` is `-`
pub(crate) fn read_input(path: &str) -> Result<Vec<u8>> {
    if path == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        fs::read(path).with_context(|| format!("Failed to read input file: {}", path))
    }
}

/// Load decode limits from a JSON file, or use the defaults
pub(crate) fn load_limits(path: Option<&str>) -> Result<Limits> {
    match path {
        None => Ok(Limits::default()),
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read limits file: {}", path))?;
            serde_json::from_str(&content).with_context(|| format!("Invalid limits in {}", path))
        }
    }
}
