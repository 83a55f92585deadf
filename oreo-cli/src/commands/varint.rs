use crate::Width;
use anyhow::{bail, Context, Result};
use oreo_core::{to_bytes, Decoder};

/// Encode a decimal integer and return its bytes as hex
pub fn encode_hex(value: &str, width: Width, signed: bool) -> Result<String> {
    let bytes = if signed {
        let n: i64 = value
            .parse()
            .with_context(|| format!("Not a signed integer: {}", value))?;
        match width {
            Width::W16 => to_bytes(&i16::try_from(n)?),
            Width::W32 => to_bytes(&i32::try_from(n)?),
            Width::W64 => to_bytes(&n),
        }
    } else {
        let n: u64 = value
            .parse()
            .with_context(|| format!("Not an unsigned integer: {}", value))?;
        match width {
            Width::W16 => to_bytes(&u16::try_from(n)?),
            Width::W32 => to_bytes(&u32::try_from(n)?),
            Width::W64 => to_bytes(&n),
        }
    };
    Ok(hex::encode(bytes))
}

/// Decode a hex varint, returning the value and bytes consumed
pub fn decode_hex(input: &str, width: Width, signed: bool) -> Result<(String, usize)> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = hex::decode(&cleaned).with_context(|| format!("Invalid hex: {}", input))?;
    let mut decoder = Decoder::new(&bytes);

    let value = match (width, signed) {
        (Width::W16, false) => decoder.read_varint::<u16>()?.to_string(),
        (Width::W32, false) => decoder.read_varint::<u32>()?.to_string(),
        (Width::W64, false) => decoder.read_varint::<u64>()?.to_string(),
        (Width::W16, true) => decoder.read_varint::<i16>()?.to_string(),
        (Width::W32, true) => decoder.read_varint::<i32>()?.to_string(),
        (Width::W64, true) => decoder.read_varint::<i64>()?.to_string(),
    };

    if !decoder.is_empty() {
        bail!(
            "{} trailing bytes after varint: {}",
            decoder.remaining(),
            hex::encode(decoder.rest())
        );
    }

    Ok((value, decoder.position()))
}

pub fn execute_encode(value: &str, width: Width, signed: bool) -> Result<()> {
    let hex = encode_hex(value, width, signed)?;
    println!("{}", hex);
    Ok(())
}

pub fn execute_decode(input: &str, width: Width, signed: bool) -> Result<()> {
    let (value, used) = decode_hex(input, width, signed)?;
    println!("{} ({} bytes)", value, used);
    Ok(())
}
