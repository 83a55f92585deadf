//! Decoding damaged or hostile input

use oreo_core::{from_bytes, from_bytes_with_limits, to_bytes, DecodeError, Limits};

fn main() {
    println!("Oreo Truncated Input Example\n");

    let names = vec!["alpha".to_string(), "beta".to_string(), "gamma".to_string()];
    let encoded = to_bytes(&names);
    println!("Encoded {} names into {} bytes", names.len(), encoded.len());

    // Every proper prefix is rejected rather than producing a partial list
    for len in [0, 1, encoded.len() / 2, encoded.len() - 1] {
        match from_bytes::<Vec<String>>(&encoded[..len]) {
            Ok(v) => println!("prefix {:>2}: unexpectedly decoded {:?}", len, v),
            Err(e) => println!("prefix {:>2}: {}", len, e),
        }
    }

    // A corrupt length field claiming ~268M elements fails before allocating
    let corrupt = [0xff, 0xff, 0xff, 0x7f, 0x01];
    match from_bytes::<Vec<u64>>(&corrupt) {
        Err(DecodeError::LengthOverflow { length, limit }) => {
            println!("\ncorrupt length {} rejected (at most {} fit)", length, limit)
        }
        other => println!("\nunexpected: {:?}", other),
    }

    // Tight limits reject long strings even when the bytes are present
    let limits = Limits::new(4, 16);
    match from_bytes_with_limits::<Vec<String>>(&encoded, limits) {
        Ok(_) => println!("limits were not applied"),
        Err(e) => println!("with max_string_len = 4: {}", e),
    }
}
