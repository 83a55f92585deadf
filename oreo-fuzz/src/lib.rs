//! Fuzzing entry points for the oreo-core decoder
//!
//! Each `fuzz_decode_*` function takes the raw input of one fuzz iteration;
//! a cargo-fuzz target only needs to forward its `data` slice to one of them.
//!
//! Every function feeds arbitrary bytes to a decoder. None of them may panic,
//! and none may allocate more than the input can justify.

use oreo_core::{aggregate, archive_enum, from_bytes, Decoder, Limits};

archive_enum! {
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub enum Kind: u16 {
        #[default]
        Plain = 0,
        Nested = 1,
        Wide = 4000,
    }
}

aggregate! {
    #[derive(Debug, Default, PartialEq)]
    pub struct Leaf {
        pub name: String,
        pub weights: Vec<f32>,
        pub flag: bool,
    }
}

aggregate! {
    #[derive(Debug, Default, PartialEq)]
    pub struct Tree {
        pub id: u64,
        pub kind: Kind,
        pub leaves: Vec<Leaf>,
        pub parent: Option<Box<Leaf>>,
        pub checksum: [u8; 4],
    }
}

/// Decode a nested aggregate
pub fn fuzz_decode_aggregate(data: &[u8]) {
    // Try to decode - should never panic
    let _ = from_bytes::<Tree>(data);
}

/// Decode a sequence of strings under tight limits
pub fn fuzz_decode_strings(data: &[u8]) {
    let mut value: Vec<String> = Vec::new();
    let _ = Decoder::with_limits(data, Limits::new(64, 64)).process(&mut value);
}

/// Read varints of every width until the input runs out or fails
pub fn fuzz_decode_varints(data: &[u8]) {
    let mut decoder = Decoder::new(data);
    loop {
        let start = decoder.position();
        let ok = decoder.read_varint::<u16>().is_ok()
            && decoder.read_varint::<i32>().is_ok()
            && decoder.read_varint::<u64>().is_ok();
        if !ok || decoder.position() == start {
            break;
        }
    }
}

/// Decode a flat tuple of primitives and containers
pub fn fuzz_decode_tuple(data: &[u8]) {
    let _ = from_bytes::<(u8, i16, Option<String>, Vec<u8>, f64)>(data);
}

#[cfg(test)]
mod tests {
    use super::*;
    use oreo_core::to_bytes;

    #[test]
    fn test_fuzz_decode_aggregate_empty() {
        fuzz_decode_aggregate(&[]);
    }

    #[test]
    fn test_fuzz_decode_aggregate_valid() {
        let tree = Tree {
            id: 99,
            kind: Kind::Wide,
            leaves: vec![Leaf {
                name: "a".to_string(),
                weights: vec![0.5, 1.0],
                flag: true,
            }],
            parent: Some(Box::default()),
            checksum: [1, 2, 3, 4],
        };
        let bytes = to_bytes(&tree);
        assert_eq!(from_bytes::<Tree>(&bytes).unwrap(), tree);
        fuzz_decode_aggregate(&bytes);
    }

    #[test]
    fn test_fuzz_decode_random() {
        fuzz_decode_aggregate(&[0x12, 0x34, 0x56, 0x78]);
        fuzz_decode_tuple(&[0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn test_fuzz_decode_strings_huge_length() {
        fuzz_decode_strings(&[0xff, 0xff, 0xff, 0xff, 0x0f]);
    }

    #[test]
    fn test_fuzz_decode_varints_saturated() {
        fuzz_decode_varints(&[0xFF; 1024]);
    }
}
