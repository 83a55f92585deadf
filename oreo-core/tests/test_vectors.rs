//! Wire-level test vectors
//!
//! Each vector pins the exact bytes of an encoding, checks it decodes back,
//! and checks that dropping the final byte makes decoding fail.

use oreo_core::{from_bytes, to_bytes, Archive, DecodeError};

fn check_vector<T>(value: T, expected_hex: &str)
where
    T: Archive + Default + PartialEq + std::fmt::Debug,
{
    let encoded = to_bytes(&value);
    assert_eq!(hex::encode(&encoded), expected_hex, "encoding of {value:?}");

    let decoded: T = from_bytes(&encoded).unwrap();
    assert_eq!(decoded, value);

    let truncated = &encoded[..encoded.len() - 1];
    assert!(
        from_bytes::<T>(truncated).is_err(),
        "{value:?} decoded from truncated input"
    );
}

#[test]
fn test_varint_vectors() {
    check_vector(0i64, "00");
    check_vector(1i64, "01");
    check_vector(127i64, "7f");
    check_vector(128i64, "8001");
    check_vector(200i64, "c801");
    check_vector(255i64, "ff01");
    check_vector(256i64, "8002");
    check_vector(300i64, "ac02");
    check_vector(32767i64, "ffff01");
    check_vector(32768i64, "808002");
    check_vector(65535i64, "ffff03");
    check_vector(65536i64, "808004");
    check_vector(0x7fff_ffffi64, "ffffffff07");
    check_vector(0x8000_0000i64, "8080808008");
    check_vector(0xffff_ffffi64, "ffffffff0f");
    check_vector(0x0111_1111_1111_1111i64, "91a2c48891a2c48801");
    check_vector(i64::MAX, "ffffffffffffffff7f");
    check_vector(u64::MAX, "ffffffffffffffffff01");
}

#[test]
fn test_negative_varint_vectors() {
    check_vector(-1i64, "ffffffffffffffffff01");
    check_vector(-2i64, "feffffffffffffffff01");
    check_vector(-1i32, "ffffffff0f");
    check_vector(-1i16, "ffff03");
}

#[test]
fn test_single_byte_vectors() {
    check_vector(true, "01");
    check_vector(false, "00");
    check_vector(54u8, "36");
    check_vector(-54i8, "ca");
}

#[test]
fn test_container_vectors() {
    check_vector("foobar".to_string(), "06666f6f626172");
    check_vector(vec![0u8, 1, 56], "03000138");
    check_vector(vec![300u16, 1], "02ac0201");
    check_vector([0x12u8, 0x56, 0x34, 0xab], "125634ab");
    check_vector([0x777777u32, 0xa8, 0x8d786a], "f7eedd03a801eaf0b504");
    check_vector(Some(66u32), "0142");
}

#[test]
fn test_float_vectors_are_native_order() {
    for value in [0.0f32, -0.0, 1.6, -42.6] {
        let encoded = to_bytes(&value);
        assert_eq!(encoded.as_ref(), &value.to_ne_bytes());
        let decoded: f32 = from_bytes(&encoded).unwrap();
        assert_eq!(decoded.to_bits(), value.to_bits());
    }
}

#[test]
fn test_runs_of_continuation_bytes_never_decode() {
    for len in 0..20 {
        let data = vec![0xffu8; len];
        assert!(from_bytes::<i16>(&data).is_err(), "i16 from {len} bytes");
        assert!(from_bytes::<u16>(&data).is_err(), "u16 from {len} bytes");
        assert!(from_bytes::<i32>(&data).is_err(), "i32 from {len} bytes");
        assert!(from_bytes::<u32>(&data).is_err(), "u32 from {len} bytes");
        assert!(from_bytes::<i64>(&data).is_err(), "i64 from {len} bytes");
        assert!(from_bytes::<u64>(&data).is_err(), "u64 from {len} bytes");
        assert!(from_bytes::<Vec<i8>>(&data).is_err(), "Vec<i8> from {len} bytes");
    }
}

#[test]
fn test_oversized_varint_boundaries() {
    let bytes = hex::decode("ffffff01").unwrap();
    assert_eq!(
        from_bytes::<u16>(&bytes),
        Err(DecodeError::OversizedVarint { max_groups: 3 })
    );

    let bytes = hex::decode("ffffffffff01").unwrap();
    assert_eq!(
        from_bytes::<u32>(&bytes),
        Err(DecodeError::OversizedVarint { max_groups: 5 })
    );

    let bytes = hex::decode("ffffffffffffffffffff01").unwrap();
    assert_eq!(
        from_bytes::<u64>(&bytes),
        Err(DecodeError::OversizedVarint { max_groups: 10 })
    );
}
