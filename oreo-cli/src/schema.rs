//! Runtime schema descriptions and a JSON-driven codec
//!
//! Oreo archives carry no type information, so the tool needs the layout from
//! somewhere. A schema is a small JSON document:
//!
//! ```json
//! {"struct": [
//!     {"name": "id", "type": "u32"},
//!     {"name": "tags", "type": {"seq": "string"}},
//!     {"name": "origin", "type": {"array": ["f32", 2]}},
//!     {"name": "parent", "type": {"option": "u64"}}
//! ]}
//! ```
//!
//! Encoding and decoding follow exactly the rules of the typed `Archive`
//! implementations in `oreo-core`.

use anyhow::{anyhow, bail, Context, Result};
use bytes::Bytes;
use oreo_core::{Archive, DecodeError, Decoder, Encoder, Limits};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;

/// Shape of an archived value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schema {
    /// One byte, 0 or 1
    Bool,
    /// Raw signed byte
    I8,
    /// Raw unsigned byte
    U8,
    /// Varint
    I16,
    /// Varint
    U16,
    /// Varint
    I32,
    /// Varint
    U32,
    /// Varint
    I64,
    /// Varint
    U64,
    /// Four native-order bytes
    F32,
    /// Eight native-order bytes
    F64,
    /// Length-prefixed UTF-8
    #[serde(rename = "string")]
    Str,
    /// Length-prefixed run of elements
    Seq(Box<Schema>),
    /// Fixed number of elements, no prefix
    Array(Box<Schema>, usize),
    /// Presence byte and optional payload
    #[serde(rename = "option")]
    Optional(Box<Schema>),
    /// Members in order
    Struct(Vec<Field>),
}

/// Named member of a struct schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Key used in the JSON object
    pub name: String,
    /// Member shape
    #[serde(rename = "type")]
    pub ty: Schema,
}

impl Schema {
    /// Load a schema from a JSON file
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read schema file: {}", path))?;
        serde_json::from_str(&content).with_context(|| format!("Invalid schema in {}", path))
    }

    /// Fewest bytes any value of this shape occupies
    pub fn min_encoded_len(&self) -> usize {
        match self {
            Schema::Bool => bool::MIN_ENCODED_LEN,
            Schema::I8 => i8::MIN_ENCODED_LEN,
            Schema::U8 => u8::MIN_ENCODED_LEN,
            Schema::I16 | Schema::U16 | Schema::I32 | Schema::U32 | Schema::I64 | Schema::U64 => {
                u64::MIN_ENCODED_LEN
            }
            Schema::F32 => f32::MIN_ENCODED_LEN,
            Schema::F64 => f64::MIN_ENCODED_LEN,
            Schema::Str => String::MIN_ENCODED_LEN,
            Schema::Seq(_) | Schema::Optional(_) => 1,
            Schema::Array(inner, n) => inner.min_encoded_len().saturating_mul(*n),
            Schema::Struct(fields) => fields
                .iter()
                .map(|f| f.ty.min_encoded_len())
                .fold(0, usize::saturating_add),
        }
    }

    /// Encode a JSON value laid out by this schema
    pub fn encode(&self, value: &Value) -> Result<Bytes> {
        let mut encoder = Encoder::new();
        encode_value(self, value, &mut encoder)?;
        Ok(encoder.into_bytes())
    }

    /// Decode one value from the start of `data`
    ///
    /// Returns the value and the number of bytes it occupied.
    pub fn decode(&self, data: &[u8], limits: Limits) -> Result<(Value, usize), DecodeError> {
        let mut decoder = Decoder::with_limits(data, limits);
        let value = decode_value(self, &mut decoder)?;
        Ok((value, decoder.position()))
    }
}

fn integer<T>(value: &Value) -> Result<T>
where
    T: TryFrom<u64> + TryFrom<i64>,
{
    if let Some(n) = value.as_u64() {
        return <T as TryFrom<u64>>::try_from(n).map_err(|_| anyhow!("{} is out of range", n));
    }
    if let Some(n) = value.as_i64() {
        return <T as TryFrom<i64>>::try_from(n).map_err(|_| anyhow!("{} is out of range", n));
    }
    bail!("expected an integer, got {}", value)
}

fn float(value: &Value) -> Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| anyhow!("expected a number, got {}", value))
}

fn items<'v>(value: &'v Value) -> Result<&'v Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| anyhow!("expected an array, got {}", value))
}

/// Append `value` to the encoder following `schema`
pub fn encode_value(schema: &Schema, value: &Value, encoder: &mut Encoder) -> Result<()> {
    match schema {
        Schema::Bool => {
            let b = value
                .as_bool()
                .ok_or_else(|| anyhow!("expected a boolean, got {}", value))?;
            encoder.process(&b);
        }
        Schema::I8 => {
            encoder.process(&integer::<i8>(value)?);
        }
        Schema::U8 => {
            encoder.process(&integer::<u8>(value)?);
        }
        Schema::I16 => {
            encoder.process(&integer::<i16>(value)?);
        }
        Schema::U16 => {
            encoder.process(&integer::<u16>(value)?);
        }
        Schema::I32 => {
            encoder.process(&integer::<i32>(value)?);
        }
        Schema::U32 => {
            encoder.process(&integer::<u32>(value)?);
        }
        Schema::I64 => {
            encoder.process(&integer::<i64>(value)?);
        }
        Schema::U64 => {
            encoder.process(&integer::<u64>(value)?);
        }
        Schema::F32 => {
            encoder.process(&(float(value)? as f32));
        }
        Schema::F64 => {
            encoder.process(&float(value)?);
        }
        Schema::Str => {
            let s = value
                .as_str()
                .ok_or_else(|| anyhow!("expected a string, got {}", value))?;
            encoder.write_length(s.len());
            encoder.write_bytes(s.as_bytes());
        }
        Schema::Seq(inner) => {
            let elements = items(value)?;
            encoder.write_length(elements.len());
            for (i, element) in elements.iter().enumerate() {
                encode_value(inner, element, encoder).with_context(|| format!("element {}", i))?;
            }
        }
        Schema::Array(inner, n) => {
            let elements = items(value)?;
            if elements.len() != *n {
                bail!("expected {} elements, got {}", n, elements.len());
            }
            for (i, element) in elements.iter().enumerate() {
                encode_value(inner, element, encoder).with_context(|| format!("element {}", i))?;
            }
        }
        Schema::Optional(inner) => {
            if value.is_null() {
                encoder.process(&false);
            } else {
                encoder.process(&true);
                encode_value(inner, value, encoder)?;
            }
        }
        Schema::Struct(fields) => {
            let object = value
                .as_object()
                .ok_or_else(|| anyhow!("expected an object, got {}", value))?;
            for field in fields {
                let member = object
                    .get(&field.name)
                    .ok_or_else(|| anyhow!("missing field `{}`", field.name))?;
                encode_value(&field.ty, member, encoder)
                    .with_context(|| format!("field `{}`", field.name))?;
            }
        }
    }
    Ok(())
}

fn read<T: Archive + Default>(decoder: &mut Decoder<'_>) -> Result<T, DecodeError> {
    let mut value = T::default();
    decoder.process(&mut value)?;
    Ok(value)
}

/// Read one value following `schema`
pub fn decode_value(schema: &Schema, decoder: &mut Decoder<'_>) -> Result<Value, DecodeError> {
    let value = match schema {
        Schema::Bool => Value::from(read::<bool>(decoder)?),
        Schema::I8 => Value::from(read::<i8>(decoder)?),
        Schema::U8 => Value::from(read::<u8>(decoder)?),
        Schema::I16 => Value::from(read::<i16>(decoder)?),
        Schema::U16 => Value::from(read::<u16>(decoder)?),
        Schema::I32 => Value::from(read::<i32>(decoder)?),
        Schema::U32 => Value::from(read::<u32>(decoder)?),
        Schema::I64 => Value::from(read::<i64>(decoder)?),
        Schema::U64 => Value::from(read::<u64>(decoder)?),
        Schema::F32 => Value::from(read::<f32>(decoder)?),
        Schema::F64 => Value::from(read::<f64>(decoder)?),
        Schema::Str => Value::from(read::<String>(decoder)?),
        Schema::Seq(inner) => {
            let max = decoder.limits().max_sequence_len;
            let len = decoder.read_length(max, inner.min_encoded_len())?;
            let mut elements = Vec::with_capacity(len);
            for _ in 0..len {
                elements.push(decode_value(inner, decoder)?);
            }
            Value::Array(elements)
        }
        Schema::Array(inner, n) => {
            let needed = schema.min_encoded_len();
            if needed > decoder.remaining() {
                return Err(DecodeError::TruncatedInput {
                    needed,
                    remaining: decoder.remaining(),
                });
            }
            let mut elements = Vec::new();
            for _ in 0..*n {
                elements.push(decode_value(inner, decoder)?);
            }
            Value::Array(elements)
        }
        Schema::Optional(inner) => {
            if read::<bool>(decoder)? {
                decode_value(inner, decoder)?
            } else {
                Value::Null
            }
        }
        Schema::Struct(fields) => {
            let mut object = Map::new();
            for field in fields {
                object.insert(field.name.clone(), decode_value(&field.ty, decoder)?);
            }
            Value::Object(object)
        }
    };
    Ok(value)
}
