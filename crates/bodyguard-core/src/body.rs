use crate::errors::{DecodeError, DecodeResult};
use serde::de::{self, DeserializeSeed, MapAccess, SeqAccess, Visitor};
use serde_json::{Map, Number, Value};
use std::fmt;

/// Decode a raw request body into a JSON value.
///
/// Whitespace-only input is reported as [`DecodeError::Empty`] rather than as
/// an EOF parse error so callers can tell "no body" from "bad body".
///
/// Nesting depth is not capped: the decoder runs on a stack that grows onto
/// the heap as needed. Release deep values with [`dispose`]. Partial values
/// left behind by a parse error, and values overwritten by a duplicate key,
/// are disposed the same way.
pub fn decode_body(bytes: &[u8]) -> DecodeResult<Value> {
    if bytes.iter().all(|b| is_json_whitespace(*b)) {
        return Err(DecodeError::Empty);
    }

    let mut de = serde_json::Deserializer::from_slice(bytes);
    de.disable_recursion_limit();
    let value = ValueSeed.deserialize(serde_stacker::Deserializer::new(&mut de))?;
    if let Err(e) = de.end() {
        dispose(value);
        return Err(e.into());
    }
    Ok(value)
}

/// Drop `value` without recursing, whatever its depth.
///
/// The default `Drop` of a `Value` recurses once per nesting level.
pub fn dispose(value: Value) {
    let mut pending = vec![value];
    while let Some(v) = pending.pop() {
        match v {
            Value::Array(items) => pending.extend(items),
            Value::Object(map) => pending.extend(map.into_iter().map(|(_, child)| child)),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
        }
    }
}

// Builds a `Value` like serde_json's own visitor, except that nothing deep is
// ever dropped recursively.
struct ValueSeed;

impl<'de> DeserializeSeed<'de> for ValueSeed {
    type Value = Value;

    fn deserialize<D: de::Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Number::from_f64(v).map_or(Value::Null, Value::Number))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::new();
        loop {
            match seq.next_element_seed(ValueSeed) {
                Ok(Some(item)) => items.push(item),
                Ok(None) => return Ok(Value::Array(items)),
                Err(e) => {
                    dispose(Value::Array(items));
                    return Err(e);
                }
            }
        }
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Value, A::Error> {
        let mut map = Map::new();
        match fill_map(&mut map, &mut access) {
            Ok(()) => Ok(Value::Object(map)),
            Err(e) => {
                dispose(Value::Object(map));
                Err(e)
            }
        }
    }
}

// Last write wins on duplicate keys.
fn fill_map<'de, A: MapAccess<'de>>(
    map: &mut Map<String, Value>,
    access: &mut A,
) -> Result<(), A::Error> {
    while let Some(key) = access.next_key::<String>()? {
        let value = access.next_value_seed(ValueSeed)?;
        if let Some(replaced) = map.insert(key, value) {
            dispose(replaced);
        }
    }
    Ok(())
}

// RFC 8259 insignificant whitespace. Narrower than u8::is_ascii_whitespace (no form feed).
fn is_json_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}
