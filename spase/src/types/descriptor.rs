//! Descriptor parsing shared by the value types.
//!
//! A descriptor is either an array of numbers in a fixed order or an object
//! carrying the same numbers under named keys.

use serde_json::{Map, Value};

use crate::error::DescriptorError;

/// Reads `N` numbers from an array or object descriptor.
///
/// `keys` gives both the object keys and the array order.
pub(crate) fn numbers<const N: usize>(
    kind: &'static str,
    value: &Value,
    keys: [&'static str; N],
) -> Result<[f64; N], DescriptorError> {
    match value {
        Value::Array(items) => {
            if items.len() != N {
                return Err(DescriptorError::arity(kind, N, items.len()));
            }
            let mut out = [0.0; N];
            for ((slot, item), key) in out.iter_mut().zip(items).zip(keys) {
                *slot = item
                    .as_f64()
                    .ok_or_else(|| DescriptorError::not_numeric(kind, key))?;
            }
            Ok(out)
        }
        Value::Object(map) => fields(kind, map, keys),
        _ => Err(DescriptorError::shape(kind)),
    }
}

/// Reads `N` named numeric fields from an object descriptor.
pub(crate) fn fields<const N: usize>(
    kind: &'static str,
    map: &Map<String, Value>,
    keys: [&'static str; N],
) -> Result<[f64; N], DescriptorError> {
    let mut out = [0.0; N];
    for (slot, key) in out.iter_mut().zip(keys) {
        let value = map
            .get(key)
            .ok_or_else(|| DescriptorError::missing_field(kind, key))?;
        *slot = value
            .as_f64()
            .ok_or_else(|| DescriptorError::not_numeric(kind, key))?;
    }
    Ok(out)
}

/// Reads exactly `N` numbers from a slice.
pub(crate) fn slice<const N: usize>(
    kind: &'static str,
    values: &[f64],
) -> Result<[f64; N], DescriptorError> {
    <[f64; N]>::try_from(values).map_err(|_| DescriptorError::arity(kind, N, values.len()))
}
