//! Value type and the symmetric pair-hash combinator.
//!
//! Values are 256 bits (the Blake3 output width), so leaf data and hash
//! outputs share one width and combine interchangeably at every layer.
//! The combinator is `blake3(a XOR b)`: XOR-ing before hashing makes the
//! pair hash symmetric, so proofs carry no left/right position bits and
//! verification folds siblings in plain order.

use crate::{Error, Result};

/// Width of a [`Value`] in bytes (the Blake3 output width).
pub const VALUE_WIDTH: usize = 32;

/// A 256-bit value, used both as leaf data and as hash output.
pub type Value = [u8; VALUE_WIDTH];

/// The padding sentinel appended to odd-length layers before pairing.
///
/// A real all-zero leaf is indistinguishable from padding; callers must
/// not commit `EMPTY_VALUE` as actual data.
pub const EMPTY_VALUE: Value = [0u8; VALUE_WIDTH];

/// Combine two values into their parent: `blake3(a XOR b)`.
///
/// Symmetric (`combine(a, b) == combine(b, a)`) and bit-exact across
/// implementations sharing the Blake3 primitive, since roots are
/// cross-system commitments.
pub fn combine(a: &Value, b: &Value) -> Value {
    let mut input = [0u8; VALUE_WIDTH];
    for (out, (x, y)) in input.iter_mut().zip(a.iter().zip(b.iter())) {
        *out = x ^ y;
    }
    *blake3::hash(&input).as_bytes()
}

/// Convert a byte slice into a [`Value`], rejecting any other width.
pub fn value_from_slice(bytes: &[u8]) -> Result<Value> {
    bytes.try_into().map_err(|_| {
        Error::InvalidInput(format!(
            "expected {} bytes, got {}",
            VALUE_WIDTH,
            bytes.len()
        ))
    })
}

/// Parse a [`Value`] from a 64-character hex string.
pub fn value_from_hex(s: &str) -> Result<Value> {
    let bytes = hex::decode(s).map_err(|e| Error::InvalidInput(format!("invalid hex: {}", e)))?;
    value_from_slice(&bytes)
}

/// Render a [`Value`] as lowercase hex.
pub fn value_to_hex(value: &Value) -> String {
    hex::encode(value)
}
