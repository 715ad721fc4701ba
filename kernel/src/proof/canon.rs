//! Canonical JSON bytes: the one serialization used for hashing.
//!
//! Every digest over structured data (policy snapshots, traces, run records)
//! goes through [`canonical_json_bytes`] so equal values always hash equal.
//!
//! # Rules
//!
//! 1. Object keys sorted by byte order, at every depth.
//! 2. Compact form, no whitespace.
//! 3. Numbers must be integers; floats are rejected (their textual form is
//!    not stable enough to commit to).
//! 4. Strings use `serde_json`'s escaping.

use std::collections::BTreeMap;

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A JSON number was not an integer.
    NonIntegerNumber { raw: String },
    /// `serde_json` refused to write a scalar or key.
    Write { detail: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerNumber { raw } => {
                write!(f, "non-integer number in canonical JSON: {raw}")
            }
            Self::Write { detail } => write!(f, "canonical JSON write failed: {detail}"),
        }
    }
}

impl std::error::Error for CanonError {}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is not an `i64` or
/// `u64`.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    let mut out = Vec::new();
    emit(&mut out, value)?;
    Ok(out)
}

fn emit(out: &mut Vec<u8>, value: &serde_json::Value) -> Result<(), CanonError> {
    use serde_json::Value;

    match value {
        Value::Null | Value::Bool(_) | Value::String(_) => {
            // Scalars other than numbers have exactly one serde_json form.
            serde_json::to_writer(&mut *out, value).map_err(write_failed)?;
        }
        Value::Number(n) => match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => out.extend_from_slice(i.to_string().as_bytes()),
            (None, Some(u)) => out.extend_from_slice(u.to_string().as_bytes()),
            (None, None) => return Err(CanonError::NonIntegerNumber { raw: n.to_string() }),
        },
        Value::Array(items) => {
            out.push(b'[');
            for (idx, item) in items.iter().enumerate() {
                separate(out, idx);
                emit(out, item)?;
            }
            out.push(b']');
        }
        Value::Object(map) => {
            // `str` ordering is byte ordering.
            let sorted: BTreeMap<&str, &Value> =
                map.iter().map(|(k, v)| (k.as_str(), v)).collect();
            out.push(b'{');
            for (idx, (key, item)) in sorted.into_iter().enumerate() {
                separate(out, idx);
                serde_json::to_writer(&mut *out, key).map_err(write_failed)?;
                out.push(b':');
                emit(out, item)?;
            }
            out.push(b'}');
        }
    }
    Ok(())
}

#[allow(clippy::needless_pass_by_value)]
fn write_failed(err: serde_json::Error) -> CanonError {
    CanonError::Write {
        detail: err.to_string(),
    }
}

fn separate(out: &mut Vec<u8>, idx: usize) {
    if idx > 0 {
        out.push(b',');
    }
}
