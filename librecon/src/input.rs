//! Reading of input documents.
//!
//! An input document is a JSON object declaring how many points it carries and how many of them
//! to reconstruct from, plus one entry per point:
//!
//! ```text
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" },
//!   "3": { "base": "10", "value": "12" },
//!   "6": { "base": "4", "value": "213" }
//! }
//! ```
//!
//! Each point is keyed by its decimal x-coordinate; its y-coordinate is `value` decoded in
//! `base`.

pub(crate) mod errors;

use crate::decode::decode;
use crate::math::constant_term;
use crate::{Error, Point, Result};

use num_bigint::BigInt;
use serde_json::{Map, Value};
use std::convert::TryFrom;
use tracing::debug;

/// Key of the entry declaring `n` and `k`.
const KEYS: &str = "keys";

/// A parsed input document.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Document {
    /// Number of points the document declares.
    pub n: u64,
    /// Number of points to reconstruct from.
    pub k: u64,
    /// Decoded points, ordered by their keys in the document.
    pub points: Vec<Point>,
}

fn malformed<S: Into<String>>(msg: S) -> Error {
    Error::MalformedInput(msg.into())
}

/// Parses and validates an input document, decoding every point.
///
/// Fails if the document is malformed, if a point cannot be decoded, if the number of points is
/// not `n`, or if `k` is not in `[1, n]`.
pub fn parse_document(source: &str) -> Result<Document> {
    let source = source.trim();
    if source.is_empty() {
        return Err(malformed("No input"));
    }

    let document: Value = serde_json::from_str(source).map_err(|_| malformed("Invalid JSON"))?;
    let entries = document
        .as_object()
        .ok_or_else(|| malformed("Invalid JSON"))?;

    let (n, k) = entries
        .get(KEYS)
        .and_then(read_keys)
        .ok_or_else(|| malformed("Missing or invalid 'keys': { n, k }"))?;

    let points = read_points(entries)?;
    debug!(n, k, found = points.len(), "read document");

    if points.len() as u64 != n {
        return Err(Error::PointCountMismatch {
            expected: n,
            found: points.len(),
        });
    }
    let k = match u64::try_from(k) {
        Ok(k) if (1..=n).contains(&k) => k,
        _ => return Err(Error::InvalidThreshold { k, n }),
    };

    Ok(Document { n, k, points })
}

/// `k` may be negative here so that it is reported as an invalid threshold.
fn read_keys(keys: &Value) -> Option<(u64, i64)> {
    let n = keys.get("n")?.as_u64()?;
    let k = keys.get("k")?.as_i64()?;
    Some((n, k))
}

fn read_points(entries: &Map<String, Value>) -> Result<Vec<Point>> {
    entries
        .iter()
        .filter(|(key, _)| key.as_str() != KEYS)
        .map(|(key, record)| read_point(key, record))
        .collect()
}

fn read_point(key: &str, record: &Value) -> Result<Point> {
    let x: BigInt = key
        .trim()
        .parse()
        .map_err(|_| malformed(format!("Invalid x-coordinate '{}'", key)))?;

    let base = record
        .get("base")
        .and_then(read_base)
        .ok_or_else(|| malformed(format!("Missing or invalid 'base' for x={}", x)))?;
    let digits = record
        .get("value")
        .and_then(read_digits)
        .ok_or_else(|| malformed(format!("Missing or invalid 'value' for x={}", x)))?;

    let base = u32::try_from(base).map_err(|_| Error::UnsupportedBase(base))?;
    let y = decode(&digits, base)?;
    debug!(%x, base, %digits, %y, "decoded point");

    Ok(Point { x, y })
}

/// A base is an integer, or a string holding one.
fn read_base(base: &Value) -> Option<i64> {
    match base {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// A value is a string of digits. An integer is taken as its decimal text.
fn read_digits(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        _ => None,
    }
}

/// Selects the `k` points with the smallest x-coordinates, in ascending order of x.
pub fn select_points(mut points: Vec<Point>, k: usize) -> Vec<Point> {
    points.sort_by(|a, b| a.x.cmp(&b.x));
    points.truncate(k);
    points
}

/// Reconstructs the constant term of the polynomial described by an input document.
///
/// ```
/// # use librecon::reconstruct;
/// # use num_bigint::BigInt;
/// let document = r#"{
///     "keys": { "n": 4, "k": 3 },
///     "1": { "base": "10", "value": "4" },
///     "2": { "base": "2", "value": "111" },
///     "3": { "base": "10", "value": "12" },
///     "6": { "base": "4", "value": "213" }
/// }"#;
/// assert_eq!(reconstruct(document), Ok(BigInt::from(3)));
/// ```
pub fn reconstruct(source: &str) -> Result<BigInt> {
    let Document { k, points, .. } = parse_document(source)?;
    let selected = select_points(points, k as usize);
    debug!(
        selected = %selected
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        "selected points"
    );
    constant_term(&selected)
}
