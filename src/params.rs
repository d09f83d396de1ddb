//! Operand extraction.
//!
//! A body yields at most one [`OperandPair`]. JSON objects are first read as
//! a JSON-RPC envelope and a `params` array of two integers wins. When that
//! gives nothing, the whole body is scanned for the first bracket pair
//! `[<digits>,<ws>*<digits>]`.
//!
//! Both paths accept unsigned decimal literals only: `-3`, `2.5` or `1e3`
//! never form an operand, so such bodies fall through to "no match".

use std::sync::OnceLock;

use regex::Regex;
use serde_json::value::RawValue;

use crate::error::RpcError;
use crate::protocol::SumRequest;

/// The two operands of an addition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandPair {
    pub left: i64,
    pub right: i64,
}

impl OperandPair {
    /// Add the operands, failing instead of wrapping on overflow.
    pub fn checked_sum(&self) -> Result<i64, RpcError> {
        self.left
            .checked_add(self.right)
            .ok_or(RpcError::SumOverflow {
                left: self.left,
                right: self.right,
            })
    }
}

/// Extract the operand pair from a request body.
///
/// `Ok(None)` means the body holds no usable pair. `Err` is reserved for
/// literals that match the grammar but do not fit in an `i64`.
pub fn extract(body: &str) -> Result<Option<OperandPair>, RpcError> {
    if let Some(request) = parse_envelope(body) {
        if let Some(pair) = from_envelope(&request)? {
            return Ok(Some(pair));
        }
    }
    scan_bracket_pair(body)
}

fn parse_envelope(body: &str) -> Option<SumRequest> {
    if !body.trim_start().starts_with('{') {
        return None;
    }
    serde_json::from_str(body).ok()
}

/// Read the operands from an envelope's `params` member.
///
/// `params` must be an array of exactly two unsigned integer literals.
pub fn from_envelope(request: &SumRequest) -> Result<Option<OperandPair>, RpcError> {
    let Some(params) = request.params.as_deref() else {
        return Ok(None);
    };

    let items: Vec<&RawValue> = match serde_json::from_str(params.get()) {
        Ok(items) => items,
        Err(_) => return Ok(None),
    };

    let [left, right] = items.as_slice() else {
        return Ok(None);
    };

    match (unsigned_literal(left.get()), unsigned_literal(right.get())) {
        (Some(left), Some(right)) => Ok(Some(OperandPair {
            left: parse_operand(left)?,
            right: parse_operand(right)?,
        })),
        _ => Ok(None),
    }
}

/// Find the first `[<digits>,<ws>*<digits>]` in `text`.
pub fn scan_bracket_pair(text: &str) -> Result<Option<OperandPair>, RpcError> {
    let Some(caps) = bracket_pair().captures(text) else {
        return Ok(None);
    };

    Ok(Some(OperandPair {
        left: parse_operand(&caps[1])?,
        right: parse_operand(&caps[2])?,
    }))
}

// Explicit ASCII classes; `\d` and `\s` are Unicode-aware in `regex`.
fn bracket_pair() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\[([0-9]+),[ \t\n\x0B\x0C\r]*([0-9]+)\]")
            .expect("bracket pair pattern must compile")
    })
}

fn unsigned_literal(raw: &str) -> Option<&str> {
    let raw = raw.trim();
    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        Some(raw)
    } else {
        None
    }
}

fn parse_operand(digits: &str) -> Result<i64, RpcError> {
    digits
        .parse::<i64>()
        .map_err(|_| RpcError::OperandOutOfRange {
            digits: digits.len(),
        })
}
