//! Numeric operations on runtime values
//!
//! `Int ∘ Int` stays integral and uses checked arithmetic. Any operation
//! involving a `Float` promotes both operands to `f64`. Everything else is
//! a type error.

use std::cmp::Ordering;

use crate::error::{Result, SaplingError};
use crate::Value;

/// Operand pair after numeric promotion.
enum Numeric {
    Ints(i64, i64),
    Floats(f64, f64),
}

fn promote(left: &Value, right: &Value) -> Result<Numeric> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(Numeric::Ints(*a, *b)),
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
            // Both sides are numeric here, so as_f64 cannot fail
            let a = left.as_f64().ok_or_else(|| SaplingError::not_numeric(left))?;
            let b = right.as_f64().ok_or_else(|| SaplingError::not_numeric(right))?;
            Ok(Numeric::Floats(a, b))
        }
        (Value::Int(_) | Value::Float(_), other) => Err(SaplingError::not_numeric(other)),
        (other, _) => Err(SaplingError::not_numeric(other)),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Arithmetic Operations
// ═══════════════════════════════════════════════════════════════════════

/// `left + right`
pub fn add(left: &Value, right: &Value) -> Result<Value> {
    match promote(left, right)? {
        Numeric::Ints(a, b) => a
            .checked_add(b)
            .map(Value::Int)
            .ok_or(SaplingError::IntegerOverflow),
        Numeric::Floats(a, b) => Ok(Value::Float(a + b)),
    }
}

/// `left * right`
pub fn mul(left: &Value, right: &Value) -> Result<Value> {
    match promote(left, right)? {
        Numeric::Ints(a, b) => a
            .checked_mul(b)
            .map(Value::Int)
            .ok_or(SaplingError::IntegerOverflow),
        Numeric::Floats(a, b) => Ok(Value::Float(a * b)),
    }
}

/// `left / right`, always producing a float.
pub fn div(left: &Value, right: &Value) -> Result<Value> {
    let (a, b) = match promote(left, right)? {
        Numeric::Ints(a, b) => (a as f64, b as f64),
        Numeric::Floats(a, b) => (a, b),
    };
    if b == 0.0 {
        return Err(SaplingError::DivisionByZero);
    }
    Ok(Value::Float(a / b))
}

/// Floored remainder: the result takes the sign of the divisor.
pub fn rem(left: &Value, right: &Value) -> Result<Value> {
    match promote(left, right)? {
        Numeric::Ints(_, 0) => Err(SaplingError::DivisionByZero),
        Numeric::Ints(a, b) => {
            let r = a.checked_rem(b).ok_or(SaplingError::IntegerOverflow)?;
            if r != 0 && ((r < 0) != (b < 0)) {
                Ok(Value::Int(r + b))
            } else {
                Ok(Value::Int(r))
            }
        }
        Numeric::Floats(_, b) if b == 0.0 => Err(SaplingError::DivisionByZero),
        Numeric::Floats(a, b) => {
            let r = a % b;
            if r != 0.0 && ((r < 0.0) != (b < 0.0)) {
                Ok(Value::Float(r + b))
            } else {
                Ok(Value::Float(r))
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Comparison
// ═══════════════════════════════════════════════════════════════════════

/// Order two values. Numbers order numerically, strings lexicographically.
///
/// Mixed or unordered operands (including NaN) are a type error.
pub fn compare(left: &Value, right: &Value) -> Result<Ordering> {
    if let (Value::String(a), Value::String(b)) = (left, right) {
        return Ok(a.as_str().cmp(b.as_str()));
    }
    let ordering = match promote(left, right)? {
        Numeric::Ints(a, b) => Some(a.cmp(&b)),
        Numeric::Floats(a, b) => a.partial_cmp(&b),
    };
    ordering.ok_or_else(|| SaplingError::TypeError {
        expected: "ordered number".to_string(),
        got: "NaN".to_string(),
    })
}

/// `left > right`
pub fn gt(left: &Value, right: &Value) -> Result<bool> {
    Ok(compare(left, right)? == Ordering::Greater)
}
