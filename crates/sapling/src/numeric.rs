//! Sums, averages, range checks and the small calculator

use std::cmp::Ordering;

use crate::context::Bounds;
use crate::error::{Result, SaplingError};
use crate::ops;
use crate::Value;

/// Add two numbers.
///
/// ```
/// use sapling::{calculate_sum, Value};
///
/// assert_eq!(calculate_sum(&Value::Int(-1), &Value::Int(5)).unwrap(), Value::Int(4));
/// assert_eq!(
///     calculate_sum(&Value::Float(10.5), &Value::Float(4.5)).unwrap(),
///     Value::Float(15.0)
/// );
/// assert!(calculate_sum(&Value::Int(1), &Value::from("a")).is_err());
/// ```
pub fn calculate_sum(a: &Value, b: &Value) -> Result<Value> {
    ops::add(a, b)
}

/// True iff `0 < number < 100`.
pub fn is_between_zero_and_hundred(number: &Value) -> Result<bool> {
    is_between(number, &Bounds::default())
}

/// True iff `bounds.lower < number < bounds.upper`.
pub fn is_between(number: &Value, bounds: &Bounds) -> Result<bool> {
    let x = number
        .as_f64()
        .ok_or_else(|| SaplingError::not_numeric(number))?;
    Ok(bounds.lower < x && x < bounds.upper)
}

// Accumulated in f64 so large integers cannot overflow the total
fn sum(values: &[Value]) -> Result<f64> {
    values.iter().try_fold(0.0, |acc, v| {
        v.as_f64()
            .map(|x| acc + x)
            .ok_or_else(|| SaplingError::not_numeric(v))
    })
}

/// Arithmetic mean of `values`, or `None` when there are none.
pub fn calculate_average(values: &[Value]) -> Result<Option<Value>> {
    if values.is_empty() {
        return Ok(None);
    }
    let total = sum(values)?;
    Ok(Some(Value::Float(total / values.len() as f64)))
}

/// Largest element of `values`, or `None` when there are none.
///
/// Ties keep the first occurrence.
pub fn find_maximum(values: &[Value]) -> Result<Option<Value>> {
    let mut iter = values.iter();
    let Some(first) = iter.next() else {
        return Ok(None);
    };
    let mut max = first;
    for item in iter {
        if ops::compare(item, max)? == Ordering::Greater {
            max = item;
        }
    }
    Ok(Some(max.clone()))
}

/// Calculator with a result register updated by [`Calculator::add`].
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    result: Value,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator with `result` set to zero.
    pub fn new() -> Self {
        Self {
            result: Value::Int(0),
        }
    }

    /// The last stored result.
    pub fn result(&self) -> &Value {
        &self.result
    }

    /// Store `x + y` as the result and return it.
    pub fn add(&mut self, x: &Value, y: &Value) -> Result<Value> {
        self.result = ops::add(x, y)?;
        Ok(self.result.clone())
    }

    /// `x / y`. A zero divisor is a value error; the result register is untouched.
    pub fn divide(&self, x: &Value, y: &Value) -> Result<Value> {
        ops::div(x, y).map_err(|e| match e {
            SaplingError::DivisionByZero => {
                SaplingError::ValueError("cannot divide by zero".to_string())
            }
            other => other,
        })
    }
}
