//! Hashable wrapper for Value to enable use as map keys

use std::hash::{Hash, Hasher};

use super::Value;
use crate::error::{type_name, Result, SaplingError};

/// A wrapper for Value that implements Hash and Eq.
///
/// Only primitives, strings and finite floats can be keys. Integral floats
/// hash the same as the equal integer, so `2` and `2.0` share a key.
#[derive(Debug, Clone)]
pub struct HashableValue(Value);

impl HashableValue {
    /// Wrap a value, rejecting lists and NaN.
    pub fn new(value: Value) -> Result<Self> {
        if Self::is_hashable(&value) {
            Ok(Self(value))
        } else {
            Err(SaplingError::TypeError {
                expected: "hashable value".to_string(),
                got: type_name(&value).to_string(),
            })
        }
    }

    /// Check if a value can be hashed
    pub fn is_hashable(value: &Value) -> bool {
        match value {
            Value::Unit | Value::Bool(_) | Value::Int(_) | Value::String(_) => true,
            Value::Float(f) => !f.is_nan(),
            Value::List(_) => false,
        }
    }

    /// The wrapped value
    pub fn value(&self) -> &Value {
        &self.0
    }
}

impl Hash for HashableValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.0 {
            Value::Unit => 0u8.hash(state),
            Value::Bool(b) => {
                1u8.hash(state);
                b.hash(state);
            }
            Value::Int(n) => {
                2u8.hash(state);
                n.hash(state);
            }
            // Integral floats must collide with the equal Int
            Value::Float(f) if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 => {
                2u8.hash(state);
                (*f as i64).hash(state);
            }
            Value::Float(f) => {
                3u8.hash(state);
                // -0.0 is integral and handled above
                f.to_bits().hash(state);
            }
            Value::String(s) => {
                4u8.hash(state);
                s.hash(state);
            }
            // Unreachable through `new`
            Value::List(_) => 5u8.hash(state),
        }
    }
}

impl PartialEq for HashableValue {
    fn eq(&self, other: &Self) -> bool {
        // Delegate to Value's PartialEq
        self.0 == other.0
    }
}

impl Eq for HashableValue {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(v: &HashableValue) -> u64 {
        let mut h = DefaultHasher::new();
        v.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_rejects_list_and_nan() {
        assert!(HashableValue::new(Value::list(vec![])).is_err());
        assert!(HashableValue::new(Value::Float(f64::NAN)).is_err());
    }

    #[test]
    fn test_integral_float_matches_int() {
        let a = HashableValue::new(Value::Int(2)).unwrap();
        let b = HashableValue::new(Value::Float(2.0)).unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_negative_zero_matches_zero() {
        let a = HashableValue::new(Value::Float(-0.0)).unwrap();
        let b = HashableValue::new(Value::Int(0)).unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_bool_is_not_int() {
        let a = HashableValue::new(Value::Bool(true)).unwrap();
        let b = HashableValue::new(Value::Int(1)).unwrap();
        assert_ne!(a, b);
    }
}
