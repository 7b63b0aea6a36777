//! Named container of numeric items

use tracing::{debug, warn};

use crate::error::{Result, SaplingError};
use crate::numeric::calculate_average;
use crate::Value;

/// A named, ordered collection of items with a running count.
///
/// `count()` always equals `items().len()`.
///
/// # Example
///
/// ```
/// use sapling::{DataManager, Value};
///
/// let mut manager = DataManager::new("Test");
/// assert_eq!(manager.calculate_average().unwrap(), Value::Int(0));
///
/// manager.add_item(Value::Int(4));
/// manager.add_item(Value::Int(6));
/// assert_eq!(manager.calculate_average().unwrap(), Value::Float(5.0));
///
/// manager.remove_item(&Value::Int(4)).unwrap();
/// assert!(manager.remove_item(&Value::Int(4)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DataManager {
    name: String,
    items: Vec<Value>,
    count: usize,
}

impl DataManager {
    /// Create an empty container.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_items(name, Vec::new())
    }

    /// Create a container seeded with `items`.
    pub fn with_items(name: impl Into<String>, items: Vec<Value>) -> Self {
        let count = items.len();
        Self {
            name: name.into(),
            items,
            count,
        }
    }

    /// The container's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stored items in insertion order
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Number of stored items
    pub fn count(&self) -> usize {
        self.count
    }

    /// Append an item.
    pub fn add_item(&mut self, item: Value) {
        debug!(manager = %self.name, %item, "adding item");
        self.items.push(item);
        self.count += 1;
    }

    /// Remove the first item equal to `item`.
    pub fn remove_item(&mut self, item: &Value) -> Result<()> {
        match self.items.iter().position(|existing| existing == item) {
            Some(index) => {
                self.items.remove(index);
                self.count -= 1;
                debug!(manager = %self.name, %item, "removed item");
                Ok(())
            }
            None => {
                warn!(manager = %self.name, %item, "item not found");
                Err(SaplingError::ValueError(format!("item not found: {}", item)))
            }
        }
    }

    /// Mean of the items, or `0` when there are none.
    pub fn calculate_average(&self) -> Result<Value> {
        Ok(calculate_average(&self.items)?.unwrap_or(Value::Int(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let manager = DataManager::new("Test");
        assert_eq!(manager.name(), "Test");
        assert!(manager.items().is_empty());
        assert_eq!(manager.count(), 0);
        assert_eq!(manager.calculate_average().unwrap(), Value::Int(0));
    }

    #[test]
    fn test_with_items_sets_count() {
        let manager = DataManager::with_items("Seeded", vec![Value::Int(1), Value::Int(2)]);
        assert_eq!(manager.count(), 2);
    }

    #[test]
    fn test_add_and_average() {
        let mut manager = DataManager::new("Test");
        manager.add_item(Value::Int(4));
        manager.add_item(Value::Int(6));
        assert_eq!(manager.count(), 2);
        assert_eq!(manager.calculate_average().unwrap(), Value::Float(5.0));
    }

    #[test]
    fn test_remove_first_occurrence() {
        let mut manager =
            DataManager::with_items("Dups", vec![Value::Int(1), Value::Int(2), Value::Int(1)]);
        manager.remove_item(&Value::Int(1)).unwrap();
        assert_eq!(manager.items(), &[Value::Int(2), Value::Int(1)]);
        assert_eq!(manager.count(), 2);
    }

    #[test]
    fn test_remove_matches_numerically() {
        let mut manager = DataManager::with_items("Mixed", vec![Value::Float(4.0)]);
        manager.remove_item(&Value::Int(4)).unwrap();
        assert_eq!(manager.count(), 0);
    }

    #[test]
    fn test_remove_missing_is_value_error() {
        let mut manager = DataManager::new("Test");
        let err = manager.remove_item(&Value::Int(4)).unwrap_err();
        assert!(matches!(err, SaplingError::ValueError(_)));
        assert_eq!(manager.count(), 0);
    }

    #[test]
    fn test_average_of_large_integers() {
        let manager =
            DataManager::with_items("big", vec![Value::Int(i64::MAX), Value::Int(i64::MAX)]);
        assert_eq!(
            manager.calculate_average().unwrap(),
            Value::Float(i64::MAX as f64)
        );
    }

    #[test]
    fn test_average_non_numeric_item() {
        let manager = DataManager::with_items("Bad", vec![Value::string("x")]);
        assert!(manager.calculate_average().is_err());
    }

    #[test]
    fn test_containers_do_not_share_items() {
        let mut first = DataManager::new("Test");
        let mut second = DataManager::new("Another");
        first.add_item(Value::Int(10));
        second.add_item(Value::Int(20));
        assert_eq!(first.items(), &[Value::Int(10)]);
        assert_eq!(second.items(), &[Value::Int(20)]);
    }
}
