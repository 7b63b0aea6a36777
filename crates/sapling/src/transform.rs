//! Parity transform with memoization
//!
//! Even inputs square, odd inputs map to `2x + 1`. The cache is always
//! supplied by the caller or scoped to a single call; there is no shared
//! default instance.

use indexmap::IndexMap;
use tracing::trace;

use crate::context::Context;
use crate::error::Result;
use crate::value::HashableValue;
use crate::{ops, Value};

/// Insertion-ordered memo table from input to transformed output.
#[derive(Debug, Clone, Default)]
pub struct MemoCache {
    entries: IndexMap<HashableValue, Value>,
    hits: usize,
    misses: usize,
}

impl MemoCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached output.
    pub fn get(&self, input: &Value) -> Option<&Value> {
        let key = HashableValue::new(input.clone()).ok()?;
        self.entries.get(&key)
    }

    /// Store an output, returning any previous value for the input.
    pub fn insert(&mut self, input: Value, output: Value) -> Result<Option<Value>> {
        let key = HashableValue::new(input)?;
        Ok(self.entries.insert(key, output))
    }

    /// Whether an output is cached for `input`.
    pub fn contains(&self, input: &Value) -> bool {
        self.get(input).is_some()
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookups answered from the cache
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Lookups that had to compute
    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Drop all entries and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Iterate cached `(input, output)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k.value(), v))
    }

    fn get_or_compute(&mut self, input: &Value, trace_each: bool) -> Result<Value> {
        let Ok(key) = HashableValue::new(input.clone()) else {
            // NaN cannot be a key; anything else unhashable fails in compute_value
            let output = compute_value(input)?;
            self.misses += 1;
            if trace_each {
                trace!(%input, %output, "uncacheable input");
            }
            return Ok(output);
        };
        if let Some(hit) = self.entries.get(&key) {
            self.hits += 1;
            if trace_each {
                trace!(%input, output = %hit, "cache hit");
            }
            return Ok(hit.clone());
        }
        let output = compute_value(input)?;
        self.misses += 1;
        if trace_each {
            trace!(%input, %output, "cache miss");
        }
        self.entries.insert(key, output.clone());
        Ok(output)
    }
}

/// `x * x` when `x` is even (zero included), `2 * x + 1` when odd.
///
/// ```
/// use sapling::{compute_value, Value};
///
/// assert_eq!(compute_value(&Value::Int(4)).unwrap(), Value::Int(16));
/// assert_eq!(compute_value(&Value::Int(-3)).unwrap(), Value::Int(-5));
/// ```
pub fn compute_value(x: &Value) -> Result<Value> {
    let parity = ops::rem(x, &Value::Int(2))?;
    if parity == Value::Int(0) {
        ops::mul(x, x)
    } else {
        let doubled = ops::mul(x, &Value::Int(2))?;
        ops::add(&doubled, &Value::Int(1))
    }
}

/// Apply [`compute_value`] to each element, memoizing through `cache`.
///
/// A supplied cache keeps its new entries after the call. With `None` a
/// fresh cache is used and dropped on return.
pub fn process_data(data: &[Value], cache: Option<&mut MemoCache>) -> Result<Vec<Value>> {
    process_data_with(data, cache, &Context::default())
}

/// [`process_data`] with per-element tracing controlled by `ctx`.
pub fn process_data_with(
    data: &[Value],
    cache: Option<&mut MemoCache>,
    ctx: &Context,
) -> Result<Vec<Value>> {
    let mut local = MemoCache::new();
    let cache = match cache {
        Some(cache) => cache,
        None => &mut local,
    };
    data.iter()
        .map(|item| cache.get_or_compute(item, ctx.trace))
        .collect()
}
