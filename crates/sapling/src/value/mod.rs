//! Value representation for runtime values

mod display;
mod hashable;
mod impls;

pub use hashable::HashableValue;

use std::sync::Arc;

/// Runtime value accepted by every Sapling operation.
///
/// Values are organized into two tiers:
/// - Tier 1: Inline primitives (no allocation)
/// - Tier 2: Heap-allocated types (Arc-wrapped, cheap to clone)
#[derive(Clone)]
pub enum Value {
    // ═══════════════════════════════════════════════════════════════════
    // Tier 1: Inline Primitives
    // ═══════════════════════════════════════════════════════════════════
    /// Absence of a value
    Unit,

    /// Boolean: `true` or `false`. Never treated as a number.
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    // ═══════════════════════════════════════════════════════════════════
    // Tier 2: Heap-Allocated Types
    // ═══════════════════════════════════════════════════════════════════
    /// Heap-allocated string
    String(Arc<String>),

    /// Ordered sequence of values
    List(Arc<Vec<Value>>),
}
