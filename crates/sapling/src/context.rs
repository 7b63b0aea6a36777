//! Configuration for Sapling operations

use serde::{Deserialize, Serialize};

use crate::error::{Result, SaplingError};
use crate::value::Value;

/// Exclusive numeric bounds: a value is inside when `lower < x < upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    /// Exclusive lower bound
    pub lower: f64,

    /// Exclusive upper bound
    pub upper: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            lower: 0.0,
            upper: 100.0,
        }
    }
}

impl Bounds {
    /// Create bounds, rejecting empty or inverted ranges.
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        let bounds = Self { lower, upper };
        bounds.validate()?;
        Ok(bounds)
    }

    fn validate(&self) -> Result<()> {
        // NaN fails this comparison too
        if self.lower < self.upper {
            Ok(())
        } else {
            Err(SaplingError::Config(format!(
                "lower bound {} must be below upper bound {}",
                self.lower, self.upper
            )))
        }
    }
}

/// Configuration passed to operations that have tunable behaviour.
///
/// Loadable from JSON; any omitted field keeps its default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Context {
    /// Range used by [`Context::is_between`]
    pub bounds: Bounds,

    /// Whether to emit a trace event per processed element
    pub trace: bool,
}

impl Context {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with custom bounds.
    pub fn with_bounds(bounds: Bounds) -> Self {
        Self {
            bounds,
            ..Default::default()
        }
    }

    /// Create a context with per-element tracing enabled.
    pub fn with_trace() -> Self {
        Self {
            trace: true,
            ..Default::default()
        }
    }

    /// Parse a context from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let ctx: Context =
            serde_json::from_str(json).map_err(|e| SaplingError::Config(e.to_string()))?;
        ctx.bounds.validate()?;
        Ok(ctx)
    }

    /// Check `value` against the configured bounds.
    pub fn is_between(&self, value: &Value) -> Result<bool> {
        crate::numeric::is_between(value, &self.bounds)
    }
}
