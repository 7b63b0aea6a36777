//! # Sapling
//!
//! Small numeric utilities over a dynamically-typed [`Value`].
//!
//! Every operation accepts runtime values and reports wrong-typed input as
//! [`SaplingError::TypeError`] rather than panicking.
//!
//! ## Contents
//!
//! - **Arithmetic**: [`calculate_sum`], [`is_between_zero_and_hundred`],
//!   [`calculate_average`], [`find_maximum`], [`Calculator`]
//! - **Countdown**: [`count_down`] and the [`Countdown`] iterator
//! - **Memoized transform**: [`compute_value`], [`process_data`], [`MemoCache`]
//! - **Sorting**: [`inefficient_sort`], [`bubble_sort`]
//! - **Files**: [`read_file`]
//! - **State**: [`Accumulator`], [`DataManager`]
//!
//! State is always owned by the caller: there are no process-wide statics
//! and no shared default caches.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod accumulator;
pub mod container;
pub mod context;
pub mod countdown;
pub mod error;
pub mod files;
pub mod numeric;
pub mod ops;
pub mod sort;
pub mod transform;
pub mod value;

// Re-export main types
pub use accumulator::{global_modifier, Accumulator};
pub use container::DataManager;
pub use context::{Bounds, Context};
pub use countdown::{count_down, count_down_to, countdown, Countdown};
pub use error::{Result, SaplingError};
pub use files::read_file;
pub use numeric::{
    calculate_average, calculate_sum, find_maximum, is_between, is_between_zero_and_hundred,
    Calculator,
};
pub use sort::{bubble_sort, inefficient_sort};
pub use transform::{compute_value, process_data, process_data_with, MemoCache};
pub use value::{HashableValue, Value};

/// Sapling version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
