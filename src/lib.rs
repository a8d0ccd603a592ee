//! Optional values that make absence explicit.
//!
//! An [`Optional`] is either present or absent. It replaces null references
//! and sentinel zero values, and has to be unwrapped before the value can be used.
//!
//! ```
//! use optional::prelude::*;
//!
//! let values = [Optional::empty(), Optional::of(2017)];
//!
//! let mut seen = vec![];
//! for v in &values {
//!     v.if_present(|year| seen.push(*year));
//! }
//! assert_eq!(vec![2017], seen);
//!
//! let years: Vec<_> = values.into_iter().map(|v| v.or(1)).collect();
//! assert_eq!(vec![1, 2017], years);
//! ```
//!
//! With the `serde` feature (on by default) an optional serializes like the
//! value it wraps, or as `null` when absent. Absent fields are left out of
//! the output with `#[serde(skip_serializing_if = "Optional::is_empty")]`.
pub use optional_value as value; // value

pub use crate::value::{Nullable, Optional};

pub mod prelude {
    pub use crate::value::{Nullable, Optional};
}
