pub use crate::optional::{Nullable, Optional};

mod optional;
#[cfg(feature = "serde")]
mod serialize;
mod text;
