//! Hash table with separate chaining and load-factor-triggered in-place growth.
mod core;
pub use self::core::*;
mod dict;
