//! Collection operations.
//!
//! - `derived` - map, filter, reduce, fold and find, all driven by the kernel
//! - `helpers` - size, first/last and keys/values, read straight from the shape

pub mod derived;
pub mod helpers;
