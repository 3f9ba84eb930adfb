//! # collection-kit
//!
//! Functional-style iteration helpers over two collection shapes: ordered
//! sequences and string-keyed mappings.
//!
//! ## Usage
//!
//! ```
//! use collection_kit::{each, filter, find, map, reduce, size, Control};
//! use serde_json::json;
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//! assert_eq!(map(&numbers, |value, _, _| value * 2), vec![2, 4, 6, 8, 10]);
//! assert_eq!(filter(&numbers, |value, _, _| value % 2 == 0), vec![&2, &4]);
//! assert_eq!(find(&numbers, |value, _, _| *value > 3), Some(&4));
//! assert_eq!(reduce(&numbers, |acc, value| acc + value, Some(0)), Some(15));
//!
//! let object = json!({"a": 1, "b": 2, "c": 3});
//! let mapping = object.as_object().unwrap();
//! assert_eq!(size(mapping), 3);
//!
//! let mut visited = 0;
//! each(&numbers, |_, index, _| {
//!     visited += 1;
//!     if index == 2 { Control::Stop } else { Control::Continue }
//! });
//! assert_eq!(visited, 3);
//! ```
//!
//! ## Modules
//!
//! - `collection` - the `Collection` sequence/mapping abstraction and JSON boundary
//! - `kernel` - the shared `each` / `try_each` iteration primitive
//! - `ops` - derived operations and shape helpers
//! - `config` - TOML-loaded policies for the degenerate cases
//! - `toolkit` - facade applying those policies to runtime-shaped input
//! - `error` - error type and code registry
pub mod collection;
pub mod config;
pub mod error;
pub mod kernel;
pub mod ops;
pub mod toolkit;

pub use collection::{Collection, MappingView, OrderedValues, Shape};
pub use config::{EmptyReducePolicy, KitConfig, MappingPositionPolicy};
pub use error::{describe_error_code, ErrorCode, KitError};
pub use kernel::{each, try_each, Control};
pub use ops::derived::{
    filter, find, fold, map, reduce, try_filter, try_find, try_fold, try_map,
};
pub use ops::helpers::{first, first_n, keys, last, last_n, size, values, Taken};
pub use toolkit::Toolkit;
