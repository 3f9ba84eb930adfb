//! Read-only views over string-keyed mappings.
//!
//! A [`MappingView`] exposes a mapping's keys and values in the mapping's
//! own enumeration order. Nothing is cached: every call walks the
//! underlying structure again, so the key structure is never copied or
//! aliased between calls.

use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A string-keyed mapping that can be enumerated in a stable order.
///
/// `key_list` and `value_list` must enumerate entries in the same order, so
/// that position `i` of one corresponds to position `i` of the other.
pub trait MappingView<V> {
    /// Keys in enumeration order
    fn key_list(&self) -> Vec<&str>;

    /// Values in enumeration order
    fn value_list(&self) -> Vec<&V>;

    /// Number of entries
    fn entry_count(&self) -> usize;
}

/// Sorted key order.
impl<V> MappingView<V> for BTreeMap<String, V> {
    fn key_list(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }

    fn value_list(&self) -> Vec<&V> {
        self.values().collect()
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

/// Hash order; stable for an unmodified map but otherwise unspecified.
impl<V, S: BuildHasher> MappingView<V> for HashMap<String, V, S> {
    fn key_list(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }

    fn value_list(&self) -> Vec<&V> {
        self.values().collect()
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

/// Insertion order (serde_json is built with `preserve_order`).
impl MappingView<Value> for Map<String, Value> {
    fn key_list(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }

    fn value_list(&self) -> Vec<&Value> {
        self.values().collect()
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}
