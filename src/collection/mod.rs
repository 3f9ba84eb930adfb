//! The two collection shapes every operation accepts.
//!
//! A [`Collection`] is a borrowed view over either an ordered sequence
//! (`&[V]`) or a string-keyed mapping (anything implementing
//! [`MappingView`]). Operations never depend on the concrete shape: they ask
//! for the normalized value order through [`Collection::ordered_values`] and
//! the element count through [`Collection::len`].
//!
//! ```
//! use collection_kit::{Collection, Shape};
//! use std::collections::BTreeMap;
//!
//! let numbers = vec![1, 2, 3];
//! let sequence = Collection::from(&numbers);
//! assert_eq!(sequence.shape(), Shape::Sequence);
//! assert_eq!(sequence.ordered_values().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//!
//! let scores: BTreeMap<String, i32> = [("b".to_string(), 2), ("a".to_string(), 1)].into();
//! let mapping = Collection::from(&scores);
//! assert_eq!(mapping.len(), 2);
//! assert_eq!(mapping.ordered_values().copied().collect::<Vec<_>>(), vec![1, 2]);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;
use std::iter::FusedIterator;

mod json;
pub mod mapping;

pub use mapping::MappingView;

/// Which of the two supported shapes a collection has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Sequence,
    Mapping,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Sequence => f.write_str("sequence"),
            Shape::Mapping => f.write_str("mapping"),
        }
    }
}

/// A borrowed sequence or mapping.
///
/// `Collection` is `Copy`: it is only ever a reference to caller-owned data
/// and is handed back to callbacks as the "original collection" argument.
pub enum Collection<'a, V> {
    Sequence(&'a [V]),
    Mapping(&'a dyn MappingView<V>),
}

impl<V> Clone for Collection<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Collection<'_, V> {}

impl<'a, V> Collection<'a, V> {
    pub fn shape(&self) -> Shape {
        match self {
            Collection::Sequence(_) => Shape::Sequence,
            Collection::Mapping(_) => Shape::Mapping,
        }
    }

    /// Element count: slice length, or number of keys for a mapping.
    pub fn len(&self) -> usize {
        match self {
            Collection::Sequence(items) => items.len(),
            Collection::Mapping(mapping) => mapping.entry_count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The normalized iteration order.
    ///
    /// Sequences yield their elements in index order. Mappings yield their
    /// values in enumeration order; keys are not visible.
    pub fn ordered_values(&self) -> OrderedValues<'a, V> {
        match *self {
            Collection::Sequence(items) => OrderedValues {
                inner: ValuesInner::Sequence(items.iter()),
            },
            Collection::Mapping(mapping) => OrderedValues {
                inner: ValuesInner::Mapping(mapping.value_list().into_iter()),
            },
        }
    }

    pub fn as_sequence(&self) -> Option<&'a [V]> {
        match *self {
            Collection::Sequence(items) => Some(items),
            Collection::Mapping(_) => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&'a dyn MappingView<V>> {
        match *self {
            Collection::Sequence(_) => None,
            Collection::Mapping(mapping) => Some(mapping),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Collection<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
            Collection::Mapping(mapping) => {
                let entries: Vec<(&str, &V)> = mapping
                    .key_list()
                    .into_iter()
                    .zip(mapping.value_list())
                    .collect();
                f.debug_tuple("Mapping").field(&entries).finish()
            }
        }
    }
}

impl<'a, V> From<&'a [V]> for Collection<'a, V> {
    fn from(items: &'a [V]) -> Self {
        Collection::Sequence(items)
    }
}

impl<'a, V, const N: usize> From<&'a [V; N]> for Collection<'a, V> {
    fn from(items: &'a [V; N]) -> Self {
        Collection::Sequence(items)
    }
}

impl<'a, V> From<&'a Vec<V>> for Collection<'a, V> {
    fn from(items: &'a Vec<V>) -> Self {
        Collection::Sequence(items)
    }
}

impl<'a, V> From<&'a BTreeMap<String, V>> for Collection<'a, V> {
    fn from(mapping: &'a BTreeMap<String, V>) -> Self {
        Collection::Mapping(mapping)
    }
}

impl<'a, V, S: BuildHasher> From<&'a HashMap<String, V, S>> for Collection<'a, V> {
    fn from(mapping: &'a HashMap<String, V, S>) -> Self {
        Collection::Mapping(mapping)
    }
}

impl<'a> From<&'a Map<String, Value>> for Collection<'a, Value> {
    fn from(mapping: &'a Map<String, Value>) -> Self {
        Collection::Mapping(mapping)
    }
}

/// Iterator over a collection's values in normalized order.
pub struct OrderedValues<'a, V> {
    inner: ValuesInner<'a, V>,
}

enum ValuesInner<'a, V> {
    Sequence(std::slice::Iter<'a, V>),
    Mapping(std::vec::IntoIter<&'a V>),
}

impl<'a, V> Iterator for OrderedValues<'a, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            ValuesInner::Sequence(iter) => iter.next(),
            ValuesInner::Mapping(iter) => iter.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<V> DoubleEndedIterator for OrderedValues<'_, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            ValuesInner::Sequence(iter) => iter.next_back(),
            ValuesInner::Mapping(iter) => iter.next_back(),
        }
    }
}

impl<V> ExactSizeIterator for OrderedValues<'_, V> {
    #[inline]
    fn len(&self) -> usize {
        match &self.inner {
            ValuesInner::Sequence(iter) => iter.len(),
            ValuesInner::Mapping(iter) => iter.len(),
        }
    }
}

impl<V> FusedIterator for OrderedValues<'_, V> {}
