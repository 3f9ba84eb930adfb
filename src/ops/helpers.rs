//! Helpers that read a collection's shape directly instead of iterating it.

use crate::collection::{Collection, MappingView, OrderedValues};

/// Result of [`first_n`] / [`last_n`].
///
/// A count of one or less yields the boundary element itself; a larger
/// count yields a sequence, even if it ends up holding a single element.
#[derive(Debug, PartialEq, Eq)]
pub enum Taken<'a, V> {
    One(&'a V),
    Many(Vec<&'a V>),
}

impl<'a, V> Taken<'a, V> {
    pub fn into_vec(self) -> Vec<&'a V> {
        match self {
            Taken::One(value) => vec![value],
            Taken::Many(values) => values,
        }
    }

    pub fn as_one(&self) -> Option<&'a V> {
        match self {
            Taken::One(value) => Some(*value),
            Taken::Many(_) => None,
        }
    }
}

impl<V> Clone for Taken<'_, V> {
    fn clone(&self) -> Self {
        match self {
            Taken::One(value) => Taken::One(*value),
            Taken::Many(values) => Taken::Many(values.clone()),
        }
    }
}

/// Number of elements in a sequence, or number of keys in a mapping.
pub fn size<'a, V: 'a>(collection: impl Into<Collection<'a, V>>) -> usize {
    collection.into().len()
}

/// First element of a sequence, or `None` when it is empty.
pub fn first<V>(sequence: &[V]) -> Option<&V> {
    sequence.first()
}

/// Last element of a sequence, or `None` when it is empty.
pub fn last<V>(sequence: &[V]) -> Option<&V> {
    sequence.last()
}

/// Leading elements of a sequence.
///
/// `n <= 1` (zero included) returns the first element alone; `n > 1`
/// returns up to `n` leading elements.
///
/// ```
/// use collection_kit::{first_n, Taken};
///
/// let numbers = [1, 2, 3, 4, 5];
/// assert_eq!(first_n(&numbers, 1), Some(Taken::One(&1)));
/// assert_eq!(first_n(&numbers, 2), Some(Taken::Many(vec![&1, &2])));
/// ```
pub fn first_n<V>(sequence: &[V], n: usize) -> Option<Taken<'_, V>> {
    leading(Collection::Sequence(sequence).ordered_values(), n)
}

/// Trailing elements of a sequence, with the same threshold as [`first_n`].
pub fn last_n<V>(sequence: &[V], n: usize) -> Option<Taken<'_, V>> {
    trailing(Collection::Sequence(sequence).ordered_values(), n)
}

/// Keys of a mapping in its enumeration order.
pub fn keys<'a, V, M>(mapping: &'a M) -> Vec<&'a str>
where
    M: MappingView<V> + ?Sized,
{
    mapping.key_list()
}

/// Values of a mapping in its enumeration order.
pub fn values<'a, V, M>(mapping: &'a M) -> Vec<&'a V>
where
    M: MappingView<V> + ?Sized,
{
    mapping.value_list()
}

pub(crate) fn leading<V>(mut values: OrderedValues<'_, V>, n: usize) -> Option<Taken<'_, V>> {
    if n > 1 {
        Some(Taken::Many(values.take(n).collect()))
    } else {
        values.next().map(Taken::One)
    }
}

pub(crate) fn trailing<V>(mut values: OrderedValues<'_, V>, n: usize) -> Option<Taken<'_, V>> {
    if n > 1 {
        let skip = values.len().saturating_sub(n);
        Some(Taken::Many(values.skip(skip).collect()))
    } else {
        values.next_back().map(Taken::One)
    }
}
