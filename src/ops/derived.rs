//! Operations layered on the iteration kernel.
//!
//! Each function here drives [`try_each`](crate::kernel::try_each) (or its
//! infallible form) with an internal callback. Only [`find`] and
//! [`try_find`] ever answer [`Control::Stop`]; every other wrapper keeps
//! the walk going to the end.

use crate::collection::Collection;
use crate::kernel::{each, try_each, Control};

/// Transform every element, preserving order and length.
///
/// ```
/// use collection_kit::map;
///
/// let doubled = map(&vec![1, 2, 3], |value, _, _| value * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn map<'a, V, R, C, F>(collection: C, mut callback: F) -> Vec<R>
where
    V: 'a,
    C: Into<Collection<'a, V>>,
    F: FnMut(&'a V, usize, Collection<'a, V>) -> R,
{
    let collection = collection.into();
    let mut mapped = Vec::with_capacity(collection.len());
    each(collection, |value, index, source| {
        mapped.push(callback(value, index, source));
        Control::Continue
    });
    mapped
}

/// Fallible form of [`map`]; the first callback error is returned.
pub fn try_map<'a, V, R, E, C, F>(collection: C, mut callback: F) -> Result<Vec<R>, E>
where
    V: 'a,
    C: Into<Collection<'a, V>>,
    F: FnMut(&'a V, usize, Collection<'a, V>) -> Result<R, E>,
{
    let collection = collection.into();
    let mut mapped = Vec::with_capacity(collection.len());
    try_each(collection, |value, index, source| {
        mapped.push(callback(value, index, source)?);
        Ok::<_, E>(Control::Continue)
    })?;
    Ok(mapped)
}

/// Keep the elements the predicate accepts, in their original order.
///
/// ```
/// use collection_kit::filter;
///
/// let numbers = vec![1, 2, 3, 4, 5];
/// let evens = filter(&numbers, |value, _, _| value % 2 == 0);
/// assert_eq!(evens, vec![&2, &4]);
/// ```
pub fn filter<'a, V, C, F>(collection: C, mut predicate: F) -> Vec<&'a V>
where
    V: 'a,
    C: Into<Collection<'a, V>>,
    F: FnMut(&'a V, usize, Collection<'a, V>) -> bool,
{
    let mut kept = Vec::new();
    each(collection, |value, index, source| {
        if predicate(value, index, source) {
            kept.push(value);
        }
        Control::Continue
    });
    kept
}

/// Fallible form of [`filter`]; the first predicate error is returned.
pub fn try_filter<'a, V, E, C, F>(collection: C, mut predicate: F) -> Result<Vec<&'a V>, E>
where
    V: 'a,
    C: Into<Collection<'a, V>>,
    F: FnMut(&'a V, usize, Collection<'a, V>) -> Result<bool, E>,
{
    let mut kept = Vec::new();
    try_each(collection, |value, index, source| {
        if predicate(value, index, source)? {
            kept.push(value);
        }
        Ok::<_, E>(Control::Continue)
    })?;
    Ok(kept)
}

/// Left-to-right reduction.
///
/// With `Some(initial)` the callback runs once per element starting from
/// the first. With `None` the first element seeds the accumulator and the
/// callback starts from the second. An empty collection with no initial
/// value yields `None`.
///
/// ```
/// use collection_kit::reduce;
///
/// let numbers = vec![1, 2, 3, 4, 5];
/// assert_eq!(reduce(&numbers, |acc, value| acc + value, Some(0)), Some(15));
/// assert_eq!(reduce(&numbers, |acc, value| acc + value, None), Some(15));
/// assert_eq!(reduce(&Vec::<i32>::new(), |acc, value| acc + value, None), None);
/// ```
pub fn reduce<'a, V, C, F>(collection: C, mut callback: F, initial: Option<V>) -> Option<V>
where
    V: Clone + 'a,
    C: Into<Collection<'a, V>>,
    F: FnMut(V, &'a V) -> V,
{
    let mut accumulator = initial;
    each(collection, |value, _, _| {
        accumulator = Some(match accumulator.take() {
            Some(acc) => callback(acc, value),
            None => value.clone(),
        });
        Control::Continue
    });
    accumulator
}

/// Reduction into an accumulator of any type, always seeded.
///
/// Walks the normalized value order directly; there is no early exit to
/// signal, so the kernel's control protocol is not involved.
pub fn fold<'a, V, A, C, F>(collection: C, initial: A, callback: F) -> A
where
    V: 'a,
    C: Into<Collection<'a, V>>,
    F: FnMut(A, &'a V) -> A,
{
    collection.into().ordered_values().fold(initial, callback)
}

/// Fallible form of [`fold`]; the first callback error is returned.
pub fn try_fold<'a, V, A, E, C, F>(collection: C, initial: A, callback: F) -> Result<A, E>
where
    V: 'a,
    C: Into<Collection<'a, V>>,
    F: FnMut(A, &'a V) -> Result<A, E>,
{
    collection.into().ordered_values().try_fold(initial, callback)
}

/// First element the predicate accepts.
///
/// Elements after the match are never visited.
///
/// ```
/// use collection_kit::find;
///
/// assert_eq!(find(&vec![1, 2, 3, 4, 5], |value, _, _| *value > 3), Some(&4));
/// assert_eq!(find(&vec![1, 2, 3], |value, _, _| *value > 3), None);
/// ```
pub fn find<'a, V, C, F>(collection: C, mut predicate: F) -> Option<&'a V>
where
    V: 'a,
    C: Into<Collection<'a, V>>,
    F: FnMut(&'a V, usize, Collection<'a, V>) -> bool,
{
    let mut found = None;
    each(collection, |value, index, source| {
        if predicate(value, index, source) {
            found = Some(value);
            Control::Stop
        } else {
            Control::Continue
        }
    });
    found
}

/// Fallible form of [`find`]; a predicate error ends the search and is returned.
pub fn try_find<'a, V, E, C, F>(collection: C, mut predicate: F) -> Result<Option<&'a V>, E>
where
    V: 'a,
    C: Into<Collection<'a, V>>,
    F: FnMut(&'a V, usize, Collection<'a, V>) -> Result<bool, E>,
{
    let mut found = None;
    try_each(collection, |value, index, source| {
        if predicate(value, index, source)? {
            found = Some(value);
            Ok::<_, E>(Control::Stop)
        } else {
            Ok(Control::Continue)
        }
    })?;
    Ok(found)
}
