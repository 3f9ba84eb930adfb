//! The iteration kernel.
//!
//! [`try_each`] is the single loop every derived operation runs through. It
//! normalizes the collection, walks positions `0..len` in increasing order
//! and hands each callback the value, its position and the original
//! collection. A callback ends the walk early by answering
//! [`Control::Stop`]; an `Err` from the callback ends it as well and is
//! returned to the caller untouched.

use crate::collection::Collection;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use tracing::trace;

/// What the kernel should do after a callback returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    #[default]
    Continue,
    Stop,
}

/// Callbacks that return nothing never stop iteration.
impl From<()> for Control {
    fn from(_: ()) -> Self {
        Control::Continue
    }
}

/// Visit every element until the callback answers [`Control::Stop`].
///
/// Returns the collection that was passed in so calls can be chained.
///
/// ```
/// use collection_kit::{each, Control};
///
/// let mut seen = Vec::new();
/// each(&vec![1, 2, 3, 4], |value, index, _| {
///     seen.push(*value);
///     if index == 1 { Control::Stop } else { Control::Continue }
/// });
/// assert_eq!(seen, vec![1, 2]);
/// ```
pub fn each<'a, V, C, F, R>(collection: C, mut callback: F) -> Collection<'a, V>
where
    V: 'a,
    C: Into<Collection<'a, V>>,
    F: FnMut(&'a V, usize, Collection<'a, V>) -> R,
    R: Into<Control>,
{
    let outcome = try_each(collection, |value, index, source| {
        Ok::<R, Infallible>(callback(value, index, source))
    });
    match outcome {
        Ok(collection) => collection,
        Err(never) => match never {},
    }
}

/// Fallible form of [`each`].
///
/// The first `Err` returned by the callback aborts iteration; no further
/// elements are visited and the error is returned as-is.
pub fn try_each<'a, V, C, F, R, E>(collection: C, mut callback: F) -> Result<Collection<'a, V>, E>
where
    V: 'a,
    C: Into<Collection<'a, V>>,
    F: FnMut(&'a V, usize, Collection<'a, V>) -> Result<R, E>,
    R: Into<Control>,
{
    let collection = collection.into();
    let len = collection.len();

    for (index, value) in collection.ordered_values().enumerate() {
        let signal: Control = callback(value, index, collection)?.into();
        if signal == Control::Stop {
            trace!(index, len, "iteration stopped by callback");
            break;
        }
    }

    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_each_visits_in_order_with_positions() {
        let items = vec!["a", "b", "c"];
        let mut visited = Vec::new();

        each(&items, |value, index, _| visited.push((index, *value)));

        assert_eq!(visited, vec![(0, "a"), (1, "b"), (2, "c")]);
    }

    #[test]
    fn test_each_stops_after_stop_signal() {
        let items: Vec<i32> = (0..10).collect();
        let mut visited = Vec::new();

        each(&items, |value, index, _| {
            visited.push(*value);
            if index == 3 {
                Control::Stop
            } else {
                Control::Continue
            }
        });

        assert_eq!(visited, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_each_returns_input_collection() {
        let items = vec![1, 2, 3];
        let returned = each(&items, |_, _, _| Control::Continue);

        assert!(std::ptr::eq(returned.as_sequence().unwrap(), items.as_slice()));
    }

    #[test]
    fn test_each_on_empty_collection_never_calls_back() {
        let items: Vec<i32> = Vec::new();
        let mut calls = 0;

        let returned = each(&items, |_, _, _| calls += 1);

        assert_eq!(calls, 0);
        assert!(returned.is_empty());
    }

    #[test]
    fn test_each_passes_original_collection() {
        let items = vec![10, 20];
        each(&items, |_, _, source| {
            assert!(std::ptr::eq(source.as_sequence().unwrap(), items.as_slice()));
        });
    }

    #[test]
    fn test_each_on_mapping_sees_values_only() {
        let mut map = BTreeMap::new();
        map.insert("x".to_string(), 1);
        map.insert("y".to_string(), 2);
        let mut visited = Vec::new();

        each(&map, |value, index, source| {
            assert_eq!(source.len(), 2);
            visited.push((index, *value));
        });

        assert_eq!(visited, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_try_each_aborts_on_first_error() {
        let items = vec![1, 2, 3, 4];
        let mut visited = Vec::new();

        let result = try_each(&items, |value, _, _| {
            visited.push(*value);
            if *value == 2 {
                Err(format!("bad value {value}"))
            } else {
                Ok(Control::Continue)
            }
        });

        assert_eq!(result.unwrap_err(), "bad value 2");
        assert_eq!(visited, vec![1, 2]);
    }

    #[test]
    fn test_try_each_ok_returns_collection() {
        let items = vec![1, 2, 3];
        let result: Result<_, String> = try_each(&items, |_, _, _| Ok(()));
        assert_eq!(result.unwrap().len(), 3);
    }

    #[test]
    fn test_unit_converts_to_continue() {
        assert_eq!(Control::from(()), Control::Continue);
        assert_eq!(Control::default(), Control::Continue);
    }
}
