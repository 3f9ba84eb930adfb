//! Integration tests for the public collection operations
//!
//! Covers the documented behavior of every operation against both
//! sequences and mappings, through the crate's public API only.

mod common;

use anyhow::Result;
use collection_kit::{
    each, filter, find, first, first_n, fold, keys, last, last_n, map, reduce, size, try_each,
    try_map, values, Collection, Control, EmptyReducePolicy, ErrorCode, KitConfig, KitError,
    MappingPositionPolicy, Shape, Taken, Toolkit,
};
use common::{init_test_tracing, letters_json, letters_map, numbers};
use serde_json::{json, Value};
use std::io::Write;

#[test]
fn test_each_stops_exactly_at_stop_position() {
    let _guard = init_test_tracing();
    let items = numbers();

    for stop_at in 0..items.len() {
        let mut visited = Vec::new();
        each(&items, |_, index, _| {
            visited.push(index);
            if index == stop_at {
                Control::Stop
            } else {
                Control::Continue
            }
        });
        assert_eq!(visited, (0..=stop_at).collect::<Vec<_>>());
    }
}

#[test]
fn test_each_returns_original_for_chaining() {
    let items = numbers();
    let doubled = map(each(&items, |_, _, _| ()), |value, _, _| value * 2);
    assert_eq!(doubled, vec![2, 4, 6, 8, 10]);
}

#[test]
fn test_size_matches_map_length() {
    let items = numbers();
    assert_eq!(size(&items), map(&items, |v, _, _| v.to_string()).len());

    let object = letters_json();
    let mapping = object.as_object().unwrap();
    assert_eq!(size(mapping), map(mapping, |v, _, _| v.clone()).len());
}

#[test]
fn test_documented_examples() {
    let items = numbers();

    assert_eq!(map(&items, |value, _, _| value * 2), vec![2, 4, 6, 8, 10]);
    assert_eq!(filter(&items, |value, _, _| value % 2 == 0), vec![&2, &4]);
    assert_eq!(find(&items, |value, _, _| *value > 3), Some(&4));

    assert_eq!(reduce(&items, |acc, value| acc + value, Some(0)), Some(15));
    assert_eq!(reduce(&items, |acc, value| acc + value, None), Some(15));
    let empty: Vec<i64> = Vec::new();
    assert_eq!(reduce(&empty, |acc, value| acc + value, Some(0)), Some(0));
    assert_eq!(reduce(&empty, |acc, value| acc + value, None), None);

    assert_eq!(first(&items), Some(&1));
    assert_eq!(first_n(&items, 2), Some(Taken::Many(vec![&1, &2])));
    assert_eq!(last(&items), Some(&5));
    assert_eq!(last_n(&items, 2), Some(Taken::Many(vec![&4, &5])));

    assert_eq!(size(&items), 5);
    let object = letters_json();
    let mapping = object.as_object().unwrap();
    assert_eq!(size(mapping), 3);
    assert_eq!(keys(mapping), vec!["a", "b", "c"]);
    assert_eq!(values(mapping), vec![&json!(1), &json!(2), &json!(3)]);
}

#[test]
fn test_sorted_map_operations() {
    let map_input = letters_map();

    assert_eq!(keys(&map_input), vec!["a", "b", "c"]);
    assert_eq!(values(&map_input), vec![&1, &2, &3]);
    assert_eq!(map(&map_input, |value, index, _| value * 10 + index as i64), vec![10, 21, 32]);
    assert_eq!(find(&map_input, |value, _, _| *value >= 2), Some(&2));
    assert_eq!(fold(&map_input, 0i64, |acc, value| acc + value), 6);
}

#[test]
fn test_callback_sees_mapping_as_source() {
    let map_input = letters_map();
    each(&map_input, |_, _, source| {
        assert_eq!(source.shape(), Shape::Mapping);
        assert_eq!(source.len(), 3);
    });
}

#[test]
fn test_callback_errors_surface_unchanged() {
    #[derive(Debug, PartialEq)]
    struct Boom(usize);

    let items = numbers();
    let mut visited = 0;
    let result = try_each(&items, |_, index, _| {
        visited += 1;
        if index == 1 {
            Err(Boom(index))
        } else {
            Ok(Control::Continue)
        }
    });
    assert_eq!(result.unwrap_err(), Boom(1));
    assert_eq!(visited, 2);

    let mapped: Result<Vec<i64>, Boom> =
        try_map(&items, |value, index, _| if *value == 4 { Err(Boom(index)) } else { Ok(*value) });
    assert_eq!(mapped, Err(Boom(3)));
}

#[test]
fn test_json_boundary_rejects_scalars() {
    for value in [json!(null), json!(1.5), json!("abc"), json!(false)] {
        let err = Collection::<Value>::try_from(&value).unwrap_err();
        assert!(matches!(err, KitError::UnsupportedShape { .. }));
        assert_eq!(err.code(), ErrorCode::SHAPE_UNSUPPORTED);
    }
}

#[test]
fn test_json_boundary_feeds_every_operation() -> Result<()> {
    let array = json!([3, 1, 2]);
    let sequence = Collection::<Value>::try_from(&array)?;

    let total = fold(sequence, 0, |acc, value| acc + value.as_i64().unwrap_or(0));
    assert_eq!(total, 6);
    assert_eq!(find(sequence, |value, _, _| value == &json!(1)), Some(&json!(1)));
    assert_eq!(size(sequence), 3);
    Ok(())
}

#[test]
fn test_toolkit_loaded_from_file() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "empty_reduce = \"error\"")?;
    writeln!(file, "mapping_positions = \"values\"")?;

    let config = KitConfig::load(file.path())?;
    assert_eq!(config.empty_reduce, EmptyReducePolicy::Error);
    assert_eq!(config.mapping_positions, MappingPositionPolicy::Values);

    let toolkit = Toolkit::new(config);
    let object = letters_json();
    let mapping = Collection::<Value>::try_from(&object)?;

    assert_eq!(toolkit.first_n(mapping, 1)?, Some(Taken::One(&json!(1))));
    assert_eq!(toolkit.last_n(mapping, 5)?.map(Taken::into_vec).map(|v| v.len()), Some(3));

    let empty = json!([]);
    let err = toolkit
        .reduce(Collection::<Value>::try_from(&empty)?, |acc, _| acc, None)
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::REDUCE_EMPTY);
    Ok(())
}

#[test]
fn test_default_toolkit_rejects_positions_on_mapping() -> Result<()> {
    let object = letters_json();
    let mapping = Collection::<Value>::try_from(&object)?;
    let err = Toolkit::default().last_n(mapping, 2).unwrap_err();
    assert_eq!(err.to_string(), "[E1002] last_n requires a sequence, found a mapping");
    Ok(())
}

fn labelled<'a, V>(collection: impl Into<Collection<'a, V>>) -> Vec<String>
where
    V: std::fmt::Debug + 'a,
{
    map(collection, |value, index, _| format!("{index}:{value:?}"))
}

fn checked_lengths<'a, V: AsRef<str> + 'a>(
    collection: impl Into<Collection<'a, V>>,
) -> Result<Vec<usize>, KitError> {
    try_map(collection, |value, _, _| match value.as_ref().len() {
        0 => Err(KitError::unsupported_shape("string")),
        len => Ok(len),
    })
}

#[test]
fn test_generic_callers_forward_borrowed_collections() -> Result<()> {
    let _guard = init_test_tracing();

    assert_eq!(labelled(&numbers()[..2]), vec!["0:1", "1:2"]);
    assert_eq!(labelled(&letters_map()).len(), 3);
    assert_eq!(checked_lengths(&vec!["ab", "c"])?, vec![2, 1]);
    assert!(checked_lengths(&vec!["ab", ""]).is_err());

    let toolkit = Toolkit::default();
    let object = letters_json();
    let mapping = Collection::<Value>::try_from(&object)?;
    assert_eq!(toolkit.keys(mapping)?.len(), toolkit.values(mapping)?.len());
    assert_eq!(toolkit.first_n(&[4, 5, 6], 2)?, Some(Taken::Many(vec![&4, &5])));
    assert_eq!(toolkit.last_n(&[4, 5, 6], 0)?, Some(Taken::One(&6)));
    Ok(())
}

#[test]
fn test_boundary_inputs() -> Result<()> {
    let _guard = init_test_tracing();

    let empty: [i32; 0] = [];
    assert_eq!(first_n(&empty, 0), None);
    assert_eq!(last_n(&[9], 2), Some(Taken::Many(vec![&9])));

    let mut scores = std::collections::HashMap::new();
    scores.insert("ann".to_string(), 1);
    scores.insert("bob".to_string(), 2);
    scores.insert("cy".to_string(), 3);
    let paired: Vec<(&str, i32)> = keys(&scores)
        .into_iter()
        .zip(values(&scores))
        .map(|(key, value)| (key, *value))
        .collect();
    for (key, value) in paired {
        assert_eq!(scores[key], value);
    }

    let mut calls = 0;
    let returned = each(&scores, |_, _, _| {
        calls += 1;
        Control::Stop
    });
    assert_eq!(calls, 1);
    assert_eq!(returned.len(), 3);
    assert_eq!(returned.shape(), Shape::Mapping);

    let array = json!([]);
    let collection = Collection::<Value>::try_from(&array)?;
    assert_eq!(reduce(collection, |acc, _| acc, None), None);
    Ok(())
}
