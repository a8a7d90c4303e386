//! Tests for attribute arrays and tables.

use super::*;
use approx::assert_relative_eq;

fn scalars(name: &str, values: Vec<f64>) -> AttributeArray {
    AttributeArray::new(name, 1, AttributeData::Float64(values)).unwrap()
}

#[test]
fn new_rejects_partial_tuples() {
    let err = AttributeArray::new("v", 3, AttributeData::Float64(vec![1.0, 2.0])).unwrap_err();
    assert!(matches!(err, GridError::AttributeShape { components: 3, values: 2, .. }));
    assert!(AttributeArray::new("v", 0, AttributeData::UInt8(vec![])).is_err());
}

#[test]
fn add_rejects_duplicate_names() {
    let mut table = AttributeTable::new();
    table.add(scalars("p", vec![1.0])).unwrap();
    assert_eq!(
        table.add(scalars("p", vec![2.0])).unwrap_err(),
        GridError::DuplicateAttribute("p".into())
    );
    assert_eq!(table.len(), 1);
}

#[test]
fn gather_repeats_rows_in_order() {
    let vectors = AttributeArray::new(
        "vec",
        2,
        AttributeData::Int64(vec![10, 11, 20, 21, 30, 31]),
    )
    .unwrap();
    let gathered = vectors.gather(&[2, 0, 2]);
    assert_eq!(gathered.num_tuples(), 3);
    assert_eq!(gathered.data(), &AttributeData::Int64(vec![30, 31, 10, 11, 30, 31]));
    assert_eq!(gathered.name(), "vec");
}

#[test]
fn extended_with_interpolates_floats() {
    let table_array = scalars("t", vec![0.0, 4.0, 8.0]);
    let stencil = vec![(0, 0.25), (1, 0.25), (2, 0.5)];
    let extended = table_array.extended_with(&[stencil]);
    assert_eq!(extended.num_tuples(), 4);
    assert_relative_eq!(extended.tuple_f64(3)[0], 5.0);
}

#[test]
fn extended_with_rounds_and_clamps_bytes() {
    let flags = AttributeArray::new("f", 1, AttributeData::UInt8(vec![200, 255])).unwrap();
    let negative_corner = vec![(0, -0.25), (1, 1.5)];
    let extended = flags.extended_with(&[negative_corner]);
    assert_eq!(extended.data(), &AttributeData::UInt8(vec![200, 255, 255]));
}

#[test]
fn ghost_levels_require_single_byte_component() {
    let mut table = AttributeTable::new();
    table
        .add(AttributeArray::new(GHOST_LEVELS_ARRAY, 1, AttributeData::UInt8(vec![0, 1, 2])).unwrap())
        .unwrap();
    assert_eq!(table.ghost_levels(), Some(&[0u8, 1, 2][..]));

    let mut wrong_type = AttributeTable::new();
    wrong_type.add(scalars(GHOST_LEVELS_ARRAY, vec![0.0, 1.0])).unwrap();
    assert_eq!(wrong_type.ghost_levels(), None);

    let mut wrong_shape = AttributeTable::new();
    wrong_shape
        .add(AttributeArray::new(GHOST_LEVELS_ARRAY, 2, AttributeData::UInt8(vec![0, 1])).unwrap())
        .unwrap();
    assert_eq!(wrong_shape.ghost_levels(), None);
}

#[test]
fn validate_tuples_reports_first_mismatch() {
    let mut table = AttributeTable::new();
    table.add(scalars("a", vec![1.0, 2.0])).unwrap();
    assert!(table.validate_tuples(2).is_ok());
    assert_eq!(
        table.validate_tuples(3).unwrap_err(),
        GridError::AttributeLength {
            name: "a".into(),
            expected: 3,
            actual: 2
        }
    );
}
