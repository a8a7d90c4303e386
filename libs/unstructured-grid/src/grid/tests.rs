//! Tests for grid construction and validation.

use super::*;
use crate::attributes::AttributeData;
use config::constants::GHOST_LEVELS_ARRAY;

fn unit_tetra_builder() -> GridBuilder {
    let mut builder = GridBuilder::with_capacity(4, 1, 4);
    builder.add_point([0.0, 0.0, 0.0]);
    builder.add_point([1.0, 0.0, 0.0]);
    builder.add_point([0.0, 1.0, 0.0]);
    builder.add_point([0.0, 0.0, 1.0]);
    builder.add_cell(CellType::Tetra, &[0, 1, 2, 3]);
    builder
}

#[test]
fn builds_valid_tetra() {
    let grid = unit_tetra_builder().build().unwrap();
    assert_eq!(grid.num_points(), 4);
    assert_eq!(grid.num_cells(), 1);
    assert_eq!(grid.point(1), Vec3::new(1.0, 0.0, 0.0));
    let cells: Vec<_> = grid.iter_cells().collect();
    assert_eq!(cells, vec![(0, CellType::Tetra, &[0, 1, 2, 3][..])]);
}

#[test]
fn rejects_dangling_point() {
    let mut builder = unit_tetra_builder();
    builder.add_cell(CellType::Triangle, &[0, 1, 4]);
    assert_eq!(
        builder.build().unwrap_err(),
        GridError::DanglingPoint {
            cell: 1,
            point: 4,
            num_points: 4
        }
    );
}

#[test]
fn rejects_wrong_fixed_point_count() {
    let mut builder = unit_tetra_builder();
    builder.add_cell(CellType::Hexahedron, &[0, 1, 2, 3]);
    assert!(matches!(
        builder.build(),
        Err(GridError::PointCountMismatch { cell: 1, expected: 8, actual: 4, .. })
    ));
}

#[test]
fn rejects_short_polygon() {
    let mut builder = unit_tetra_builder();
    builder.add_cell(CellType::Polygon, &[0, 1]);
    assert!(matches!(builder.build(), Err(GridError::TooFewPoints { minimum: 3, .. })));
}

#[test]
fn unknown_types_accept_any_connectivity() {
    let mut builder = unit_tetra_builder();
    builder.add_cell(CellType::Unknown(42), &[3, 2, 1, 0, 1]);
    builder.add_cell(CellType::Unknown(43), &[]);
    let grid = builder.build().unwrap();
    assert_eq!(grid.cell_type(1), CellType::Unknown(42));
}

#[test]
fn rejects_non_finite_coordinates() {
    let mut builder = unit_tetra_builder();
    builder.add_point([f64::NAN, 0.0, 0.0]);
    assert_eq!(
        builder.build().unwrap_err(),
        GridError::NonFiniteCoordinate { point: 4 }
    );
}

#[test]
fn rejects_attribute_length_mismatch() {
    let mut builder = unit_tetra_builder();
    builder.add_cell_array(
        AttributeArray::new("material", 1, AttributeData::Int64(vec![1, 2])).unwrap(),
    );
    assert!(matches!(
        builder.build(),
        Err(GridError::AttributeLength { expected: 1, actual: 2, .. })
    ));
}

#[test]
fn reports_first_builder_error() {
    let mut builder = unit_tetra_builder();
    let array = AttributeArray::new("t", 1, AttributeData::Float64(vec![0.0; 4])).unwrap();
    builder.add_point_array(array.clone()).add_point_array(array);
    assert_eq!(
        builder.build().unwrap_err(),
        GridError::DuplicateAttribute("t".into())
    );
}

#[test]
fn from_parts_checks_type_count() {
    let mut cells = CellArray::new();
    cells.push(&[0]);
    let err = UnstructuredGrid::from_parts(
        vec![Vec3::ZERO],
        vec![],
        cells,
        AttributeTable::new(),
        AttributeTable::new(),
    )
    .unwrap_err();
    assert_eq!(err, GridError::CellCountMismatch { types: 0, cells: 1 });
}

#[test]
fn exposes_ghost_levels() {
    let mut builder = unit_tetra_builder();
    builder.add_cell_array(
        AttributeArray::new(GHOST_LEVELS_ARRAY, 1, AttributeData::UInt8(vec![2])).unwrap(),
    );
    let grid = builder.build().unwrap();
    assert_eq!(grid.ghost_levels(), Some(&[2u8][..]));
}

#[test]
fn deserialization_revalidates() {
    let json = r#"{
        "points": [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]],
        "types": ["Line"],
        "cells": { "offsets": [0, 2], "connectivity": [0, 5] },
        "point_data": { "arrays": [] },
        "cell_data": { "arrays": [] }
    }"#;
    let err = serde_json::from_str::<UnstructuredGrid>(json).unwrap_err();
    assert!(err.to_string().contains("point 5"));
}
