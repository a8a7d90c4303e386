//! Tests for the point → cell index and face adjacency.

use super::*;
use unstructured_grid::{CellType, GridBuilder};

/// Two unit hexahedra along x sharing the face at x = 1 (points 4..8).
fn two_hexes() -> UnstructuredGrid {
    let mut builder = GridBuilder::new();
    for x in 0..3 {
        for (y, z) in [(0, 0), (1, 0), (1, 1), (0, 1)] {
            builder.add_point([x as f64, y as f64, z as f64]);
        }
    }
    // x = 0 ring: 0..4, x = 1 ring: 4..8, x = 2 ring: 8..12
    builder.add_cell(CellType::Hexahedron, &[0, 4, 5, 1, 3, 7, 6, 2]);
    builder.add_cell(CellType::Hexahedron, &[4, 8, 9, 5, 7, 11, 10, 6]);
    builder.build().unwrap()
}

#[test]
fn index_lists_incident_cells_in_order() {
    let grid = two_hexes();
    let index = PointCellIndex::build(&grid);
    assert_eq!(index.num_points(), 12);
    assert_eq!(index.cells_of(0), &[0]);
    assert_eq!(index.cells_of(4), &[0, 1]);
    assert_eq!(index.cells_of(11), &[1]);
}

#[test]
fn index_deduplicates_repeated_points() {
    let mut builder = GridBuilder::new();
    for p in [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]] {
        builder.add_point(p);
    }
    builder.add_cell(CellType::Polygon, &[0, 1, 2, 0]);
    builder.add_cell(CellType::Triangle, &[0, 1, 2]);
    let grid = builder.build().unwrap();

    let index = PointCellIndex::build(&grid);
    assert_eq!(index.cells_of(0), &[0, 1]);
}

#[test]
fn unused_points_have_no_cells() {
    let mut builder = GridBuilder::new();
    builder.add_point([0.0, 0.0, 0.0]);
    builder.add_point([1.0, 0.0, 0.0]);
    builder.add_cell(CellType::Vertex, &[1]);
    let grid = builder.build().unwrap();

    let index = PointCellIndex::build(&grid);
    assert!(index.cells_of(0).is_empty());
    assert_eq!(index.cells_of(1), &[0]);
}

#[test]
fn shared_face_finds_other_cell() {
    let grid = two_hexes();
    let index = PointCellIndex::build(&grid);
    let mut query = NeighborQuery::new(&index);
    assert_eq!(query.neighbors(0, &[4, 5, 6, 7]), &[1]);
    assert_eq!(query.neighbors(1, &[4, 5, 6, 7]), &[0]);
}

#[test]
fn boundary_face_has_no_neighbors() {
    let grid = two_hexes();
    let index = PointCellIndex::build(&grid);
    let mut query = NeighborQuery::new(&index);
    assert!(query.neighbors(0, &[0, 1, 2, 3]).is_empty());
    // Shares an edge with cell 1 but not the whole face.
    assert!(query.neighbors(0, &[0, 4, 5, 1]).is_empty());
}

#[test]
fn empty_face_has_no_neighbors() {
    let grid = two_hexes();
    let index = PointCellIndex::build(&grid);
    let mut query = NeighborQuery::new(&index);
    assert!(query.neighbors(0, &[]).is_empty());
}

#[test]
fn classifier_honours_visibility() {
    let grid = two_hexes();
    let index = PointCellIndex::build(&grid);
    let shared = [4, 5, 6, 7];

    let all = Visibility::All;
    let mut classifier = FaceClassifier::new(&index, &all, false);
    assert!(!classifier.is_boundary_face(0, &shared));
    assert!(classifier.is_boundary_face(0, &[0, 1, 2, 3]));

    let only_first = Visibility::Tagged(vec![true, false]);
    let mut classifier = FaceClassifier::new(&index, &only_first, false);
    assert!(classifier.is_boundary_face(0, &shared));
}

#[test]
fn classifier_show_interior_keeps_everything() {
    let grid = two_hexes();
    let index = PointCellIndex::build(&grid);
    let all = Visibility::All;
    let mut classifier = FaceClassifier::new(&index, &all, true);
    assert!(classifier.is_boundary_face(0, &[4, 5, 6, 7]));
}

#[test]
fn one_visible_sharer_suppresses_non_manifold_face() {
    // Three tetras fanned around the face {0, 1, 2}.
    let mut builder = GridBuilder::new();
    for p in [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
        [0.3, 0.3, 1.0],
    ] {
        builder.add_point(p);
    }
    builder.add_cell(CellType::Tetra, &[0, 1, 2, 3]);
    builder.add_cell(CellType::Tetra, &[0, 2, 1, 4]);
    builder.add_cell(CellType::Tetra, &[0, 1, 2, 5]);
    let grid = builder.build().unwrap();
    let index = PointCellIndex::build(&grid);

    let mut query = NeighborQuery::new(&index);
    assert_eq!(query.neighbors(0, &[0, 2, 1]), &[1, 2]);

    let visibility = Visibility::Tagged(vec![true, false, true]);
    let mut classifier = FaceClassifier::new(&index, &visibility, false);
    assert!(!classifier.is_boundary_face(0, &[0, 2, 1]));

    let visibility = Visibility::Tagged(vec![true, false, false]);
    let mut classifier = FaceClassifier::new(&index, &visibility, false);
    assert!(classifier.is_boundary_face(0, &[0, 2, 1]));
}
