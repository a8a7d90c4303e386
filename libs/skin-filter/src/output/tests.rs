//! Tests for output assembly and attribute propagation.

use super::*;
use unstructured_grid::{AttributeArray, AttributeData, CellType, GridBuilder};

/// Three points and three cells carrying a per-cell material and a
/// per-point temperature.
fn tagged_grid() -> UnstructuredGrid {
    let mut builder = GridBuilder::new();
    builder.add_point([0.0, 0.0, 0.0]);
    builder.add_point([1.0, 0.0, 0.0]);
    builder.add_point([0.0, 1.0, 0.0]);
    builder.add_cell(CellType::Triangle, &[0, 1, 2]);
    builder.add_cell(CellType::Vertex, &[0]);
    builder.add_cell(CellType::Line, &[1, 2]);
    builder
        .add_cell_array(AttributeArray::new("material", 1, AttributeData::Int64(vec![10, 20, 30])).unwrap())
        .add_point_array(
            AttributeArray::new("temperature", 1, AttributeData::Float64(vec![1.0, 2.0, 3.0])).unwrap(),
        );
    builder.build().unwrap()
}

fn material(output: &SkinOutput<'_>) -> Vec<i64> {
    match output.cell_data().get("material").unwrap().data() {
        AttributeData::Int64(values) => values.clone(),
        _ => Vec::new(),
    }
}

#[test]
fn output_ids_follow_bucket_order() {
    let grid = tagged_grid();
    let mut assembler = OutputAssembler::new(grid.num_points(), grid.num_cells());
    assembler.emit(BucketKind::Polys, 0, &[0, 1, 2]);
    assembler.emit(BucketKind::Verts, 1, &[0]);
    assembler.emit_iter(BucketKind::Lines, 2, [1, 2]);
    assert_eq!(assembler.num_cells(), 3);

    let output = assembler.finish(&grid, ExtractionStats::default(), false);
    assert_eq!(output.origin_cell_ids(), &[1, 2, 0]);
    assert_eq!(material(&output), vec![20, 30, 10]);
    assert_eq!(output.cell(0), Some((BucketKind::Verts, &[0][..])));
    assert_eq!(output.cell(1), Some((BucketKind::Lines, &[1, 2][..])));
    assert_eq!(output.cell(2), Some((BucketKind::Polys, &[0, 1, 2][..])));
    assert_eq!(output.cell(3), None);
}

#[test]
fn one_cell_may_feed_many_primitives() {
    let grid = tagged_grid();
    let mut assembler = OutputAssembler::new(grid.num_points(), grid.num_cells());
    for _ in 0..4 {
        assembler.emit(BucketKind::Polys, 0, &[0, 1, 2]);
    }
    let output = assembler.finish(&grid, ExtractionStats::default(), false);
    assert_eq!(output.polys().len(), 4);
    assert_eq!(material(&output), vec![10; 4]);
}

#[test]
fn points_are_borrowed_without_tessellation() {
    let grid = tagged_grid();
    let assembler = OutputAssembler::new(grid.num_points(), grid.num_cells());
    let output = assembler.finish(&grid, ExtractionStats::default(), false);
    assert!(output.borrows_points());
    assert_eq!(output.points(), grid.points());
    assert_eq!(output.point_data(), grid.point_data());
    assert_eq!(output.num_cells(), 0);
}

#[test]
fn synthesized_points_extend_points_and_attributes() {
    let grid = tagged_grid();
    let mut assembler = OutputAssembler::new(grid.num_points(), grid.num_cells());
    let mut stencil = [(0, 0.0); 8];
    stencil[0] = (1, 0.5);
    stencil[1] = (2, 0.5);
    let id = assembler.add_point(SynthesizedPoint {
        position: Vec3::new(0.5, 0.5, 0.0),
        stencil,
    });
    assert_eq!(id, 3);
    assembler.emit(BucketKind::Polys, 0, &[0, 1, id]);

    let output = assembler.finish(&grid, ExtractionStats::default(), false);
    assert!(!output.borrows_points());
    assert_eq!(output.num_points(), 4);
    assert_eq!(output.points()[3], Vec3::new(0.5, 0.5, 0.0));
    let temperature = output.point_data().get("temperature").unwrap();
    assert_eq!(temperature.num_tuples(), 4);
    assert_eq!(temperature.tuple_f64(3), vec![2.5]);
}

#[test]
fn finish_carries_stats_and_abort_flag() {
    let grid = tagged_grid();
    let stats = ExtractionStats {
        cells_visited: 2,
        ..ExtractionStats::default()
    };
    let output = OutputAssembler::new(3, 3).finish(&grid, stats.clone(), true);
    assert!(output.aborted());
    assert_eq!(output.stats(), &stats);
}

#[test]
fn empty_output_has_nothing() {
    let output = SkinOutput::empty();
    assert_eq!(output.num_points(), 0);
    assert_eq!(output.num_cells(), 0);
    assert!(BucketKind::ALL.iter().all(|&kind| output.bucket(kind).is_empty()));
    assert!(!output.aborted());
}

#[test]
fn into_owned_detaches_from_grid() {
    let output = {
        let grid = tagged_grid();
        let mut assembler = OutputAssembler::new(grid.num_points(), grid.num_cells());
        assembler.emit(BucketKind::Verts, 1, &[0]);
        assembler.finish(&grid, ExtractionStats::default(), false).into_owned()
    };
    assert_eq!(output.num_points(), 3);
    assert_eq!(output.verts().cell(0), &[0]);
}

#[test]
fn serializes_for_hosts() {
    let grid = tagged_grid();
    let mut assembler = OutputAssembler::new(grid.num_points(), grid.num_cells());
    assembler.emit(BucketKind::Verts, 1, &[0]);
    let output = assembler.finish(&grid, ExtractionStats::default(), false);
    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["origin_cell_ids"], serde_json::json!([1]));
    assert_eq!(json["stats"]["cells_visited"], 0);
}
