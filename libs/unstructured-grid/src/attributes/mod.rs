//! # Attribute Tables
//!
//! Named, typed arrays attached to points or cells. Each array stores
//! `num_components` values per tuple and one tuple per point (or cell).
//!
//! Output geometry never invents attribute values: cell attributes are
//! gathered from the originating cells, and point attributes are passed
//! through, only extended for points synthesized by tessellation.

use config::constants::GHOST_LEVELS_ARRAY;
use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};
use crate::PointId;

#[cfg(test)]
mod tests;

// =============================================================================
// ATTRIBUTE DATA
// =============================================================================

/// Typed storage of an attribute array, tuples laid out contiguously.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeData {
    /// Unsigned bytes (flags, ghost levels).
    UInt8(Vec<u8>),
    /// Signed integers (ids, material tags).
    Int64(Vec<i64>),
    /// Floating point values (scalars, vectors, tensors).
    Float64(Vec<f64>),
}

impl AttributeData {
    /// Number of scalar values stored.
    pub fn len(&self) -> usize {
        match self {
            AttributeData::UInt8(values) => values.len(),
            AttributeData::Int64(values) => values.len(),
            AttributeData::Float64(values) => values.len(),
        }
    }

    /// Whether no values are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn gather(&self, components: usize, rows: &[usize]) -> Self {
        match self {
            AttributeData::UInt8(values) => AttributeData::UInt8(gather_rows(values, components, rows)),
            AttributeData::Int64(values) => AttributeData::Int64(gather_rows(values, components, rows)),
            AttributeData::Float64(values) => {
                AttributeData::Float64(gather_rows(values, components, rows))
            }
        }
    }

    fn push_interpolated(&mut self, components: usize, stencil: &[(PointId, f64)]) {
        for component in 0..components {
            match self {
                AttributeData::UInt8(values) => {
                    let v = weighted_sum(stencil, |p| f64::from(values[p * components + component]));
                    values.push(v.round().clamp(0.0, f64::from(u8::MAX)) as u8);
                }
                AttributeData::Int64(values) => {
                    let v = weighted_sum(stencil, |p| values[p * components + component] as f64);
                    values.push(v.round() as i64);
                }
                AttributeData::Float64(values) => {
                    let v = weighted_sum(stencil, |p| values[p * components + component]);
                    values.push(v);
                }
            }
        }
    }

    fn shrink_to_fit(&mut self) {
        match self {
            AttributeData::UInt8(values) => values.shrink_to_fit(),
            AttributeData::Int64(values) => values.shrink_to_fit(),
            AttributeData::Float64(values) => values.shrink_to_fit(),
        }
    }
}

fn gather_rows<T: Copy>(values: &[T], components: usize, rows: &[usize]) -> Vec<T> {
    let mut out = Vec::with_capacity(rows.len() * components);
    for &row in rows {
        out.extend_from_slice(&values[row * components..(row + 1) * components]);
    }
    out
}

fn weighted_sum(stencil: &[(PointId, f64)], value: impl Fn(PointId) -> f64) -> f64 {
    stencil.iter().map(|&(point, weight)| weight * value(point)).sum()
}

// =============================================================================
// ATTRIBUTE ARRAY
// =============================================================================

/// A named attribute array.
///
/// # Examples
/// ```
/// use unstructured_grid::{AttributeArray, AttributeData};
/// let velocity = AttributeArray::new(
///     "velocity",
///     3,
///     AttributeData::Float64(vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0]),
/// )
/// .unwrap();
/// assert_eq!(velocity.num_tuples(), 2);
/// assert_eq!(velocity.tuple_f64(1), vec![0.0, 1.0, 0.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeArray {
    name: String,
    num_components: usize,
    data: AttributeData,
}

impl AttributeArray {
    /// Creates an array, checking that the values form whole tuples.
    pub fn new(
        name: impl Into<String>,
        num_components: usize,
        data: AttributeData,
    ) -> GridResult<Self> {
        let name = name.into();
        if num_components == 0 || data.len() % num_components != 0 {
            return Err(GridError::AttributeShape {
                name,
                components: num_components,
                values: data.len(),
            });
        }
        Ok(Self {
            name,
            num_components,
            data,
        })
    }

    /// Array name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Values per tuple.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// Underlying storage.
    pub fn data(&self) -> &AttributeData {
        &self.data
    }

    /// Number of tuples.
    pub fn num_tuples(&self) -> usize {
        self.data.len() / self.num_components
    }

    /// Tuple `index` widened to `f64`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.num_tuples()`.
    pub fn tuple_f64(&self, index: usize) -> Vec<f64> {
        let range = index * self.num_components..(index + 1) * self.num_components;
        match &self.data {
            AttributeData::UInt8(values) => values[range].iter().map(|&v| f64::from(v)).collect(),
            AttributeData::Int64(values) => values[range].iter().map(|&v| v as f64).collect(),
            AttributeData::Float64(values) => values[range].to_vec(),
        }
    }

    /// New array holding the tuples at `rows`, in that order.
    pub fn gather(&self, rows: &[usize]) -> Self {
        Self {
            name: self.name.clone(),
            num_components: self.num_components,
            data: self.data.gather(self.num_components, rows),
        }
    }

    /// Copy of this array with one interpolated tuple appended per stencil.
    pub fn extended_with<S: AsRef<[(PointId, f64)]>>(&self, stencils: &[S]) -> Self {
        let mut out = self.clone();
        for stencil in stencils {
            out.data.push_interpolated(self.num_components, stencil.as_ref());
        }
        out
    }

    fn squeeze(&mut self) {
        self.data.shrink_to_fit();
    }
}

// =============================================================================
// ATTRIBUTE TABLE
// =============================================================================

/// Set of uniquely named attribute arrays sharing one tuple count.
///
/// # Examples
/// ```
/// use unstructured_grid::{AttributeArray, AttributeData, AttributeTable};
/// let mut table = AttributeTable::new();
/// table
///     .add(AttributeArray::new("pressure", 1, AttributeData::Float64(vec![1.0, 2.0])).unwrap())
///     .unwrap();
/// assert!(table.get("pressure").is_some());
/// assert!(table.ghost_levels().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeTable {
    arrays: Vec<AttributeArray>,
}

impl AttributeTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an array, rejecting duplicate names.
    pub fn add(&mut self, array: AttributeArray) -> GridResult<()> {
        if self.get(array.name()).is_some() {
            return Err(GridError::DuplicateAttribute(array.name));
        }
        self.arrays.push(array);
        Ok(())
    }

    /// Looks up an array by name.
    pub fn get(&self, name: &str) -> Option<&AttributeArray> {
        self.arrays.iter().find(|array| array.name() == name)
    }

    /// All arrays in insertion order.
    pub fn arrays(&self) -> &[AttributeArray] {
        &self.arrays
    }

    /// Number of arrays.
    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    /// Whether the table holds no arrays.
    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }

    /// Checks that every array carries exactly `expected` tuples.
    pub fn validate_tuples(&self, expected: usize) -> GridResult<()> {
        for array in &self.arrays {
            if array.num_tuples() != expected {
                return Err(GridError::AttributeLength {
                    name: array.name.clone(),
                    expected,
                    actual: array.num_tuples(),
                });
            }
        }
        Ok(())
    }

    /// The reserved per-cell ghost level array, when present with the
    /// expected layout (unsigned bytes, one component).
    pub fn ghost_levels(&self) -> Option<&[u8]> {
        let array = self.get(GHOST_LEVELS_ARRAY)?;
        match (&array.data, array.num_components) {
            (AttributeData::UInt8(levels), 1) => Some(levels),
            _ => None,
        }
    }

    /// New table holding, for every array, the tuples at `rows`.
    pub fn gather(&self, rows: &[usize]) -> Self {
        Self {
            arrays: self.arrays.iter().map(|array| array.gather(rows)).collect(),
        }
    }

    /// Copy of this table with interpolated tuples appended per stencil.
    pub fn extended_with<S: AsRef<[(PointId, f64)]>>(&self, stencils: &[S]) -> Self {
        Self {
            arrays: self
                .arrays
                .iter()
                .map(|array| array.extended_with(stencils))
                .collect(),
        }
    }

    /// Drops reserved but unused capacity in every array.
    pub fn squeeze(&mut self) {
        self.arrays.shrink_to_fit();
        for array in &mut self.arrays {
            array.squeeze();
        }
    }
}
