//! Matrix storage layouts.
//!
//! Layouts exist both as zero-sized marker types (used as the `L` parameter
//! of [`Matrix`](crate::Matrix)) and as a runtime [`MatrixLayout`] value for
//! places where the layout is only known dynamically, such as symbolic
//! matrices.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Runtime description of a matrix storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatrixLayout {
    /// Consecutive elements of a row are adjacent in memory.
    RowMajor,
    /// Consecutive elements of a column are adjacent in memory.
    ColumnMajor,
}

impl MatrixLayout {
    /// Linear offset of `(row, col)` in a `rows`×`cols` matrix.
    #[inline]
    pub fn offset(self, row: usize, col: usize, rows: usize, cols: usize) -> usize {
        match self {
            MatrixLayout::RowMajor => row * cols + col,
            MatrixLayout::ColumnMajor => col * rows + row,
        }
    }
}

impl fmt::Display for MatrixLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixLayout::RowMajor => write!(f, "row-major"),
            MatrixLayout::ColumnMajor => write!(f, "column-major"),
        }
    }
}

/// Compile-time layout marker.
pub trait Layout: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// The runtime value this marker stands for.
    const KIND: MatrixLayout;
}

/// Row-major marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RowMajor;

/// Column-major marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ColumnMajor;

impl Layout for RowMajor {
    const KIND: MatrixLayout = MatrixLayout::RowMajor;
}

impl Layout for ColumnMajor {
    const KIND: MatrixLayout = MatrixLayout::ColumnMajor;
}
