//! Dense device matrices.
//!
//! Storage is an `Arc<[T]>` so that cloning a matrix is cheap and every clone
//! refers to the same buffer. The layout marker `L` fixes how `(row, col)`
//! maps onto that buffer.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::ids::BufferId;
use crate::layout::{Layout, MatrixLayout};

/// Dense matrix resident in device memory.
#[derive(Clone, Debug)]
pub struct Matrix<T, L: Layout> {
    id: BufferId,
    rows: usize,
    cols: usize,
    data: Arc<[T]>,
    layout: PhantomData<L>,
}

impl<T: Copy, L: Layout> Matrix<T, L> {
    /// Create a matrix with every element set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self::from_vec(rows, cols, vec![value; rows * cols])
    }

    /// Create a matrix whose element `(r, c)` is `f(r, c)`.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        match L::KIND {
            MatrixLayout::RowMajor => {
                for r in 0..rows {
                    for c in 0..cols {
                        data.push(f(r, c));
                    }
                }
            }
            MatrixLayout::ColumnMajor => {
                for c in 0..cols {
                    for r in 0..rows {
                        data.push(f(r, c));
                    }
                }
            }
        }
        Self::from_vec(rows, cols, data)
    }

    /// Get element at (row, col).
    pub fn get(&self, row: usize, col: usize) -> T {
        assert!(
            row < self.rows && col < self.cols,
            "Index ({}, {}) out of bounds for {}×{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        self.data[L::KIND.offset(row, col, self.rows, self.cols)]
    }
}

impl<T, L: Layout> Matrix<T, L> {
    /// Create a matrix from storage already ordered according to `L`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "Data length {} does not match dimensions {}×{}",
            data.len(),
            rows,
            cols
        );
        Self {
            id: BufferId::next(),
            rows,
            cols,
            data: data.into(),
            layout: PhantomData,
        }
    }

    /// Handle of the underlying buffer.
    pub fn id(&self) -> BufferId {
        self.id
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Check if the matrix has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Storage layout.
    pub fn layout(&self) -> MatrixLayout {
        L::KIND
    }

    /// Raw storage in layout order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Copy + fmt::Display, L: Layout> fmt::Display for Matrix<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix({}×{}, {}) [", self.rows, self.cols, L::KIND)?;
        for row in 0..self.rows {
            if row > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.get(row, col))?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
