//! Size and type queries expressed as dispatch operations.

use lagen_foundation::{
    ElementType, Family, Matrix, Scalar, SymbolicMatrix, SymbolicVector, TaggedElement, Vector,
};

use crate::dispatch::{
    HostScalarOp, MatrixOp, Operation, ScalarOp, SymbolicMatrixOp, SymbolicVectorOp, VectorOp,
    dispatch_family, dispatch_matrix, dispatch_vector,
};
use crate::error::Result;
use crate::registry::{LayoutTag, Numeric, TypeName};

/// Number of elements in a vector.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementCount;

impl Operation for ElementCount {
    type Output = usize;
}

impl VectorOp for ElementCount {
    fn vector<T: Numeric>(&self, vector: &Vector<T>) -> usize {
        vector.len()
    }
}

/// Number of rows in a matrix.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowCount;

impl Operation for RowCount {
    type Output = usize;
}

impl MatrixOp for RowCount {
    fn matrix<T: Numeric, L: LayoutTag>(&self, matrix: &Matrix<T, L>) -> usize {
        matrix.rows()
    }
}

/// Number of columns in a matrix.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnCount;

impl Operation for ColumnCount {
    type Output = usize;
}

impl MatrixOp for ColumnCount {
    fn matrix<T: Numeric, L: LayoutTag>(&self, matrix: &Matrix<T, L>) -> usize {
        matrix.cols()
    }
}

/// Registry name of the element's numeric type (`float`, `double`).
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericTypeName;

impl Operation for NumericTypeName {
    type Output = &'static str;
}

impl HostScalarOp for NumericTypeName {
    fn host_scalar<T: Numeric>(&self, _value: T) -> &'static str {
        <T as TypeName>::NAME
    }
}

impl ScalarOp for NumericTypeName {
    fn scalar<T: Numeric>(&self, _scalar: &Scalar<T>) -> &'static str {
        <T as TypeName>::NAME
    }
}

impl VectorOp for NumericTypeName {
    fn vector<T: Numeric>(&self, _vector: &Vector<T>) -> &'static str {
        <T as TypeName>::NAME
    }
}

impl SymbolicVectorOp for NumericTypeName {
    fn symbolic_vector<T: Numeric>(&self, _vector: &SymbolicVector<T>) -> &'static str {
        <T as TypeName>::NAME
    }
}

impl MatrixOp for NumericTypeName {
    fn matrix<T: Numeric, L: LayoutTag>(&self, _matrix: &Matrix<T, L>) -> &'static str {
        <T as TypeName>::NAME
    }
}

impl SymbolicMatrixOp for NumericTypeName {
    fn symbolic_matrix<T: Numeric>(&self, _matrix: &SymbolicMatrix<T>) -> &'static str {
        <T as TypeName>::NAME
    }
}

/// Length of a vector element.
pub fn element_count(element_type: ElementType, element: TaggedElement<'_>) -> Result<usize> {
    dispatch_vector(element_type, element, &ElementCount)
}

/// Row count of a matrix element, either layout.
pub fn row_count(element_type: ElementType, element: TaggedElement<'_>) -> Result<usize> {
    dispatch_matrix(element_type, element, &RowCount)
}

/// Column count of a matrix element, either layout.
pub fn column_count(element_type: ElementType, element: TaggedElement<'_>) -> Result<usize> {
    dispatch_matrix(element_type, element, &ColumnCount)
}

/// Numeric type name of any routable element.
pub fn numeric_type_name(
    family: Family,
    element_type: ElementType,
    element: TaggedElement<'_>,
) -> Result<&'static str> {
    dispatch_family(family, element_type, element, &NumericTypeName)
}
