//! Kernel identifiers derived from operand tags.
//!
//! Generated kernels are cached and looked up by name, so two kernels that
//! differ only in precision or matrix layout must never share one. Each
//! operand contributes a short code (family letter, numeric character, and
//! layout character for matrices) and the codes are joined onto a stem:
//!
//! ```text
//! assign_vf_vf_hf     vector<f32> = vector<f32> * host f32
//! gemv_mdc_vd_vd      column-major f64 matrix-vector product
//! ```

use lagen_foundation::{
    ElementType, Family, Matrix, Scalar, SymbolicMatrix, SymbolicVector, TaggedElement, Vector,
};
use tracing::debug;

use crate::dispatch::{
    HostScalarOp, MatrixOp, Operation, ScalarOp, SymbolicMatrixOp, SymbolicVectorOp, VectorOp,
    dispatch_family,
};
use crate::error::Result;
use crate::registry::{LayoutTag, Numeric, RuntimeTypeTag, TypeChar};

/// Name code of a single operand, such as `hf`, `vd` or `mfr`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OperandCode;

impl OperandCode {
    fn code<T: Numeric>(family: char) -> String {
        [family, <T as TypeChar>::CHAR].iter().collect()
    }
}

impl Operation for OperandCode {
    type Output = String;
}

impl HostScalarOp for OperandCode {
    fn host_scalar<T: Numeric>(&self, _value: T) -> String {
        Self::code::<T>('h')
    }
}

impl ScalarOp for OperandCode {
    fn scalar<T: Numeric>(&self, _scalar: &Scalar<T>) -> String {
        Self::code::<T>('s')
    }
}

impl VectorOp for OperandCode {
    fn vector<T: Numeric>(&self, _vector: &Vector<T>) -> String {
        Self::code::<T>('v')
    }
}

// Symbolic operands are bound to real buffers before launch, so they share
// the codes of the containers they stand in for.
impl SymbolicVectorOp for OperandCode {
    fn symbolic_vector<T: Numeric>(&self, _vector: &SymbolicVector<T>) -> String {
        Self::code::<T>('v')
    }
}

impl MatrixOp for OperandCode {
    fn matrix<T: Numeric, L: LayoutTag>(&self, _matrix: &Matrix<T, L>) -> String {
        let mut code = Self::code::<T>('m');
        code.push(<L as TypeChar>::CHAR);
        code
    }
}

impl SymbolicMatrixOp for OperandCode {
    fn symbolic_matrix<T: Numeric>(&self, matrix: &SymbolicMatrix<T>) -> String {
        let mut code = Self::code::<T>('m');
        code.push(matrix.layout().tag_char());
        code
    }
}

/// Builder for a kernel identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelName {
    stem: String,
    operands: Vec<String>,
}

impl KernelName {
    pub fn new(stem: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            operands: Vec::new(),
        }
    }

    /// Append the code of one operand.
    ///
    /// The operand is routed like any other dispatch, so inconsistent tags
    /// fail here instead of producing a misleading name.
    pub fn operand(
        mut self,
        family: Family,
        element_type: ElementType,
        element: TaggedElement<'_>,
    ) -> Result<Self> {
        let code = dispatch_family(family, element_type, element, &OperandCode)?;
        self.operands.push(code);
        Ok(self)
    }

    /// Append an operand using the tags of its own payload.
    pub fn element(self, element: TaggedElement<'_>) -> Result<Self> {
        self.operand(element.family(), element.element_type(), element)
    }

    pub fn operand_count(&self) -> usize {
        self.operands.len()
    }

    pub fn build(self) -> String {
        let mut name = self.stem;
        for code in &self.operands {
            name.push('_');
            name.push_str(code);
        }
        debug!(kernel = %name, "kernel name built");
        name
    }
}
