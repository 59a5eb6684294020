//! Integration test harness for lagen.
//!
//! Drives the dispatch core, kernel naming and the emission stream together
//! the way a kernel generator does: tagged operands in, a named OpenCL-style
//! element-wise kernel out.

use std::fmt::Write;

use lagen_codegen::{
    HostScalarOp, KernelName, KernelStream, LayoutTag, MatrixOp, Numeric, Operation, Result,
    ScalarOp, StreamConfig, SymbolicMatrixOp, SymbolicVectorOp, TypeName, VectorOp, column_count,
    dispatch, element_count, row_count,
};
use lagen_foundation::{
    Family, Matrix, Scalar, SymbolicMatrix, SymbolicVector, TaggedElement, Vector,
};
use tracing_subscriber::{EnvFilter, fmt};

/// Install a test-friendly subscriber once per process.
///
/// Use `RUST_LOG` to see dispatch and stream events, e.g.
/// `RUST_LOG=lagen_codegen=trace`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Another test may have installed it already.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_test_writer()
        .try_init();
}

/// Kernel produced by the harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedKernel {
    pub name: String,
    pub source: String,
}

/// Formal parameter declaration of operand `index`.
struct ParameterDecl {
    index: usize,
}

impl ParameterDecl {
    fn global<T: TypeName>(&self) -> String {
        format!("__global {}* arg{}", T::NAME, self.index)
    }
}

impl Operation for ParameterDecl {
    type Output = String;
}

impl HostScalarOp for ParameterDecl {
    fn host_scalar<T: Numeric>(&self, _value: T) -> String {
        format!("{} arg{}", <T as TypeName>::NAME, self.index)
    }
}

impl ScalarOp for ParameterDecl {
    fn scalar<T: Numeric>(&self, _scalar: &Scalar<T>) -> String {
        self.global::<T>()
    }
}

impl VectorOp for ParameterDecl {
    fn vector<T: Numeric>(&self, _vector: &Vector<T>) -> String {
        self.global::<T>()
    }
}

impl SymbolicVectorOp for ParameterDecl {
    fn symbolic_vector<T: Numeric>(&self, vector: &SymbolicVector<T>) -> String {
        format!("__global {}* p{}", <T as TypeName>::NAME, vector.param().raw())
    }
}

impl MatrixOp for ParameterDecl {
    fn matrix<T: Numeric, L: LayoutTag>(&self, _matrix: &Matrix<T, L>) -> String {
        self.global::<T>()
    }
}

impl SymbolicMatrixOp for ParameterDecl {
    fn symbolic_matrix<T: Numeric>(&self, matrix: &SymbolicMatrix<T>) -> String {
        format!("__global {}* p{}", <T as TypeName>::NAME, matrix.param().raw())
    }
}

/// Expression reading operand `index` at work item `i`.
struct ElementAccess {
    index: usize,
}

impl Operation for ElementAccess {
    type Output = String;
}

impl HostScalarOp for ElementAccess {
    fn host_scalar<T: Numeric>(&self, _value: T) -> String {
        format!("arg{}", self.index)
    }
}

impl ScalarOp for ElementAccess {
    fn scalar<T: Numeric>(&self, _scalar: &Scalar<T>) -> String {
        format!("arg{}[0]", self.index)
    }
}

impl VectorOp for ElementAccess {
    fn vector<T: Numeric>(&self, _vector: &Vector<T>) -> String {
        format!("arg{}[i]", self.index)
    }
}

impl SymbolicVectorOp for ElementAccess {
    fn symbolic_vector<T: Numeric>(&self, vector: &SymbolicVector<T>) -> String {
        format!("p{}[i]", vector.param().raw())
    }
}

impl MatrixOp for ElementAccess {
    fn matrix<T: Numeric, L: LayoutTag>(&self, _matrix: &Matrix<T, L>) -> String {
        format!("arg{}[i]", self.index)
    }
}

impl SymbolicMatrixOp for ElementAccess {
    fn symbolic_matrix<T: Numeric>(&self, matrix: &SymbolicMatrix<T>) -> String {
        format!("p{}[i]", matrix.param().raw())
    }
}

/// Test harness generating element-wise kernels from tagged operands.
pub struct KernelHarness {
    config: StreamConfig,
}

impl KernelHarness {
    /// Harness with the default stream configuration.
    pub fn new() -> Self {
        Self::with_config(StreamConfig::default())
    }

    /// Harness with a custom stream configuration.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid.
    pub fn with_config(config: StreamConfig) -> Self {
        init_tracing();
        if let Err(e) = config.validate() {
            panic!("invalid harness config: {e}");
        }
        Self { config }
    }

    /// Generate `operands[0] = body(accesses)` over every work item.
    ///
    /// The launch extent is taken from the first concrete vector or matrix
    /// operand. `body` receives one access expression per operand after the
    /// destination.
    pub fn generate_elementwise(
        &self,
        stem: &str,
        operands: &[TaggedElement<'_>],
        body: impl FnOnce(&[String]) -> String,
    ) -> Result<GeneratedKernel> {
        let mut name = KernelName::new(stem);
        let mut params = Vec::with_capacity(operands.len());
        let mut accesses = Vec::with_capacity(operands.len());
        for (index, element) in operands.iter().copied().enumerate() {
            name = name.element(element)?;
            params.push(dispatch(element, &ParameterDecl { index })?);
            accesses.push(dispatch(element, &ElementAccess { index })?);
        }
        let name = name.build();

        let mut extent = None;
        for element in operands.iter().copied() {
            extent = extent_of(element)?;
            if extent.is_some() {
                break;
            }
        }

        let mut out =
            KernelStream::with_config(self.config.clone()).expect("config validated on creation");
        out.open_block(&format!("__kernel void {name}({})", params.join(", ")));
        // KernelStream writes never fail.
        let _ = writeln!(out, "const uint i = get_global_id(0);");
        match (extent, accesses.split_first()) {
            (Some(n), Some((dest, sources))) => {
                out.open_block(&format!("if (i < {n})"));
                let _ = writeln!(out, "{dest} = {};", body(sources));
                out.close_block();
            }
            (None, Some((dest, sources))) => {
                let _ = writeln!(out, "{dest} = {};", body(sources));
            }
            (_, None) => {}
        }
        out.close_block();

        Ok(GeneratedKernel {
            name,
            source: out.into_contents(),
        })
    }
}

impl Default for KernelHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of work items a concrete operand spans.
fn extent_of(element: TaggedElement<'_>) -> Result<Option<usize>> {
    let element_type = element.element_type();
    match element.family() {
        Family::Vector => element_count(element_type, element).map(Some),
        Family::MatrixRowMajor | Family::MatrixColMajor => {
            Ok(Some(row_count(element_type, element)? * column_count(element_type, element)?))
        }
        _ => Ok(None),
    }
}
