//! Tag-driven dispatch of generic operations over tagged elements.
//!
//! A [`TaggedElement`] holds one of several unrelated container types. Code
//! generators need to run a single algorithm over whichever one is present
//! without forcing those containers to share a trait object. The routers in
//! this module take the caller's declared tags, select the payload strictly
//! from the [`ElementType`], and call a generic operation with the concrete
//! value.
//!
//! # Operations
//!
//! An operation declares its result type through [`Operation`] and implements
//! one trait per family it can handle. Each family method is generic over the
//! numeric type (and the layout for matrices), so one body covers every
//! concrete payload of that family:
//!
//! | Family            | Trait               | Receives               |
//! |-------------------|---------------------|------------------------|
//! | host scalar       | [`HostScalarOp`]    | `T` by value           |
//! | scalar            | [`ScalarOp`]        | `&Scalar<T>`           |
//! | vector            | [`VectorOp`]        | `&Vector<T>`           |
//! | symbolic vector   | [`SymbolicVectorOp`]| `&SymbolicVector<T>`   |
//! | row/col matrix    | [`MatrixOp`]        | `&Matrix<T, L>`        |
//! | symbolic matrix   | [`SymbolicMatrixOp`]| `&SymbolicMatrix<T>`   |
//!
//! [`dispatch_family`] needs all six and is the entry point for arbitrary
//! elements. The per-family routers only need the one trait they route to.
//!
//! # Example
//!
//! ```
//! use lagen_codegen::dispatch::{Operation, VectorOp, dispatch_vector};
//! use lagen_codegen::registry::Numeric;
//! use lagen_foundation::{ElementType, TaggedElement, Vector};
//!
//! struct Bytes;
//!
//! impl Operation for Bytes {
//!     type Output = usize;
//! }
//!
//! impl VectorOp for Bytes {
//!     fn vector<T: Numeric>(&self, vector: &Vector<T>) -> usize {
//!         vector.len() * std::mem::size_of::<T>()
//!     }
//! }
//!
//! let v = Vector::filled(4, 0.0f64);
//! let element = TaggedElement::from(&v);
//! let bytes = dispatch_vector(ElementType::VectorDouble, element, &Bytes).unwrap();
//! assert_eq!(bytes, 32);
//! ```

use lagen_foundation::{
    ElementType, Family, Matrix, Scalar, SymbolicMatrix, SymbolicVector, TaggedElement, Vector,
};
use tracing::{error, trace};

use crate::error::{DispatchError, Result};
use crate::registry::{LayoutTag, Numeric};

const HOST_SCALAR_ROUTER: &str = "host scalar";
const SCALAR_ROUTER: &str = "scalar";
const VECTOR_ROUTER: &str = "vector";
const SYMBOLIC_VECTOR_ROUTER: &str = "symbolic vector";
const MATRIX_ROUTER: &str = "matrix";
const SYMBOLIC_MATRIX_ROUTER: &str = "symbolic matrix";

/// Declares the result type shared by all of an operation's family methods.
pub trait Operation {
    type Output;
}

/// Operation over host scalars.
pub trait HostScalarOp: Operation {
    fn host_scalar<T: Numeric>(&self, value: T) -> Self::Output;
}

/// Operation over device scalars.
pub trait ScalarOp: Operation {
    fn scalar<T: Numeric>(&self, scalar: &Scalar<T>) -> Self::Output;
}

/// Operation over device vectors.
pub trait VectorOp: Operation {
    fn vector<T: Numeric>(&self, vector: &Vector<T>) -> Self::Output;
}

/// Operation over symbolic vectors.
pub trait SymbolicVectorOp: Operation {
    fn symbolic_vector<T: Numeric>(&self, vector: &SymbolicVector<T>) -> Self::Output;
}

/// Operation over device matrices of either layout.
pub trait MatrixOp: Operation {
    fn matrix<T: Numeric, L: LayoutTag>(&self, matrix: &Matrix<T, L>) -> Self::Output;
}

/// Operation over symbolic matrices.
pub trait SymbolicMatrixOp: Operation {
    fn symbolic_matrix<T: Numeric>(&self, matrix: &SymbolicMatrix<T>) -> Self::Output;
}

/// Operation that handles every routable family.
pub trait ElementOp:
    HostScalarOp + ScalarOp + VectorOp + SymbolicVectorOp + MatrixOp + SymbolicMatrixOp
{
}

impl<O> ElementOp for O where
    O: HostScalarOp + ScalarOp + VectorOp + SymbolicVectorOp + MatrixOp + SymbolicMatrixOp
{
}

/// Route `element` to the family router selected by `family`.
///
/// # Errors
///
/// [`DispatchError::UnsupportedFamily`] for families that hold no payload,
/// and whatever the selected family router reports.
pub fn dispatch_family<O: ElementOp>(
    family: Family,
    element_type: ElementType,
    element: TaggedElement<'_>,
    op: &O,
) -> Result<O::Output> {
    trace!(%family, %element_type, "dispatching element");
    match family {
        Family::HostScalar => dispatch_host_scalar(element_type, element, op),
        Family::Scalar => dispatch_scalar(element_type, element, op),
        Family::Vector => dispatch_vector(element_type, element, op),
        Family::SymbolicVector => dispatch_symbolic_vector(element_type, element, op),
        Family::MatrixRowMajor | Family::MatrixColMajor => {
            dispatch_matrix(element_type, element, op)
        }
        Family::SymbolicMatrix => dispatch_symbolic_matrix(element_type, element, op),
        Family::CompositeOperation | Family::Invalid => {
            error!(%family, "family holds no dispatchable payload");
            Err(DispatchError::UnsupportedFamily(family))
        }
    }
}

/// Route `element` using the tags of the payload it holds.
pub fn dispatch<O: ElementOp>(element: TaggedElement<'_>, op: &O) -> Result<O::Output> {
    dispatch_family(element.family(), element.element_type(), element, op)
}

/// Route a host scalar element.
pub fn dispatch_host_scalar<O: HostScalarOp>(
    element_type: ElementType,
    element: TaggedElement<'_>,
    op: &O,
) -> Result<O::Output> {
    match (element_type, element) {
        (ElementType::HostScalarFloat, TaggedElement::HostFloat(value)) => {
            Ok(op.host_scalar(value))
        }
        (ElementType::HostScalarDouble, TaggedElement::HostDouble(value)) => {
            Ok(op.host_scalar(value))
        }
        _ => Err(reject(
            HOST_SCALAR_ROUTER,
            &[Family::HostScalar],
            element_type,
            element,
        )),
    }
}

/// Route a device scalar element.
pub fn dispatch_scalar<O: ScalarOp>(
    element_type: ElementType,
    element: TaggedElement<'_>,
    op: &O,
) -> Result<O::Output> {
    match (element_type, element) {
        (ElementType::ScalarFloat, TaggedElement::ScalarFloat(scalar)) => Ok(op.scalar(scalar)),
        (ElementType::ScalarDouble, TaggedElement::ScalarDouble(scalar)) => Ok(op.scalar(scalar)),
        _ => Err(reject(SCALAR_ROUTER, &[Family::Scalar], element_type, element)),
    }
}

/// Route a device vector element.
pub fn dispatch_vector<O: VectorOp>(
    element_type: ElementType,
    element: TaggedElement<'_>,
    op: &O,
) -> Result<O::Output> {
    match (element_type, element) {
        (ElementType::VectorFloat, TaggedElement::VectorFloat(vector)) => Ok(op.vector(vector)),
        (ElementType::VectorDouble, TaggedElement::VectorDouble(vector)) => Ok(op.vector(vector)),
        _ => Err(reject(VECTOR_ROUTER, &[Family::Vector], element_type, element)),
    }
}

/// Route a symbolic vector element.
pub fn dispatch_symbolic_vector<O: SymbolicVectorOp>(
    element_type: ElementType,
    element: TaggedElement<'_>,
    op: &O,
) -> Result<O::Output> {
    match (element_type, element) {
        (ElementType::SymbolicVectorFloat, TaggedElement::SymbolicVectorFloat(vector)) => {
            Ok(op.symbolic_vector(vector))
        }
        (ElementType::SymbolicVectorDouble, TaggedElement::SymbolicVectorDouble(vector)) => {
            Ok(op.symbolic_vector(vector))
        }
        _ => Err(reject(
            SYMBOLIC_VECTOR_ROUTER,
            &[Family::SymbolicVector],
            element_type,
            element,
        )),
    }
}

/// Route a device matrix element of either layout.
///
/// Both matrix families share this router; the layout is taken from the
/// element type alone.
pub fn dispatch_matrix<O: MatrixOp>(
    element_type: ElementType,
    element: TaggedElement<'_>,
    op: &O,
) -> Result<O::Output> {
    match (element_type, element) {
        (ElementType::MatrixRowFloat, TaggedElement::MatrixRowFloat(matrix)) => {
            Ok(op.matrix(matrix))
        }
        (ElementType::MatrixRowDouble, TaggedElement::MatrixRowDouble(matrix)) => {
            Ok(op.matrix(matrix))
        }
        (ElementType::MatrixColFloat, TaggedElement::MatrixColFloat(matrix)) => {
            Ok(op.matrix(matrix))
        }
        (ElementType::MatrixColDouble, TaggedElement::MatrixColDouble(matrix)) => {
            Ok(op.matrix(matrix))
        }
        _ => Err(reject(
            MATRIX_ROUTER,
            &[Family::MatrixRowMajor, Family::MatrixColMajor],
            element_type,
            element,
        )),
    }
}

/// Route a symbolic matrix element.
pub fn dispatch_symbolic_matrix<O: SymbolicMatrixOp>(
    element_type: ElementType,
    element: TaggedElement<'_>,
    op: &O,
) -> Result<O::Output> {
    match (element_type, element) {
        (ElementType::SymbolicMatrixFloat, TaggedElement::SymbolicMatrixFloat(matrix)) => {
            Ok(op.symbolic_matrix(matrix))
        }
        (ElementType::SymbolicMatrixDouble, TaggedElement::SymbolicMatrixDouble(matrix)) => {
            Ok(op.symbolic_matrix(matrix))
        }
        _ => Err(reject(
            SYMBOLIC_MATRIX_ROUTER,
            &[Family::SymbolicMatrix],
            element_type,
            element,
        )),
    }
}

/// Classify a routing failure.
///
/// A declared type outside `families` is the caller routing through the
/// wrong router. A declared type inside it means the payload disagrees with
/// its own tag.
fn reject(
    router: &'static str,
    families: &[Family],
    element_type: ElementType,
    element: TaggedElement<'_>,
) -> DispatchError {
    let actual = element.element_type();
    if families.contains(&element_type.family()) {
        error!(router, declared = %element_type, %actual, "payload does not match its tag");
        DispatchError::PayloadMismatch {
            declared: element_type,
            actual,
        }
    } else {
        error!(router, %element_type, "element type not routable here");
        DispatchError::unsupported(router, element_type)
    }
}
