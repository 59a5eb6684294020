//! Element tags and the tagged element union.
//!
//! Every operand slot of an expression node carries a coarse [`Family`], a
//! fine [`ElementType`] and the payload itself as a [`TaggedElement`]. The
//! family of an element type is defined in exactly one place,
//! [`ElementType::family`]; the per-family legal sets are derived from it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::layout::{ColumnMajor, RowMajor};
use crate::matrix::Matrix;
use crate::symbolic::{SymbolicMatrix, SymbolicVector};
use crate::vector::{Scalar, Vector};

/// Coarse operand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    /// Scalar passed by value from the host.
    HostScalar,
    /// Scalar resident on the device.
    Scalar,
    /// Dense device vector.
    Vector,
    /// Placeholder vector parameter.
    SymbolicVector,
    /// Dense device matrix, row-major.
    MatrixRowMajor,
    /// Dense device matrix, column-major.
    MatrixColMajor,
    /// Placeholder matrix parameter.
    SymbolicMatrix,
    /// The operand is another expression node, not a container.
    CompositeOperation,
    /// Unset operand slot.
    Invalid,
}

impl Family {
    /// Every family, routable or not.
    pub const ALL: [Family; 9] = [
        Family::HostScalar,
        Family::Scalar,
        Family::Vector,
        Family::SymbolicVector,
        Family::MatrixRowMajor,
        Family::MatrixColMajor,
        Family::SymbolicMatrix,
        Family::CompositeOperation,
        Family::Invalid,
    ];

    /// Whether elements of this family hold a container or host value.
    pub fn is_routable(self) -> bool {
        !matches!(self, Family::CompositeOperation | Family::Invalid)
    }

    /// Element types that belong to this family.
    pub fn element_types(self) -> impl Iterator<Item = ElementType> {
        ElementType::ALL
            .into_iter()
            .filter(move |ty| ty.family() == self)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Family::HostScalar => "host scalar",
            Family::Scalar => "scalar",
            Family::Vector => "vector",
            Family::SymbolicVector => "symbolic vector",
            Family::MatrixRowMajor => "row-major matrix",
            Family::MatrixColMajor => "column-major matrix",
            Family::SymbolicMatrix => "symbolic matrix",
            Family::CompositeOperation => "composite operation",
            Family::Invalid => "invalid",
        };
        f.write_str(name)
    }
}

/// Numeric representation of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericKind {
    /// 32-bit IEEE 754.
    Float,
    /// 64-bit IEEE 754.
    Double,
}

/// Fine operand tag: family plus numeric representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    HostScalarFloat,
    HostScalarDouble,
    ScalarFloat,
    ScalarDouble,
    VectorFloat,
    VectorDouble,
    SymbolicVectorFloat,
    SymbolicVectorDouble,
    MatrixRowFloat,
    MatrixRowDouble,
    MatrixColFloat,
    MatrixColDouble,
    SymbolicMatrixFloat,
    SymbolicMatrixDouble,
    CompositeOperation,
    Invalid,
}

impl ElementType {
    /// Every element type, routable or not.
    pub const ALL: [ElementType; 16] = [
        ElementType::HostScalarFloat,
        ElementType::HostScalarDouble,
        ElementType::ScalarFloat,
        ElementType::ScalarDouble,
        ElementType::VectorFloat,
        ElementType::VectorDouble,
        ElementType::SymbolicVectorFloat,
        ElementType::SymbolicVectorDouble,
        ElementType::MatrixRowFloat,
        ElementType::MatrixRowDouble,
        ElementType::MatrixColFloat,
        ElementType::MatrixColDouble,
        ElementType::SymbolicMatrixFloat,
        ElementType::SymbolicMatrixDouble,
        ElementType::CompositeOperation,
        ElementType::Invalid,
    ];

    /// The family this element type belongs to.
    pub fn family(self) -> Family {
        match self {
            ElementType::HostScalarFloat | ElementType::HostScalarDouble => Family::HostScalar,
            ElementType::ScalarFloat | ElementType::ScalarDouble => Family::Scalar,
            ElementType::VectorFloat | ElementType::VectorDouble => Family::Vector,
            ElementType::SymbolicVectorFloat | ElementType::SymbolicVectorDouble => {
                Family::SymbolicVector
            }
            ElementType::MatrixRowFloat | ElementType::MatrixRowDouble => Family::MatrixRowMajor,
            ElementType::MatrixColFloat | ElementType::MatrixColDouble => Family::MatrixColMajor,
            ElementType::SymbolicMatrixFloat | ElementType::SymbolicMatrixDouble => {
                Family::SymbolicMatrix
            }
            ElementType::CompositeOperation => Family::CompositeOperation,
            ElementType::Invalid => Family::Invalid,
        }
    }

    /// Numeric representation, if the element holds numbers.
    pub fn numeric(self) -> Option<NumericKind> {
        match self {
            ElementType::HostScalarFloat
            | ElementType::ScalarFloat
            | ElementType::VectorFloat
            | ElementType::SymbolicVectorFloat
            | ElementType::MatrixRowFloat
            | ElementType::MatrixColFloat
            | ElementType::SymbolicMatrixFloat => Some(NumericKind::Float),
            ElementType::HostScalarDouble
            | ElementType::ScalarDouble
            | ElementType::VectorDouble
            | ElementType::SymbolicVectorDouble
            | ElementType::MatrixRowDouble
            | ElementType::MatrixColDouble
            | ElementType::SymbolicMatrixDouble => Some(NumericKind::Double),
            ElementType::CompositeOperation | ElementType::Invalid => None,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.numeric() {
            Some(NumericKind::Float) => write!(f, "{}<f32>", self.family()),
            Some(NumericKind::Double) => write!(f, "{}<f64>", self.family()),
            None => write!(f, "{}", self.family()),
        }
    }
}

/// One operand payload, selected by its element type.
///
/// Host scalars are held by value. Every other payload is a borrow of a
/// resource owned elsewhere, so an element can never outlive what it points at.
#[derive(Debug, Clone, Copy)]
pub enum TaggedElement<'a> {
    HostFloat(f32),
    HostDouble(f64),
    ScalarFloat(&'a Scalar<f32>),
    ScalarDouble(&'a Scalar<f64>),
    VectorFloat(&'a Vector<f32>),
    VectorDouble(&'a Vector<f64>),
    SymbolicVectorFloat(&'a SymbolicVector<f32>),
    SymbolicVectorDouble(&'a SymbolicVector<f64>),
    MatrixRowFloat(&'a Matrix<f32, RowMajor>),
    MatrixRowDouble(&'a Matrix<f64, RowMajor>),
    MatrixColFloat(&'a Matrix<f32, ColumnMajor>),
    MatrixColDouble(&'a Matrix<f64, ColumnMajor>),
    SymbolicMatrixFloat(&'a SymbolicMatrix<f32>),
    SymbolicMatrixDouble(&'a SymbolicMatrix<f64>),
}

impl TaggedElement<'_> {
    /// Element type matching the held payload.
    pub fn element_type(&self) -> ElementType {
        match self {
            TaggedElement::HostFloat(_) => ElementType::HostScalarFloat,
            TaggedElement::HostDouble(_) => ElementType::HostScalarDouble,
            TaggedElement::ScalarFloat(_) => ElementType::ScalarFloat,
            TaggedElement::ScalarDouble(_) => ElementType::ScalarDouble,
            TaggedElement::VectorFloat(_) => ElementType::VectorFloat,
            TaggedElement::VectorDouble(_) => ElementType::VectorDouble,
            TaggedElement::SymbolicVectorFloat(_) => ElementType::SymbolicVectorFloat,
            TaggedElement::SymbolicVectorDouble(_) => ElementType::SymbolicVectorDouble,
            TaggedElement::MatrixRowFloat(_) => ElementType::MatrixRowFloat,
            TaggedElement::MatrixRowDouble(_) => ElementType::MatrixRowDouble,
            TaggedElement::MatrixColFloat(_) => ElementType::MatrixColFloat,
            TaggedElement::MatrixColDouble(_) => ElementType::MatrixColDouble,
            TaggedElement::SymbolicMatrixFloat(_) => ElementType::SymbolicMatrixFloat,
            TaggedElement::SymbolicMatrixDouble(_) => ElementType::SymbolicMatrixDouble,
        }
    }

    /// Family matching the held payload.
    pub fn family(&self) -> Family {
        self.element_type().family()
    }
}

macro_rules! impl_from_payload {
    ($($variant:ident => $payload:ty),* $(,)?) => {
        $(
            impl<'a> From<&'a $payload> for TaggedElement<'a> {
                fn from(payload: &'a $payload) -> Self {
                    TaggedElement::$variant(payload)
                }
            }
        )*
    };
}

impl From<f32> for TaggedElement<'_> {
    fn from(value: f32) -> Self {
        TaggedElement::HostFloat(value)
    }
}

impl From<f64> for TaggedElement<'_> {
    fn from(value: f64) -> Self {
        TaggedElement::HostDouble(value)
    }
}

impl_from_payload! {
    ScalarFloat => Scalar<f32>,
    ScalarDouble => Scalar<f64>,
    VectorFloat => Vector<f32>,
    VectorDouble => Vector<f64>,
    SymbolicVectorFloat => SymbolicVector<f32>,
    SymbolicVectorDouble => SymbolicVector<f64>,
    MatrixRowFloat => Matrix<f32, RowMajor>,
    MatrixRowDouble => Matrix<f64, RowMajor>,
    MatrixColFloat => Matrix<f32, ColumnMajor>,
    MatrixColDouble => Matrix<f64, ColumnMajor>,
    SymbolicMatrixFloat => SymbolicMatrix<f32>,
    SymbolicMatrixDouble => SymbolicMatrix<f64>,
}
