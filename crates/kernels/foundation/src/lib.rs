//! lagen Foundation
//!
//! Operand-side types for the lagen kernel generator: buffer handles, matrix
//! layouts, the device and symbolic containers that expressions refer to, and
//! the element tags plus [`TaggedElement`] union that carry them through an
//! expression node.
//!
//! Nothing in this crate generates code. The dispatch and emission layer
//! lives in `lagen-codegen`.

pub mod element;
pub mod ids;
pub mod layout;
pub mod matrix;
pub mod symbolic;
pub mod vector;

pub use element::{ElementType, Family, NumericKind, TaggedElement};
pub use ids::{BufferId, ParamId};
pub use layout::{ColumnMajor, Layout, MatrixLayout, RowMajor};
pub use matrix::Matrix;
pub use symbolic::{SymbolicMatrix, SymbolicVector};
pub use vector::{Scalar, Vector};
