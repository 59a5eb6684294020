//! lagen Codegen
//!
//! Dispatch and emission layer of the lagen kernel generator.
//!
//! Expression nodes describe each operand with a [`Family`], an
//! [`ElementType`] and a [`TaggedElement`] payload. This crate turns those
//! tags back into concrete types:
//!
//! - [`registry`] maps numeric and layout types to their spelling in
//!   generated source.
//! - [`dispatch`] routes a tagged element to a generic operation with the
//!   concrete payload, or reports why it cannot.
//! - [`introspect`] answers size and type queries through the dispatch core.
//! - [`naming`] derives kernel identifiers from operand tags.
//! - [`stream`] collects kernel source with automatic indentation.
//!
//! [`Family`]: lagen_foundation::Family
//! [`ElementType`]: lagen_foundation::ElementType
//! [`TaggedElement`]: lagen_foundation::TaggedElement

pub mod config;
pub mod dispatch;
pub mod error;
pub mod introspect;
pub mod naming;
pub mod registry;
pub mod stream;

pub use config::StreamConfig;
pub use dispatch::{
    ElementOp, HostScalarOp, MatrixOp, Operation, ScalarOp, SymbolicMatrixOp, SymbolicVectorOp,
    VectorOp, dispatch, dispatch_family, dispatch_host_scalar, dispatch_matrix, dispatch_scalar,
    dispatch_symbolic_matrix, dispatch_symbolic_vector, dispatch_vector,
};
pub use error::{ConfigError, DispatchError, Result};
pub use introspect::{
    ColumnCount, ElementCount, NumericTypeName, RowCount, column_count, element_count,
    numeric_type_name, row_count,
};
pub use naming::{KernelName, OperandCode};
pub use registry::{
    LayoutTag, Numeric, RuntimeTypeTag, TypeChar, TypeName, is_same_type, numeric_kind_name,
    type_name, type_tag_char,
};
pub use stream::KernelStream;
