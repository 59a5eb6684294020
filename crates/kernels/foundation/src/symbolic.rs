//! Symbolic placeholders for containers that are not bound yet.
//!
//! A symbolic container stands for a formal parameter of a reusable kernel
//! template. It has a numeric type (and, for matrices, a layout) but no
//! storage and no extents.

use std::marker::PhantomData;

use crate::ids::ParamId;
use crate::layout::MatrixLayout;

/// Placeholder for a vector parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolicVector<T> {
    param: ParamId,
    scalar: PhantomData<fn() -> T>,
}

impl<T> SymbolicVector<T> {
    /// Placeholder bound to parameter slot `param`.
    pub const fn new(param: ParamId) -> Self {
        Self {
            param,
            scalar: PhantomData,
        }
    }

    /// Parameter slot this placeholder occupies.
    pub fn param(&self) -> ParamId {
        self.param
    }
}

/// Placeholder for a matrix parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolicMatrix<T> {
    param: ParamId,
    layout: MatrixLayout,
    scalar: PhantomData<fn() -> T>,
}

impl<T> SymbolicMatrix<T> {
    /// Placeholder bound to parameter slot `param` with the given layout.
    pub const fn new(param: ParamId, layout: MatrixLayout) -> Self {
        Self {
            param,
            layout,
            scalar: PhantomData,
        }
    }

    /// Parameter slot this placeholder occupies.
    pub fn param(&self) -> ParamId {
        self.param
    }

    /// Layout the bound matrix is expected to have.
    pub fn layout(&self) -> MatrixLayout {
        self.layout
    }
}
