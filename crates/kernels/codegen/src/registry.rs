//! Compile-time type registry.
//!
//! Associates each supported numeric or layout type with the strings used
//! to spell it in generated source: a display name (`float`, `double`) and a
//! single disambiguating character used when composing kernel names. Adding
//! a supported type means adding one impl per trait here.
//!
//! | Type          | `TypeName::NAME` | `TypeChar::CHAR` |
//! |---------------|------------------|------------------|
//! | `f32`         | `float`          | `f`              |
//! | `f64`         | `double`         | `d`              |
//! | `RowMajor`    |                  | `r`              |
//! | `ColumnMajor` |                  | `c`              |

use std::any::TypeId;
use std::fmt::Debug;

use lagen_foundation::{ColumnMajor, Layout, MatrixLayout, NumericKind, RowMajor};

/// Name of a numeric type in generated source.
pub trait TypeName: 'static {
    const NAME: &'static str;
}

/// Character identifying a numeric or layout type inside generated names.
pub trait TypeChar: 'static {
    const CHAR: char;
}

/// Numeric element types the dispatch core hands to operations.
pub trait Numeric: TypeName + TypeChar + Copy + Debug + Send + Sync + Into<f64> {
    /// Runtime mirror of this type.
    const KIND: NumericKind;
}

/// Layout markers the dispatch core hands to matrix operations.
pub trait LayoutTag: Layout + TypeChar {}

impl<L: Layout + TypeChar> LayoutTag for L {}

impl TypeName for f32 {
    const NAME: &'static str = "float";
}

impl TypeName for f64 {
    const NAME: &'static str = "double";
}

impl TypeChar for f32 {
    const CHAR: char = 'f';
}

impl TypeChar for f64 {
    const CHAR: char = 'd';
}

impl TypeChar for RowMajor {
    const CHAR: char = 'r';
}

impl TypeChar for ColumnMajor {
    const CHAR: char = 'c';
}

impl Numeric for f32 {
    const KIND: NumericKind = NumericKind::Float;
}

impl Numeric for f64 {
    const KIND: NumericKind = NumericKind::Double;
}

/// Display name of `T`.
pub fn type_name<T: TypeName>() -> &'static str {
    T::NAME
}

/// Disambiguating character of `T`.
pub fn type_tag_char<T: TypeChar>() -> char {
    T::CHAR
}

/// True iff `T` and `U` are the same type.
pub fn is_same_type<T: ?Sized + 'static, U: ?Sized + 'static>() -> bool {
    TypeId::of::<T>() == TypeId::of::<U>()
}

/// Registry lookups for tags only known at runtime.
pub trait RuntimeTypeTag: Copy {
    /// Character the registry assigns to the corresponding type.
    fn tag_char(self) -> char;
}

impl RuntimeTypeTag for NumericKind {
    fn tag_char(self) -> char {
        match self {
            NumericKind::Float => type_tag_char::<f32>(),
            NumericKind::Double => type_tag_char::<f64>(),
        }
    }
}

impl RuntimeTypeTag for MatrixLayout {
    fn tag_char(self) -> char {
        match self {
            MatrixLayout::RowMajor => type_tag_char::<RowMajor>(),
            MatrixLayout::ColumnMajor => type_tag_char::<ColumnMajor>(),
        }
    }
}

/// Display name of a runtime numeric kind.
pub fn numeric_kind_name(kind: NumericKind) -> &'static str {
    match kind {
        NumericKind::Float => type_name::<f32>(),
        NumericKind::Double => type_name::<f64>(),
    }
}
