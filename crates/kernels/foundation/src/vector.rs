//! Dense device vectors and scalars.

use std::sync::Arc;

use crate::ids::BufferId;

/// Dense vector resident in device memory.
///
/// Clones share the buffer and its handle.
#[derive(Clone, Debug)]
pub struct Vector<T> {
    id: BufferId,
    data: Arc<[T]>,
}

impl<T> Vector<T> {
    /// Wrap an existing buffer.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            id: BufferId::next(),
            data: data.into(),
        }
    }

    /// Handle of the underlying buffer.
    pub fn id(&self) -> BufferId {
        self.id
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the vector has no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw storage.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Copy> Vector<T> {
    /// Create a vector of `len` copies of `value`.
    pub fn filled(len: usize, value: T) -> Self {
        Self::from_vec(vec![value; len])
    }

    /// Create a vector by copying a slice.
    pub fn from_slice(data: &[T]) -> Self {
        Self::from_vec(data.to_vec())
    }
}

/// Single value resident in device memory.
#[derive(Clone, Debug)]
pub struct Scalar<T> {
    id: BufferId,
    value: Arc<T>,
}

impl<T> Scalar<T> {
    /// Allocate a device scalar holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            id: BufferId::next(),
            value: Arc::new(value),
        }
    }

    /// Handle of the underlying buffer.
    pub fn id(&self) -> BufferId {
        self.id
    }
}

impl<T: Copy> Scalar<T> {
    /// Current value.
    pub fn value(&self) -> T {
        *self.value
    }
}
