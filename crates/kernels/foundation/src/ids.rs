//! Handle identifiers for device resources and kernel parameters.
//!
//! Containers are referred to by typed numeric handles rather than by
//! address, so that tagged elements, generated names and logs can all talk
//! about the same resource without owning it.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u64);

        impl $name {
            /// Creates an identifier from a raw value.
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Returns the raw value.
            pub const fn raw(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }
    };
}

define_id!(
    /// Handle of a device-side buffer (scalar, vector or matrix storage).
    BufferId,
    "buf"
);

define_id!(
    /// Formal parameter slot of a symbolic (not yet bound) container.
    ParamId,
    "param"
);

static NEXT_BUFFER: AtomicU64 = AtomicU64::new(1);

impl BufferId {
    /// Allocates a process-unique buffer handle.
    pub fn next() -> Self {
        Self(NEXT_BUFFER.fetch_add(1, Ordering::Relaxed))
    }
}
