//! Error types for handoff operations
//!
//! Forwarding itself has no failure path: whether an argument may be
//! aliased or moved is settled by the types, not at runtime. Errors only
//! arise around the named-slot store.

use thiserror::Error;

/// Errors from named-slot store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A slot with this name has already been constructed.
    #[error("slot `{name}` is already occupied")]
    Occupied {
        /// The contested slot name
        name: String,
    },

    /// No slot with this name exists.
    #[error("no slot named `{name}`")]
    Missing {
        /// The requested slot name
        name: String,
    },
}

/// Result type alias for handoff operations
pub type Result<T> = std::result::Result<T, StoreError>;
