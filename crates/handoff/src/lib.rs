//! # Handoff
//!
//! Argument forwarding that preserves the call-site value category.
//!
//! A wrapper that delegates to an inner function usually loses what the
//! original call site knew: whether an argument was a named variable the
//! caller still holds, or a temporary the receiver is free to consume.
//! Passing by value copies and disconnects mutation from the caller;
//! passing by reference rejects temporaries; writing one overload per
//! combination scales as 2^n. Handoff instead makes the distinction an
//! explicit part of the argument itself, so a wrapper can hand its
//! parameters on and the receiver cannot tell the difference from a
//! direct call.
//!
//! ## Architecture
//!
//! - **Category**: persistent vs. disposable, and the collapsing rule
//! - **Arg**: the ownership-transfer wrapper built at the call site
//! - **Forwarding**: `forward`, the fixed entry points, and the
//!   pass-through wrappers
//! - **Conventions**: compile-time passing modes for receivers that fix
//!   their mode up front
//! - **Store**: in-place construction of named elements from forwarded
//!   arguments

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod arg;
pub mod category;
pub mod convention;
pub mod error;
pub mod forward;
pub mod sink;
pub mod store;

// Re-export main types
pub use arg::Arg;
pub use category::Category;
pub use convention::{Give, Lend, PassBy, Passing, Receiver};
pub use error::{Result, StoreError};
pub use forward::{forward, forward_borrowed, forward_owned, pass, pass_pair};
pub use sink::{print_pair, render_pair, write_pair};
pub use store::Store;

/// Handoff version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
