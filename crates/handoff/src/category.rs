//! Value categories and the collapsing rule

use std::fmt;

/// The call-site category of an argument.
///
/// Every argument is one or the other: either the caller keeps a durable
/// handle to it, or the call site was its last observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A named argument the caller can still observe after the call.
    ///
    /// Safe to alias repeatedly; must not be treated as movable.
    Persistent,

    /// A temporary argument with no caller-retained handle.
    ///
    /// The receiver may assume exclusive, movable ownership.
    Disposable,
}

impl Category {
    /// Collapse an outer position over an inner category.
    ///
    /// When a forwarding layer re-exposes an argument, its own position
    /// (does it own the wrapper, or only borrow it?) composes with the
    /// category the wrapper already carries. Persistent dominates: only
    /// disposable over disposable stays disposable.
    pub fn collapse(outer: Category, inner: Category) -> Category {
        match (outer, inner) {
            (Category::Disposable, Category::Disposable) => Category::Disposable,
            _ => Category::Persistent,
        }
    }

    /// Whether a receiver may take ownership of the underlying value.
    pub fn is_movable(self) -> bool {
        matches!(self, Category::Disposable)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Persistent => write!(f, "persistent"),
            Category::Disposable => write!(f, "disposable"),
        }
    }
}
