//! In-place construction of named elements
//!
//! The point of keeping categories intact across a wrapper is what the
//! receiving end can then do with them. `Store::emplace_pair` is that
//! receiving end: it builds an element directly in its slot from a pair
//! of forwarded arguments, with no intermediate temporary of the element
//! type. The builder sees the original categories, so a persistent input
//! is cloned into the construction while a disposable one is moved.

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::arg::Arg;
use crate::error::{Result, StoreError};
use crate::forward::forward;

/// An insertion-ordered store of named, in-place constructed elements.
///
/// # Example
///
/// ```
/// use handoff::Store;
///
/// let mut store = Store::new();
/// assert!(store.emplace("greeting", || String::from("ala")).is_ok());
/// assert_eq!(store.get("greeting"), Some(&String::from("ala")));
/// ```
#[derive(Debug, Clone)]
pub struct Store<T> {
    /// Slots in construction order
    slots: IndexMap<String, T>,
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Store<T> {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            slots: IndexMap::new(),
        }
    }

    /// Construct an element directly in the slot `name`.
    ///
    /// The builder runs only if the slot is free, so no element is built
    /// and thrown away on the error path.
    ///
    /// # Errors
    ///
    /// `Occupied` if an element with this name already exists.
    pub fn emplace<F>(&mut self, name: impl Into<String>, build: F) -> Result<&mut T>
    where
        F: FnOnce() -> T,
    {
        match self.slots.entry(name.into()) {
            Entry::Occupied(entry) => Err(StoreError::Occupied {
                name: entry.key().clone(),
            }),
            Entry::Vacant(slot) => Ok(slot.insert(build())),
        }
    }

    /// Construct an element in place from a forwarded pair of arguments.
    ///
    /// Both arguments reach the builder with their call-site categories
    /// intact; the usual builder clones what the caller keeps and moves
    /// what the caller handed over.
    ///
    /// # Errors
    ///
    /// `Occupied` if an element with this name already exists.
    pub fn emplace_pair<'a, 'b, A, B, F>(
        &mut self,
        name: impl Into<String>,
        first: Arg<'a, A>,
        second: Arg<'b, B>,
        build: F,
    ) -> Result<&mut T>
    where
        F: FnOnce(Arg<'a, A>, Arg<'b, B>) -> T,
    {
        match self.slots.entry(name.into()) {
            Entry::Occupied(entry) => Err(StoreError::Occupied {
                name: entry.key().clone(),
            }),
            Entry::Vacant(slot) => Ok(slot.insert(build(forward(first), forward(second)))),
        }
    }

    /// Look up an element by name.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.slots.get(name)
    }

    /// Look up a mutable reference to an element.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        self.slots.get_mut(name)
    }

    /// Check if an element exists.
    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Move an element out of the store, preserving the order of the rest.
    ///
    /// # Errors
    ///
    /// `Missing` if no element with this name exists.
    pub fn take(&mut self, name: &str) -> Result<T> {
        self.slots
            .shift_remove(name)
            .ok_or_else(|| StoreError::Missing {
                name: name.to_string(),
            })
    }

    /// All element names in construction order.
    pub fn names(&self) -> Vec<&str> {
        self.slots.keys().map(String::as_str).collect()
    }

    /// Iterate over `(name, element)` pairs in construction order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.slots.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Get the number of elements.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
