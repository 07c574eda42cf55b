//! Category-preserving forwarding
//!
//! A wrapper function receives every argument as a named parameter, so a
//! naive delegation would flatten temporaries and named variables into
//! the same thing. The functions here keep the two apart: the call site
//! records the category once (see [`crate::arg!`] and the fixed entry
//! points below), and from then on every hop moves the wrapper itself.
//! Moving is the disposable position, and disposable over an inner
//! category leaves that category unchanged, so what the sink finally
//! receives is indistinguishable from a direct call. The persistent rows
//! of the collapsing rule live on [`Arg::reborrow`].

use crate::arg::Arg;

/// Pass an argument on with its call-site category intact.
///
/// Consumes the wrapper, which is exactly why the category survives: an
/// owned wrapper is the disposable outer position, and collapsing any
/// inner category under it is the identity. Forwarding is therefore also
/// idempotent.
///
/// # Example
///
/// ```
/// use handoff::{forward, Arg, Category};
///
/// let twice = forward(forward(Arg::owned(5)));
/// assert_eq!(twice.category(), Category::Disposable);
/// ```
pub fn forward<T>(arg: Arg<'_, T>) -> Arg<'_, T> {
    arg
}

/// Entry point for a value the caller hands over.
pub fn forward_owned<'a, T>(value: T) -> Arg<'a, T> {
    Arg::owned(value)
}

/// Entry point for a variable the caller keeps.
pub fn forward_borrowed<T>(slot: &mut T) -> Arg<'_, T> {
    Arg::borrowed(slot)
}

/// Delegate one argument to a sink, category preserved.
pub fn pass<'a, T, R, F>(arg: Arg<'a, T>, sink: F) -> R
where
    F: FnOnce(Arg<'a, T>) -> R,
{
    sink(forward(arg))
}

/// Delegate a pair of arguments to a sink, each category preserved.
///
/// This is the correct shape for a two-parameter wrapper: generic over
/// both payload types, forwarding each argument independently, so mixed
/// pairs work without one overload per combination.
///
/// # Example
///
/// ```
/// use handoff::{arg, pass_pair, render_pair};
///
/// let mut count = 100;
/// let line = pass_pair(arg!(&mut count), arg!(String::from("ala")), |a, b| {
///     render_pair(&a, &b)
/// });
/// assert_eq!(line, "100 ala");
/// assert_eq!(count, 100);
/// ```
pub fn pass_pair<'a, 'b, A, B, R, F>(first: Arg<'a, A>, second: Arg<'b, B>, sink: F) -> R
where
    F: FnOnce(Arg<'a, A>, Arg<'b, B>) -> R,
{
    sink(forward(first), forward(second))
}
