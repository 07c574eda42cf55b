//! Demonstration sink rendering forwarded pairs
//!
//! The terminal consumer of a forwarded pair: formats both values as one
//! space-separated line. Receivers that want to mutate or take arguments
//! are ordinary closures over [`Arg`]; this module only covers the
//! read-and-print case.

use std::fmt::Display;
use std::io::{self, Write};

use crate::arg::Arg;

/// Render a forwarded pair as `"{first} {second}"`.
pub fn render_pair<A, B>(first: &Arg<'_, A>, second: &Arg<'_, B>) -> String
where
    A: Display,
    B: Display,
{
    format!("{} {}", first, second)
}

/// Write a forwarded pair to `out` as one line.
pub fn write_pair<W, A, B>(out: &mut W, first: &Arg<'_, A>, second: &Arg<'_, B>) -> io::Result<()>
where
    W: Write,
    A: Display,
    B: Display,
{
    writeln!(out, "{} {}", first, second)
}

/// Write a forwarded pair to stdout as one line.
pub fn print_pair<A, B>(first: Arg<'_, A>, second: Arg<'_, B>) -> io::Result<()>
where
    A: Display,
    B: Display,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_pair(&mut out, &first, &second)
}
