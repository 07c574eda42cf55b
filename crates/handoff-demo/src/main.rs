//! Fixed demonstration of category-preserving forwarding.
//!
//! Runs a hardcoded sequence of forwarded calls and writes each resulting
//! pair to stdout, one line per call. No flags, no environment, no files.

use std::io::{self, Write};

use anyhow::{Context, Result};
use handoff::{arg, forward_borrowed, forward_owned, pass_pair, write_pair};

fn main() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // A named pair: the caller keeps both handles afterwards.
    let mut vv: i64 = 100;
    let mut ss = String::from("ala");
    pass_pair(arg!(&mut vv), arg!(&mut ss), |a, b| {
        write_pair(&mut out, &a, &b)
    })
    .context("writing named pair")?;

    // A temporary pair: nothing survives the call.
    pass_pair(arg!(10_i64), arg!(String::from("ala")), |a, b| {
        write_pair(&mut out, &a, &b)
    })
    .context("writing temporary pair")?;

    // A mixed pair through the explicit entry points: one argument stays
    // with the caller, the other is handed over.
    pass_pair(
        forward_borrowed(&mut vv),
        forward_owned(String::from("ala")),
        |a, b| write_pair(&mut out, &a, &b),
    )
    .context("writing mixed pair")?;

    // Temporaries through the explicit entry points.
    pass_pair(
        forward_owned(10_i64),
        forward_owned(String::from("ala")),
        |a, b| write_pair(&mut out, &a, &b),
    )
    .context("writing second temporary pair")?;

    out.flush().context("flushing stdout")?;
    Ok(())
}
