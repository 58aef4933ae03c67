// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MIT

use argh::{FromArgs, from_env};
use range_masks::Selection;
use std::io::Write;

mod parse;
mod render;

/// turn a range of numbers or ipv4 addresses into tcam entries
#[derive(Debug, FromArgs)]
#[argh(help_triggers("-h", "--help"))]
struct Opt {
    /// also try rejecting below the start and accepting up to the end
    #[argh(switch, short = 'o')]
    optimize: bool,
    /// print the number of entries used
    #[argh(switch, short = 'c')]
    count: bool,
    #[argh(positional)]
    start: parse::Endpoint,
    #[argh(positional)]
    end: parse::Endpoint,
}

#[derive(Debug, foxerror::FoxError)]
enum Error {
    /// io error
    #[err(from)]
    Io(std::io::Error),
    /// could not convert range
    #[err(from)]
    Range(range_masks::Error),
}

fn main() -> Result<(), Error> {
    let opt: Opt = from_env();
    let notation = render::Notation::pick(&opt.start, &opt.end);
    let (start, end) = (opt.start.value(), opt.end.value());

    let selection = if opt.optimize {
        range_masks::select(start, end)?
    } else {
        Selection::Direct(range_masks::convert(start, end)?)
    };

    let mut out = std::io::stdout().lock();
    render::write_selection(&mut out, &selection, start, end, notation)?;
    if opt.count {
        writeln!(out, "entries: {}", selection.len())?;
    }

    Ok(())
}
