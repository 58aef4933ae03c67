// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MIT

use crate::{Error, parse::Endpoint};
use range_masks::{RuleSet, Selection};
use std::{fmt, io::Write, net::Ipv4Addr};

/// how addresses get printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    Decimal,
    Ipv4,
}

impl Notation {
    /// use ipv4 notation if either end was written as an address
    pub const fn pick(start: &Endpoint, end: &Endpoint) -> Self {
        if start.is_ipv4() || end.is_ipv4() {
            Self::Ipv4
        } else {
            Self::Decimal
        }
    }

    const fn addr(self, value: u32) -> Addr {
        Addr {
            value,
            notation: self,
        }
    }
}

struct Addr {
    value: u32,
    notation: Notation,
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.notation {
            Notation::Decimal => write!(f, "{}", self.value),
            Notation::Ipv4 => write!(f, "{}", Ipv4Addr::from(self.value)),
        }
    }
}

pub fn write_rules(out: &mut impl Write, rules: &RuleSet, notation: Notation) -> Result<(), Error> {
    for entry in rules {
        writeln!(
            out,
            "patt: {:08x}  ({} - {})",
            entry.pattern(),
            notation.addr(entry.bottom()),
            notation.addr(entry.top())
        )?;
        writeln!(out, "mask: {:08x}", entry.mask())?;
        if notation == Notation::Ipv4 {
            writeln!(
                out,
                "cidr: {}/{}",
                Ipv4Addr::from(entry.pattern()),
                entry.prefix_len()?
            )?;
        }
    }
    Ok(())
}

pub fn write_selection(
    out: &mut impl Write,
    selection: &Selection,
    start: u32,
    end: u32,
    notation: Notation,
) -> Result<(), Error> {
    match selection {
        Selection::Direct(rules) => write_rules(out, rules, notation),
        Selection::Split { reject, accept } => {
            writeln!(
                out,
                "Reject: {} - {}",
                notation.addr(0),
                notation.addr(start.saturating_sub(1))
            )?;
            write_rules(out, reject, notation)?;
            writeln!(out, "Accept: {} - {}", notation.addr(0), notation.addr(end))?;
            write_rules(out, accept, notation)
        }
    }
}
