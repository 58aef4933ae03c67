// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MIT

use crate::{Entry, Error, RuleSet};

/// find the entries matching exactly the addresses in `st..=end`
///
/// works downwards from `end`, each time taking the largest aligned block
/// whose top is the current address, shrunk until it no longer reaches
/// below `st`.
///
/// # Errors
///
/// - [`Error::InvertedRange`] if `st > end`
/// - [`Error::RangeTooLarge`] if `end` is [`u32::MAX`] and `st` is not 0
/// - [`Error::CapacityExceeded`] if more than [`RuleSet::CAPACITY`]
///   entries would be needed
pub fn convert(st: u32, end: u32) -> Result<RuleSet, Error> {
    if st > end {
        return Err(Error::InvertedRange);
    }
    if end == u32::MAX && st != 0 {
        return Err(Error::RangeTooLarge);
    }

    let mut rules = RuleSet::new();
    let mut patt = end;
    while patt >= st {
        let mut mask = u32::MAX;
        let mut i = 1u32;

        // clear the trailing ones, growing the block they span
        while i & patt != 0 {
            patt ^= i;
            i <<= 1;
            mask <<= 1;
        }

        // halve the block until it stops undershooting
        while patt < st {
            i >>= 1;
            patt |= i;
            mask |= i;
        }

        rules.push(Entry::new(patt, mask))?;

        // nothing is below 0, and subtracting would wrap around
        if patt == 0 {
            break;
        }
        patt -= 1;
    }

    Ok(rules)
}
