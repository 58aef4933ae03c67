// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MIT

//! turn integer ranges into tcam pattern/mask entries
//!
//! a ternary match table compares `addr & mask` against `pattern & mask`,
//! so every entry can only match an aligned power-of-two block. this crate
//! finds the fewest such blocks that cover a range exactly.

mod convert;
mod entry;
mod select;

pub use convert::convert;
pub use entry::{Entry, RuleSet};
pub use select::{Selection, select};

#[derive(Debug, Clone, Copy, PartialEq, Eq, foxerror::FoxError)]
pub enum Error {
    /// range ends at the top of the address space but does not start at 0
    RangeTooLarge,
    /// range needs more entries than a rule can hold
    CapacityExceeded,
    /// mask is not a contiguous prefix
    NotAPrefix,
    /// range starts after it ends
    InvertedRange,
}
