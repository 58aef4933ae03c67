// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MIT

use crate::Error;
use std::fmt;

/// a single pattern/mask pair
///
/// set bits in the mask must match the pattern, unset bits are wildcards.
/// masks produced by [`crate::convert`] are always a run of ones followed
/// by a run of zeros, so the entry covers an aligned block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entry {
    pattern: u32,
    mask: u32,
}

impl Entry {
    #[must_use]
    pub const fn new(pattern: u32, mask: u32) -> Self {
        Self { pattern, mask }
    }

    #[must_use]
    pub const fn pattern(&self) -> u32 {
        self.pattern
    }

    #[must_use]
    pub const fn mask(&self) -> u32 {
        self.mask
    }

    /// lowest address matched
    #[must_use]
    pub const fn bottom(&self) -> u32 {
        self.pattern
    }

    /// highest address matched, with every wildcard bit forced on
    #[must_use]
    pub const fn top(&self) -> u32 {
        self.pattern | (!self.pattern & !self.mask)
    }

    /// number of addresses matched
    #[must_use]
    pub const fn size(&self) -> u64 {
        1u64 << self.mask.count_zeros()
    }

    #[must_use]
    pub const fn contains(&self, addr: u32) -> bool {
        addr & self.mask == self.pattern & self.mask
    }

    /// length of the mask when written as a cidr prefix
    ///
    /// # Errors
    ///
    /// fails with [`Error::NotAPrefix`] if the set bits of the mask are not
    /// all at the top.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn prefix_len(&self) -> Result<u8, Error> {
        let wild = !self.mask;
        if wild & wild.wrapping_add(1) != 0 {
            return Err(Error::NotAPrefix);
        }
        Ok(self.mask.leading_ones() as u8)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}/{:08x}", self.pattern, self.mask)
    }
}

/// the entries for one range, from the top of the range downwards
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    entries: Vec<Entry>,
}

impl RuleSet {
    /// most entries a single rule may hold
    pub const CAPACITY: usize = 32;

    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::with_capacity(Self::CAPACITY),
        }
    }

    pub(crate) fn push(&mut self, entry: Entry) -> Result<(), Error> {
        if self.entries.len() >= Self::CAPACITY {
            return Err(Error::CapacityExceeded);
        }
        self.entries.push(entry);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Entry] {
        &self.entries
    }

    /// check if any entry matches an address
    #[must_use]
    pub fn matches(&self, addr: u32) -> bool {
        self.entries.iter().any(|e| e.contains(addr))
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Entry, Error, RuleSet};

    #[test]
    fn entry_block() {
        let e = Entry::new(8, !0 << 1);
        assert_eq!((e.bottom(), e.top()), (8, 9));
        assert_eq!(e.size(), 2);
        assert!(e.contains(9));
        assert!(!e.contains(10));

        let all = Entry::new(0, 0);
        assert_eq!(all.top(), u32::MAX);
        assert_eq!(all.size(), 1u64 << 32);
        assert!(all.contains(0xdead_beef));
    }

    #[test]
    fn prefix_len() {
        assert_eq!(Entry::new(0, 0).prefix_len(), Ok(0));
        assert_eq!(Entry::new(5, !0).prefix_len(), Ok(32));
        assert_eq!(Entry::new(0x0a00_0000, 0xffff_ff00).prefix_len(), Ok(24));
        assert_eq!(
            Entry::new(0, 0xff00_ff00).prefix_len(),
            Err(Error::NotAPrefix)
        );
        assert_eq!(Entry::new(0, 0x7fff_ffff).prefix_len(), Err(Error::NotAPrefix));
    }

    #[test]
    fn capacity() {
        let mut rules = RuleSet::new();
        for n in 0..32 {
            rules.push(Entry::new(n, !0)).unwrap();
        }
        assert_eq!(rules.push(Entry::new(32, !0)), Err(Error::CapacityExceeded));
        assert_eq!(rules.len(), RuleSet::CAPACITY);
        assert!(rules.matches(31));
        assert!(!rules.matches(32));
    }

    #[test]
    fn display() {
        assert_eq!(Entry::new(6, !0 << 1).to_string(), "00000006/fffffffe");
    }
}
