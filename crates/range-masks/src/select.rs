// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MIT

use crate::{Error, RuleSet, convert};

/// the cheaper way of matching a range
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// accept the range itself
    Direct(RuleSet),
    /// deny everything below the range, then accept everything up to its end
    ///
    /// `reject` has to be matched before `accept` for this to work.
    Split { reject: RuleSet, accept: RuleSet },
}

impl Selection {
    /// total number of entries needed
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Direct(rules) => rules.len(),
            Self::Split { reject, accept } => reject.len() + accept.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// pick whichever of a direct or split rule uses fewer entries
///
/// a tie goes to the direct rule.
///
/// # Errors
///
/// anything [`convert`] fails with for `start..=end`
pub fn select(start: u32, end: u32) -> Result<Selection, Error> {
    let direct = convert(start, end)?;
    let Some(below) = start.checked_sub(1) else {
        return Ok(Selection::Direct(direct));
    };

    let reject = convert(0, below)?;
    let accept = convert(0, end)?;
    if reject.len() + accept.len() < direct.len() {
        Ok(Selection::Split { reject, accept })
    } else {
        Ok(Selection::Direct(direct))
    }
}
