// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Continuity checking for day selections.
//!
//! A selection is contiguous when the selected days form one unbroken arc on
//! the 7-day cycle, allowing wrap past Saturday into Sunday (e.g.
//! Friday-Saturday-Sunday-Monday).
//!
//! ## Invariants
//!
//! - Empty and single-day selections are trivially contiguous
//! - A wrap-around selection is contiguous iff the unselected days form a
//!   single gap-free block; the complement test is the single source of truth
//!   for the wrap case

use crate::types::{DAYS_PER_WEEK, DayIndex, DaySelection};

/// Checks whether the selected days form one contiguous arc.
///
/// Sorted ascending, the selection is first checked for internal gaps. If a
/// gap exists, the selection can still be contiguous by wrapping the week
/// boundary: that holds exactly when the complement (the unselected days) is
/// itself gap-free.
///
/// # Arguments
///
/// * `selection` - The selection to check
#[must_use]
pub fn is_contiguous(selection: &DaySelection) -> bool {
    if selection.len() <= 1 {
        return true;
    }

    // With at most one unselected day there is nothing left to split the arc.
    if selection.len() >= usize::from(DAYS_PER_WEEK - 1) {
        return true;
    }

    if is_gap_free(selection.days()) {
        return true;
    }

    is_gap_free(selection.complement().days())
}

/// Checks that consecutive sorted days differ by exactly 1 throughout.
fn is_gap_free(days: &[DayIndex]) -> bool {
    days.windows(2)
        .all(|pair| pair[1].value() == pair[0].value() + 1)
}
