// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Check-in/check-out derivation.
//!
//! The derived pair is recomputed whenever the selection changes and is never
//! stored independently of it. Derivation is total for non-empty input:
//! contiguity is NOT required, and a gapped selection degrades to
//! first/last-in-sorted-order semantics so the caller may skip validation.
//!
//! ## Invariants
//!
//! - Check-out is the successor of the last night (one day past the last
//!   selected day), including in the wrap-around branch
//! - A wrap-around stay checks in on the first selected day after the
//!   unselected block and checks out on the successor of the last selected
//!   day before it

use crate::continuity::is_contiguous;
use crate::types::{DAYS_PER_WEEK, DayIndex, DaySelection};
use serde::{Deserialize, Serialize};

/// The derived check-in/check-out day pair for a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayBoundary {
    /// The day the visitor arrives.
    check_in: DayIndex,
    /// The day the visitor leaves (morning after the last night).
    check_out: DayIndex,
}

impl StayBoundary {
    /// Returns the check-in day.
    #[must_use]
    pub const fn check_in(&self) -> DayIndex {
        self.check_in
    }

    /// Returns the check-out day.
    #[must_use]
    pub const fn check_out(&self) -> DayIndex {
        self.check_out
    }
}

/// Derives the check-in/check-out pair for a selection.
///
/// # Arguments
///
/// * `selection` - The selection to derive from
///
/// # Returns
///
/// * `None` for an empty selection
/// * For a single day, check-in and check-out are both that day (a
///   degenerate single-day stay)
/// * Otherwise check-in is the first day of the arc and check-out is one day
///   past the last night, wrapping Saturday to Sunday
#[must_use]
pub fn derive_stay(selection: &DaySelection) -> Option<StayBoundary> {
    let days: &[DayIndex] = selection.days();

    let (first, last) = match days {
        [] => return None,
        [only] => {
            return Some(StayBoundary {
                check_in: *only,
                check_out: *only,
            });
        }
        [first, .., last] => (*first, *last),
    };

    let wraps: bool = selection.contains(DayIndex::SUNDAY)
        && selection.contains(DayIndex::SATURDAY)
        && selection.len() < usize::from(DAYS_PER_WEEK)
        && is_contiguous(selection);

    match internal_gap(days) {
        Some((gap_start, gap_end)) if wraps => {
            // The stay starts right after the unselected block and ends one
            // day past the selected block that precedes it.
            let check_in: DayIndex = days
                .iter()
                .find(|day| day.value() > gap_end)
                .copied()
                .unwrap_or(DayIndex::SUNDAY);
            let check_out: DayIndex = days
                .iter()
                .filter(|day| day.value() < gap_start)
                .next_back()
                .map_or(DayIndex::SUNDAY, |day| day.successor());
            Some(StayBoundary {
                check_in,
                check_out,
            })
        }
        _ => Some(StayBoundary {
            check_in: first,
            check_out: last.successor(),
        }),
    }
}

/// Finds the first internal gap in a sorted day slice.
///
/// Returns the inclusive `(first, last)` unselected indices of the gap, or
/// `None` when the slice is gap-free.
fn internal_gap(days: &[DayIndex]) -> Option<(u8, u8)> {
    days.windows(2).find_map(|pair| {
        let before: u8 = pair[0].value();
        let after: u8 = pair[1].value();
        (after - before > 1).then_some((before + 1, after - 1))
    })
}
