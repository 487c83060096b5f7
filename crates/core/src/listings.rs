// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Matching-listings lookup seam.
//!
//! The selector shows "N exact matches, M partial matches" next to the day
//! grid. Counting is an external collaborator concern, so the widget takes a
//! [`ListingCounter`] at construction; implementations must be deterministic
//! for a given selection.

use serde::{Deserialize, Serialize};
use weekstay_domain::DaySelection;

/// Listing counts for a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCounts {
    /// Listings whose schedule matches the selection exactly.
    pub exact: u32,
    /// Listings whose schedule overlaps the selection.
    pub partial: u32,
}

impl MatchCounts {
    /// The counts shown when nothing is selected.
    pub const NONE: Self = Self {
        exact: 0,
        partial: 0,
    };
}

/// A lookup for how many listings match a selection.
pub trait ListingCounter {
    /// Returns the listing counts for a selection.
    ///
    /// An empty selection must report [`MatchCounts::NONE`].
    fn counts_for(&self, selection: &DaySelection) -> MatchCounts;
}

/// A counter backed by fixed per-day figures.
///
/// Exact and partial counts scale with the number of selected days, which is
/// enough for previews and tests while staying fully deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedListingCounter {
    /// Exact matches reported per selected day.
    pub exact_per_day: u32,
    /// Partial matches reported per selected day.
    pub partial_per_day: u32,
}

impl ListingCounter for FixedListingCounter {
    fn counts_for(&self, selection: &DaySelection) -> MatchCounts {
        if selection.is_empty() {
            return MatchCounts::NONE;
        }
        let days: u32 = u32::try_from(selection.len()).unwrap_or(u32::MAX);
        MatchCounts {
            exact: self.exact_per_day * days,
            partial: self.partial_per_day * days,
        }
    }
}
