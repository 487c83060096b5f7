// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Schedule rule checking.
//!
//! Rule violations are business validation, never faults: the checker always
//! returns a verdict, and an invalid verdict carries the message shown to the
//! visitor as a transient notice.

use crate::continuity::is_contiguous;
use crate::types::{DaySelection, ScheduleConfig};
use serde::{Deserialize, Serialize};

/// The fixed set of reasons a selection can be invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidReason {
    /// Fewer nights than the configured minimum.
    TooFewNights,
    /// More nights than the configured maximum.
    TooManyNights,
    /// The selection does not form one contiguous arc.
    NonContiguous,
}

/// The outcome of checking a selection against schedule rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleVerdict {
    /// The selection satisfies all configured rules.
    Valid,
    /// The selection violates a rule.
    Invalid {
        /// Which rule was violated.
        reason: InvalidReason,
        /// The human-readable message for the visitor.
        message: String,
    },
}

impl ScheduleVerdict {
    /// Returns whether the verdict is `Valid`.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns the visitor-facing message for an invalid verdict.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid { message, .. } => Some(message),
        }
    }
}

/// Returns the stay length in nights for a selection.
///
/// A contiguous stay of `n` days spans `n - 1` nights (checkout is one day
/// after the last night). An empty selection has zero nights.
#[must_use]
pub fn night_count(selection: &DaySelection) -> usize {
    selection.len().saturating_sub(1)
}

/// Checks a selection against the configured schedule rules.
///
/// An empty selection is valid: the UI interprets it as "no schedule chosen
/// yet" and no constraint applies.
///
/// # Arguments
///
/// * `selection` - The selection to check
/// * `config` - The configured night bounds and contiguity requirement
#[must_use]
pub fn validate_selection(selection: &DaySelection, config: &ScheduleConfig) -> ScheduleVerdict {
    if selection.is_empty() {
        return ScheduleVerdict::Valid;
    }

    let nights: usize = night_count(selection);

    if nights < usize::from(config.min_nights()) {
        return ScheduleVerdict::Invalid {
            reason: InvalidReason::TooFewNights,
            message: format!(
                "Please select at least {} {} per week",
                config.min_nights(),
                night_label(config.min_nights())
            ),
        };
    }

    if nights > usize::from(config.max_nights()) {
        return ScheduleVerdict::Invalid {
            reason: InvalidReason::TooManyNights,
            message: format!(
                "Please select no more than {} {} per week",
                config.max_nights(),
                night_label(config.max_nights())
            ),
        };
    }

    if config.require_contiguous() && !is_contiguous(selection) {
        return ScheduleVerdict::Invalid {
            reason: InvalidReason::NonContiguous,
            message: String::from(
                "Please select contiguous days (e.g., Mon-Tue-Wed, not Mon-Wed-Fri)",
            ),
        };
    }

    ScheduleVerdict::Valid
}

/// Singular only when the bound is exactly 1.
const fn night_label(bound: u8) -> &'static str {
    if bound == 1 { "night" } else { "nights" }
}
