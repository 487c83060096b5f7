// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// The number of days in a week.
pub const DAYS_PER_WEEK: u8 = 7;

/// The seven weekday names, positionally mapped from day index.
const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Represents a weekday as a 0-based index.
///
/// Day indices are domain constants numbered 0 (Sunday) through 6 (Saturday).
/// This is the canonical internal representation; the external booking system
/// uses 1-based "Bubble" numbering (see [`DayIndex::bubble_number`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayIndex {
    /// The day index (0-6).
    value: u8,
}

impl DayIndex {
    /// Sunday (index 0).
    pub const SUNDAY: Self = Self { value: 0 };
    /// Monday (index 1).
    pub const MONDAY: Self = Self { value: 1 };
    /// Tuesday (index 2).
    pub const TUESDAY: Self = Self { value: 2 };
    /// Wednesday (index 3).
    pub const WEDNESDAY: Self = Self { value: 3 };
    /// Thursday (index 4).
    pub const THURSDAY: Self = Self { value: 4 };
    /// Friday (index 5).
    pub const FRIDAY: Self = Self { value: 5 };
    /// Saturday (index 6).
    pub const SATURDAY: Self = Self { value: 6 };

    /// Creates a new `DayIndex`.
    ///
    /// # Arguments
    ///
    /// * `value` - The day index (must be between 0 and 6 inclusive)
    ///
    /// # Returns
    ///
    /// * `Ok(DayIndex)` if the value is valid
    /// * `Err(DomainError::InvalidDayIndex)` if the value is not between 0 and 6
    ///
    /// # Errors
    ///
    /// Returns an error if the day index is not in the range 0-6.
    pub const fn new(value: u8) -> Result<Self, DomainError> {
        if value < DAYS_PER_WEEK {
            Ok(Self { value })
        } else {
            Err(DomainError::InvalidDayIndex(value))
        }
    }

    /// Creates a `DayIndex` from a 1-based Bubble day number.
    ///
    /// # Errors
    ///
    /// Returns an error if the number is not in the range 1-7.
    pub const fn from_bubble(number: u8) -> Result<Self, DomainError> {
        if number >= 1 && number <= DAYS_PER_WEEK {
            Ok(Self { value: number - 1 })
        } else {
            Err(DomainError::InvalidBubbleNumber(number))
        }
    }

    /// Returns the 0-based day index.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns the 1-based Bubble day number consumed by the booking system.
    #[must_use]
    pub const fn bubble_number(&self) -> u8 {
        self.value + 1
    }

    /// Returns the English weekday name for this index.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        DAY_NAMES[self.value as usize]
    }

    /// Returns the day immediately after this one, wrapping Saturday to Sunday.
    #[must_use]
    pub const fn successor(&self) -> Self {
        Self {
            value: (self.value + 1) % DAYS_PER_WEEK,
        }
    }
}

impl std::fmt::Display for DayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A set of selected weekdays.
///
/// The selection is held in canonical form: sorted ascending, no duplicates,
/// every element a valid [`DayIndex`]. All algorithms in this crate operate on
/// that canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DaySelection {
    /// The selected days, sorted ascending.
    days: Vec<DayIndex>,
}

impl DaySelection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self { days: Vec::new() }
    }

    /// Creates a selection from a slice of days.
    ///
    /// Input order is irrelevant; duplicates are collapsed.
    #[must_use]
    pub fn from_days(days: &[DayIndex]) -> Self {
        let mut sorted: Vec<DayIndex> = days.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        Self { days: sorted }
    }

    /// Creates a selection from raw 0-based indices.
    ///
    /// # Errors
    ///
    /// Returns an error if any index is outside the 0-6 range.
    pub fn from_indices(indices: &[u8]) -> Result<Self, DomainError> {
        let mut days: Vec<DayIndex> = Vec::with_capacity(indices.len());
        for index in indices {
            days.push(DayIndex::new(*index)?);
        }
        Ok(Self::from_days(&days))
    }

    /// The Monday-Friday weeknight preset.
    #[must_use]
    pub fn weeknight() -> Self {
        Self::from_days(&[
            DayIndex::MONDAY,
            DayIndex::TUESDAY,
            DayIndex::WEDNESDAY,
            DayIndex::THURSDAY,
            DayIndex::FRIDAY,
        ])
    }

    /// The Friday-Monday weekend preset (wraps the week boundary).
    #[must_use]
    pub fn weekend() -> Self {
        Self::from_days(&[
            DayIndex::FRIDAY,
            DayIndex::SATURDAY,
            DayIndex::SUNDAY,
            DayIndex::MONDAY,
        ])
    }

    /// The all-seven-days preset.
    #[must_use]
    pub fn full_week() -> Self {
        Self::from_days(&[
            DayIndex::SUNDAY,
            DayIndex::MONDAY,
            DayIndex::TUESDAY,
            DayIndex::WEDNESDAY,
            DayIndex::THURSDAY,
            DayIndex::FRIDAY,
            DayIndex::SATURDAY,
        ])
    }

    /// Returns the selected days, sorted ascending.
    #[must_use]
    pub fn days(&self) -> &[DayIndex] {
        &self.days
    }

    /// Returns the number of selected days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns whether no days are selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Checks whether a day is selected.
    #[must_use]
    pub fn contains(&self, day: DayIndex) -> bool {
        self.days.binary_search(&day).is_ok()
    }

    /// Flips membership of a day.
    ///
    /// Toggling the same day twice restores the original selection.
    pub fn toggle(&mut self, day: DayIndex) {
        match self.days.binary_search(&day) {
            Ok(position) => {
                self.days.remove(position);
            }
            Err(position) => {
                self.days.insert(position, day);
            }
        }
    }

    /// Replaces the selection with the contiguous arc from `anchor` to
    /// `focus` inclusive.
    ///
    /// When `focus` precedes `anchor` the arc wraps through Saturday back
    /// past Sunday, so the filled count is `7 - anchor + focus + 1`.
    pub fn fill_range(&mut self, anchor: DayIndex, focus: DayIndex) {
        let start: u8 = anchor.value();
        let end: u8 = focus.value();
        let count: u8 = if end >= start {
            end - start + 1
        } else {
            (DAYS_PER_WEEK - start) + end + 1
        };

        let mut filled: Vec<DayIndex> = Vec::with_capacity(usize::from(count));
        for offset in 0..count {
            filled.push(Self::wrapped_day(start, offset));
        }
        *self = Self::from_days(&filled);
    }

    /// Empties the selection.
    pub fn clear(&mut self) {
        self.days.clear();
    }

    /// Returns the days NOT selected, sorted ascending.
    #[must_use]
    pub fn complement(&self) -> Self {
        let days: Vec<DayIndex> = (0..DAYS_PER_WEEK)
            .map(|value| DayIndex { value })
            .filter(|day| !self.contains(*day))
            .collect();
        Self { days }
    }

    // Offsets are always reduced modulo the week length, so the constructed
    // value stays in range without revalidation.
    const fn wrapped_day(start: u8, offset: u8) -> DayIndex {
        DayIndex {
            value: (start + offset) % DAYS_PER_WEEK,
        }
    }
}

/// Immutable schedule constraints supplied by the embedding page.
///
/// Bounds are expressed in nights (selected-day count minus one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Minimum night count per week.
    min_nights: u8,
    /// Maximum night count per week.
    max_nights: u8,
    /// Whether the selection must form one contiguous arc.
    require_contiguous: bool,
}

impl ScheduleConfig {
    /// Creates a new `ScheduleConfig`.
    ///
    /// # Arguments
    ///
    /// * `min_nights` - Minimum night count
    /// * `max_nights` - Maximum night count (must not be less than `min_nights`)
    /// * `require_contiguous` - Whether contiguity is enforced
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidScheduleConfig` if `max_nights` is less
    /// than `min_nights`.
    pub const fn new(
        min_nights: u8,
        max_nights: u8,
        require_contiguous: bool,
    ) -> Result<Self, DomainError> {
        if max_nights < min_nights {
            return Err(DomainError::InvalidScheduleConfig {
                min_nights,
                max_nights,
            });
        }
        Ok(Self {
            min_nights,
            max_nights,
            require_contiguous,
        })
    }

    /// Returns the minimum night count.
    #[must_use]
    pub const fn min_nights(&self) -> u8 {
        self.min_nights
    }

    /// Returns the maximum night count.
    #[must_use]
    pub const fn max_nights(&self) -> u8 {
        self.max_nights
    }

    /// Returns whether contiguity is enforced.
    #[must_use]
    pub const fn require_contiguous(&self) -> bool {
        self.require_contiguous
    }
}

impl Default for ScheduleConfig {
    /// The bounds the embedding page ships with: 2-5 nights, contiguous.
    fn default() -> Self {
        Self {
            min_nights: 2,
            max_nights: 5,
            require_contiguous: true,
        }
    }
}
