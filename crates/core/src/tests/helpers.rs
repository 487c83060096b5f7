// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::WidgetState;
use weekstay_domain::{DaySelection, ScheduleConfig};

/// A widget state with the embedding page's stock configuration and the
/// Monday-Friday default, starting from the given selection.
pub fn widget_with_selection(indices: &[u8]) -> WidgetState {
    WidgetState::with_selection(
        ScheduleConfig::default(),
        DaySelection::weeknight(),
        DaySelection::from_indices(indices).unwrap(),
    )
}

/// Collects a selection as raw 0-based indices for assertions.
pub fn indices(selection: &DaySelection) -> Vec<u8> {
    selection.days().iter().map(|day| day.value()).collect()
}
