// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// A command represents visitor or page intent as data only.
///
/// Commands are the only way to request selection changes. Day positions are
/// carried as raw 0-based indices exactly as the pointer/keyboard glue hands
/// them over; `apply` validates them at this boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Flip membership of a single day (a click on its cell).
    ToggleDay {
        /// The 0-based day index to toggle.
        day: u8,
    },
    /// Replace the selection with the arc from the drag anchor to the cell
    /// currently under the pointer (a drag in progress).
    FillRange {
        /// The 0-based index where the drag started.
        anchor: u8,
        /// The 0-based index currently under the pointer.
        focus: u8,
    },
    /// Finish a drag, validating the selection it produced.
    CompleteDrag,
    /// Empty the selection (the "Clear selection" affordance).
    ClearSelection,
    /// Restore the configured default selection.
    ResetToDefault,
}
