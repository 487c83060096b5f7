// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Notice, SelectionReview, TransitionResult, WidgetState};
use weekstay_domain::DayIndex;

/// Applies a command to the widget state, producing the new state, the
/// recomputed derived state, and any notice to surface.
///
/// Rule violations are NOT errors: an invalid selection produces a
/// `ScheduleVerdict::Invalid` review plus a notice, and the recovery policy
/// depends on the gesture. A click-toggle preserves the invalid selection so
/// the visitor can self-correct; finishing a drag that produced an invalid
/// selection resets it to empty.
///
/// # Arguments
///
/// * `state` - The current widget state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state, review, and notice
/// * `Err(CoreError)` if the command carries an out-of-range day index
///
/// # Errors
///
/// Returns an error if a raw day index in the command is outside 0-6. This
/// is the boundary where untrusted indices from the event glue are rejected;
/// the pure functions below it never see one.
pub fn apply(state: &WidgetState, command: Command) -> Result<TransitionResult, CoreError> {
    match command {
        Command::ToggleDay { day } => {
            let day: DayIndex = DayIndex::new(day)?;
            let mut new_state: WidgetState = state.clone();
            new_state.selection.toggle(day);

            let review: SelectionReview = new_state.review();
            let notice: Option<Notice> = review
                .verdict
                .message()
                .map(|message| Notice::new(message.to_owned()));

            Ok(TransitionResult {
                new_state,
                review,
                notice,
            })
        }
        Command::FillRange { anchor, focus } => {
            let anchor: DayIndex = DayIndex::new(anchor)?;
            let focus: DayIndex = DayIndex::new(focus)?;
            let mut new_state: WidgetState = state.clone();
            new_state.selection.fill_range(anchor, focus);

            // Validation is deferred until the drag completes; the review
            // still carries the in-flight verdict for live rendering.
            let review: SelectionReview = new_state.review_with_drag(true);

            Ok(TransitionResult {
                new_state,
                review,
                notice: None,
            })
        }
        Command::CompleteDrag => {
            let drag_review: SelectionReview = state.review();
            let notice: Option<Notice> = drag_review
                .verdict
                .message()
                .map(|message| Notice::new(message.to_owned()));

            let mut new_state: WidgetState = state.clone();
            // Stricter recovery than the click path: an invalid drag result
            // is discarded entirely.
            if !drag_review.verdict.is_valid() {
                new_state.selection.clear();
            }

            let review: SelectionReview = new_state.review();
            Ok(TransitionResult {
                new_state,
                review,
                notice,
            })
        }
        Command::ClearSelection => {
            let mut new_state: WidgetState = state.clone();
            new_state.selection.clear();

            let review: SelectionReview = new_state.review();
            Ok(TransitionResult {
                new_state,
                review,
                notice: None,
            })
        }
        Command::ResetToDefault => {
            let mut new_state: WidgetState = state.clone();
            new_state.selection = new_state.default_selection.clone();

            let review: SelectionReview = new_state.review();
            Ok(TransitionResult {
                new_state,
                review,
                notice: None,
            })
        }
    }
}
