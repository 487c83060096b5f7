// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{indices, widget_with_selection};
use crate::{
    Command, CoreError, NOTICE_DISPLAY_DURATION, TransitionResult, VisualState, WidgetState,
};
use weekstay_domain::{DomainError, ScheduleVerdict};

#[test]
fn test_toggle_adds_unselected_day() {
    let state: WidgetState = widget_with_selection(&[1, 2, 3, 4]);
    let result: TransitionResult = apply_ok(&state, Command::ToggleDay { day: 5 });

    assert_eq!(indices(&result.new_state.selection), vec![1, 2, 3, 4, 5]);
    assert_eq!(result.review.verdict, ScheduleVerdict::Valid);
    assert!(result.notice.is_none());
}

#[test]
fn test_toggle_removes_selected_day() {
    let state: WidgetState = widget_with_selection(&[1, 2, 3, 4, 5]);
    let result: TransitionResult = apply_ok(&state, Command::ToggleDay { day: 5 });

    assert_eq!(indices(&result.new_state.selection), vec![1, 2, 3, 4]);
}

#[test]
fn test_toggle_preserves_invalid_selection() {
    // Removing Tuesday leaves Mon+Wed-Fri, which is gapped; the click path
    // keeps the selection so the visitor can self-correct.
    let state: WidgetState = widget_with_selection(&[1, 2, 3, 4, 5]);
    let result: TransitionResult = apply_ok(&state, Command::ToggleDay { day: 2 });

    assert_eq!(indices(&result.new_state.selection), vec![1, 3, 4, 5]);
    assert!(!result.review.verdict.is_valid());
    let notice = result.notice.unwrap();
    assert_eq!(
        notice.message,
        "Please select contiguous days (e.g., Mon-Tue-Wed, not Mon-Wed-Fri)"
    );
    assert_eq!(notice.display_duration, NOTICE_DISPLAY_DURATION);
}

#[test]
fn test_toggle_rejects_out_of_range_index() {
    let state: WidgetState = widget_with_selection(&[1, 2, 3]);
    let result: Result<TransitionResult, CoreError> =
        crate::apply(&state, Command::ToggleDay { day: 7 });

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidDayIndex(7)))
    );
}

#[test]
fn test_fill_range_replaces_selection_and_marks_drag() {
    let state: WidgetState = widget_with_selection(&[0]);
    let result: TransitionResult = apply_ok(
        &state,
        Command::FillRange {
            anchor: 1,
            focus: 4,
        },
    );

    assert_eq!(indices(&result.new_state.selection), vec![1, 2, 3, 4]);
    assert_eq!(result.review.visual, VisualState::Dragging);
    assert!(result.notice.is_none());
}

#[test]
fn test_fill_range_wraps_backwards_drag() {
    let state: WidgetState = widget_with_selection(&[]);
    let result: TransitionResult = apply_ok(
        &state,
        Command::FillRange {
            anchor: 5,
            focus: 0,
        },
    );

    assert_eq!(indices(&result.new_state.selection), vec![0, 5, 6]);
}

#[test]
fn test_fill_range_raises_no_notice_mid_drag() {
    // A one-day arc violates the minimum-night rule, but validation is
    // deferred until the drag completes.
    let state: WidgetState = widget_with_selection(&[1, 2, 3]);
    let result: TransitionResult = apply_ok(
        &state,
        Command::FillRange {
            anchor: 2,
            focus: 2,
        },
    );

    assert!(result.notice.is_none());
    assert!(!result.review.verdict.is_valid());
}

#[test]
fn test_complete_drag_keeps_valid_selection() {
    let state: WidgetState = widget_with_selection(&[1, 2, 3]);
    let result: TransitionResult = apply_ok(&state, Command::CompleteDrag);

    assert_eq!(indices(&result.new_state.selection), vec![1, 2, 3]);
    assert!(result.notice.is_none());
}

#[test]
fn test_complete_drag_resets_invalid_selection() {
    let state: WidgetState = widget_with_selection(&[2]);
    let result: TransitionResult = apply_ok(&state, Command::CompleteDrag);

    assert!(result.new_state.selection.is_empty());
    let notice = result.notice.unwrap();
    assert_eq!(notice.message, "Please select at least 2 nights per week");
    // The post-recovery review reflects the cleared selection.
    assert_eq!(result.review.verdict, ScheduleVerdict::Valid);
    assert!(result.review.stay.is_none());
}

#[test]
fn test_clear_selection_empties_and_stays_valid() {
    let state: WidgetState = widget_with_selection(&[1, 2, 3, 4, 5]);
    let result: TransitionResult = apply_ok(&state, Command::ClearSelection);

    assert!(result.new_state.selection.is_empty());
    assert_eq!(result.review.verdict, ScheduleVerdict::Valid);
    assert!(result.notice.is_none());
}

#[test]
fn test_reset_to_default_restores_page_policy() {
    let state: WidgetState = widget_with_selection(&[6, 0]);
    let result: TransitionResult = apply_ok(&state, Command::ResetToDefault);

    assert_eq!(indices(&result.new_state.selection), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_apply_never_mutates_input_state() {
    let state: WidgetState = widget_with_selection(&[1, 2, 3]);
    let before: WidgetState = state.clone();
    let _ = apply_ok(&state, Command::ToggleDay { day: 6 });

    assert_eq!(state, before);
}

#[test]
fn test_toggle_then_toggle_round_trips() {
    let state: WidgetState = widget_with_selection(&[1, 2, 3]);
    let once: TransitionResult = apply_ok(&state, Command::ToggleDay { day: 4 });
    let twice: TransitionResult = apply_ok(&once.new_state, Command::ToggleDay { day: 4 });

    assert_eq!(twice.new_state.selection, state.selection);
}

fn apply_ok(state: &WidgetState, command: Command) -> TransitionResult {
    crate::apply(state, command).unwrap()
}
