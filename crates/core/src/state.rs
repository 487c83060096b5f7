// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use weekstay_domain::{
    DaySelection, ScheduleConfig, ScheduleVerdict, StayBoundary, derive_stay, is_contiguous,
    validate_selection,
};

/// How long a transient notice stays on screen before auto-dismissing.
///
/// The engine only carries this as data; the embedding layer owns the timer.
pub const NOTICE_DISPLAY_DURATION: Duration = Duration::from_secs(3);

/// A transient, auto-dismissing validation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// The visitor-facing message.
    pub message: String,
    /// How long the message should stay visible.
    pub display_duration: Duration,
}

impl Notice {
    /// Creates a new `Notice` with the standard display duration.
    #[must_use]
    pub const fn new(message: String) -> Self {
        Self {
            message,
            display_duration: NOTICE_DISPLAY_DURATION,
        }
    }
}

/// The enumerated visual state consumed by the rendering layer.
///
/// Presentation (pulse animation, drag highlight) is a pure function of the
/// validation outcome and the drag flag; the renderer maps these to CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualState {
    /// Nothing special to show.
    Idle,
    /// A drag is in flight; cells render the drag highlight.
    Dragging,
    /// A multi-day selection violates the contiguity rule; cells pulse.
    ErrorPulse,
}

/// The derived state recomputed whenever the selection changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionReview {
    /// The rule-check outcome for the current selection.
    pub verdict: ScheduleVerdict,
    /// The derived check-in/check-out pair; absent for an empty selection.
    pub stay: Option<StayBoundary>,
    /// The visual state for the rendering layer.
    pub visual: VisualState,
}

/// The widget state owned by one mounted selector instance.
///
/// The selection lives for the duration of the visitor's interaction with
/// the widget; it is never persisted beyond the page view except via the URL
/// parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetState {
    /// The currently selected days.
    pub selection: DaySelection,
    /// The configured schedule constraints.
    pub config: ScheduleConfig,
    /// The selection restored by `ResetToDefault` and used on first load.
    pub default_selection: DaySelection,
}

impl WidgetState {
    /// Creates a widget state starting from the default selection.
    ///
    /// # Arguments
    ///
    /// * `config` - The schedule constraints for this widget
    /// * `default_selection` - The page's default selection policy
    #[must_use]
    pub fn new(config: ScheduleConfig, default_selection: DaySelection) -> Self {
        Self {
            selection: default_selection.clone(),
            config,
            default_selection,
        }
    }

    /// Creates a widget state with an explicit initial selection, e.g. one
    /// reconstructed from the URL parameter.
    #[must_use]
    pub const fn with_selection(
        config: ScheduleConfig,
        default_selection: DaySelection,
        selection: DaySelection,
    ) -> Self {
        Self {
            selection,
            config,
            default_selection,
        }
    }

    /// Recomputes the derived state for the current selection.
    #[must_use]
    pub fn review(&self) -> SelectionReview {
        self.review_with_drag(false)
    }

    /// Recomputes the derived state, marking a drag as in flight.
    #[must_use]
    pub fn review_with_drag(&self, dragging: bool) -> SelectionReview {
        SelectionReview {
            verdict: validate_selection(&self.selection, &self.config),
            stay: derive_stay(&self.selection),
            visual: self.visual_state(dragging),
        }
    }

    /// Maps the current selection and drag flag to a visual state.
    fn visual_state(&self, dragging: bool) -> VisualState {
        if dragging {
            return VisualState::Dragging;
        }
        let contiguity_broken: bool = self.selection.len() > 1
            && self.config.require_contiguous()
            && !is_contiguous(&self.selection);
        if contiguity_broken {
            VisualState::ErrorPulse
        } else {
            VisualState::Idle
        }
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects; no caller ever observes a partially-updated selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: WidgetState,
    /// The derived state for the new selection.
    pub review: SelectionReview,
    /// The transient message to surface, if the transition raised one.
    pub notice: Option<Notice>,
}
