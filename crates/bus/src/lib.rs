// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Cross-widget selection synchronization.
//!
//! Several selector widgets can be mounted on one page, and each builds its
//! outbound links from the most recent selection made in any of them. The
//! bus is that seam made explicit: an injectable value handed to each widget
//! at construction, replacing an implicit process-wide global so ownership
//! and lifetime are visible and testable.
//!
//! The interaction model is one visitor on one page, so the locking below is
//! only what sharing a handle between widget instances requires.

use std::sync::{Arc, Mutex};
use weekstay_domain::DaySelection;

#[cfg(test)]
mod tests;

/// A callback invoked with each published selection.
pub type Subscriber = Box<dyn Fn(&DaySelection) + Send + Sync>;

/// The shared selection slot plus its subscribers.
struct BusInner {
    /// The most recently published selection.
    latest: Option<DaySelection>,
    /// Callbacks to notify on publish.
    subscribers: Vec<Subscriber>,
}

/// A shared selection bus.
///
/// Cloning the bus clones a handle; all clones observe the same slot.
#[derive(Clone)]
pub struct SelectionBus {
    inner: Arc<Mutex<BusInner>>,
}

impl SelectionBus {
    /// Creates a bus with nothing published yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(BusInner {
                latest: None,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Publishes a selection, storing it as the latest and notifying every
    /// subscriber in registration order.
    pub fn publish(&self, selection: &DaySelection) {
        let mut inner = self.lock();
        inner.latest = Some(selection.clone());
        for subscriber in &inner.subscribers {
            subscriber(selection);
        }
    }

    /// Returns the most recently published selection, if any.
    #[must_use]
    pub fn latest(&self) -> Option<DaySelection> {
        self.lock().latest.clone()
    }

    /// Registers a callback for future publishes.
    ///
    /// Subscribers registered after a publish do not see it retroactively;
    /// read [`SelectionBus::latest`] for catch-up.
    pub fn subscribe<F>(&self, subscriber: F)
    where
        F: Fn(&DaySelection) + Send + Sync + 'static,
    {
        self.lock().subscribers.push(Box::new(subscriber));
    }

    /// Locks the slot, recovering from a poisoned mutex.
    ///
    /// A panicking subscriber must not wedge every other widget on the page.
    fn lock(&self) -> std::sync::MutexGuard<'_, BusInner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for SelectionBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SelectionBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionBus")
            .field("latest", &self.lock().latest)
            .finish_non_exhaustive()
    }
}
