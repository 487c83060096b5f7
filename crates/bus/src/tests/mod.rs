// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crate::SelectionBus;
use std::sync::{Arc, Mutex};
use weekstay_domain::DaySelection;

#[test]
fn test_new_bus_has_no_selection() {
    let bus: SelectionBus = SelectionBus::new();
    assert!(bus.latest().is_none());
}

#[test]
fn test_publish_stores_latest() {
    let bus: SelectionBus = SelectionBus::new();
    bus.publish(&DaySelection::weeknight());
    assert_eq!(bus.latest(), Some(DaySelection::weeknight()));
}

#[test]
fn test_later_publish_wins() {
    let bus: SelectionBus = SelectionBus::new();
    bus.publish(&DaySelection::weeknight());
    bus.publish(&DaySelection::weekend());
    assert_eq!(bus.latest(), Some(DaySelection::weekend()));
}

#[test]
fn test_clones_share_one_slot() {
    // One widget publishes, an independently-mounted widget reads.
    let publisher: SelectionBus = SelectionBus::new();
    let reader: SelectionBus = publisher.clone();

    publisher.publish(&DaySelection::weekend());
    assert_eq!(reader.latest(), Some(DaySelection::weekend()));
}

#[test]
fn test_subscribers_are_notified_in_order() {
    let bus: SelectionBus = SelectionBus::new();
    let seen: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));

    for id in 0..3 {
        let seen = Arc::clone(&seen);
        bus.subscribe(move |_| seen.lock().unwrap().push(id));
    }

    bus.publish(&DaySelection::weeknight());
    assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
}

#[test]
fn test_subscriber_receives_published_selection() {
    let bus: SelectionBus = SelectionBus::new();
    let received: Arc<Mutex<Option<DaySelection>>> = Arc::new(Mutex::new(None));

    let sink = Arc::clone(&received);
    bus.subscribe(move |selection| {
        *sink.lock().unwrap() = Some(selection.clone());
    });

    bus.publish(&DaySelection::weekend());
    assert_eq!(*received.lock().unwrap(), Some(DaySelection::weekend()));
}

#[test]
fn test_late_subscriber_misses_earlier_publish() {
    let bus: SelectionBus = SelectionBus::new();
    bus.publish(&DaySelection::weeknight());

    let seen: Arc<Mutex<u32>> = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&seen);
    bus.subscribe(move |_| *counter.lock().unwrap() += 1);

    assert_eq!(*seen.lock().unwrap(), 0);
    // Catch-up goes through latest() instead.
    assert_eq!(bus.latest(), Some(DaySelection::weeknight()));
}
