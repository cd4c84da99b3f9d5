// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::{Event, EventBus, EventKind, EventKindType};
use tokio::time::timeout;
use tracing::debug;

/// Sends a quit signal to a running module and waits for it to stop gracefully.
///
/// # Panics
/// This function panics if:
/// - The module does not stop within 100 ms.
/// - The task returns an error (`Err(())`).
pub async fn stop_module(
    event_bus: &EventBus,
    handle: &mut tokio::task::JoinHandle<Result<(), ()>>,
) {
    event_bus.publish(&Event {
        kind: EventKind::QuitEvent,
    });
    timeout(std::time::Duration::from_millis(100), handle)
        .await
        .expect("Module doesn't handle quit event in timeout")
        .expect("Module task panicked")
        .expect("Module stopped with an error");
}

/// Waits for an [`Event`] of type `exp_event` on `rx`.
///
/// The waiting time is split into ten polling steps. Events of other types
/// are skipped.
///
/// # Panics
///
/// Panics if no matching event arrives within `duration`.
pub async fn wait_for_event(
    rx: &mut tokio::sync::broadcast::Receiver<Event>,
    duration: std::time::Duration,
    exp_event: EventKindType,
) -> Event {
    let step_duration = duration / 10;
    for _ in 0..10 {
        if let Ok(Ok(event)) = timeout(step_duration, rx.recv()).await {
            debug!("Received event {:?}", event.event_type());
            if event.event_type() == exp_event {
                return event;
            }
        }
    }
    panic!("Failed to receive event of type {:?}", exp_event);
}

/// Asserts that no event of type `event_type` arrives on `rx` within `duration`.
pub async fn assert_no_event(
    rx: &mut tokio::sync::broadcast::Receiver<Event>,
    duration: std::time::Duration,
    event_type: EventKindType,
) {
    let deadline = tokio::time::Instant::now() + duration;
    while let Ok(Ok(event)) = tokio::time::timeout_at(deadline, rx.recv()).await {
        assert_ne!(
            event.event_type(),
            event_type,
            "Received unexpected event {:?}",
            event
        );
    }
}
