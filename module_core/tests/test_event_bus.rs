// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use module_core::{test_helper::wait_for_event, *};

#[tokio::test]
#[test_log::test]
pub async fn events_delivered() {
    let event_bus = EventBus::new();
    let mut receiver = event_bus.subscribe();
    let event = Event {
        kind: EventKind::QuitEvent,
    };
    event_bus.publish(&event);
    let received_event =
        tokio::time::timeout(std::time::Duration::from_millis(100), receiver.recv())
            .await
            .expect("Failed to receive event in required time")
            .unwrap();
    assert_eq!(received_event.event_type(), event.event_type());
}

#[tokio::test]
#[test_log::test]
pub async fn wait_for_event_skips_other_kinds() {
    let event_bus = EventBus::new();
    let ctx = event_bus.context();
    let mut receiver = event_bus.subscribe();
    ctx.publish_event(EventKind::ResetLapProgressEvent)
        .expect("Failed to publish reset event");
    ctx.publish_event(EventKind::QuitEvent)
        .expect("Failed to publish quit event");
    let event = wait_for_event(
        &mut receiver,
        std::time::Duration::from_millis(100),
        EventKindType::QuitEvent,
    )
    .await;
    assert_eq!(event.kind, EventKind::QuitEvent);
}

#[test]
pub fn payload_ref_matches_variant_only() {
    let kind = EventKind::ResetLapProgressEvent;
    assert!(payload_ref!(kind, EventKind::GnssPositionEvent).is_none());
}
