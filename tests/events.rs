use slidecanvas::events::{CanvasEvent, EventController, EventKind, EventPayload};

#[test]
fn kinds_combine() {
    let k = EventKind::SEGMENT | EventKind::DISTANCE;
    assert!(k.contains(EventKind::SEGMENT));
    assert!(k.intersects(EventKind::DISTANCE | EventKind::ERROR));
    assert!(!k.intersects(EventKind::ERROR));
    assert!(EventKind::ALL.contains(k));
}

#[test]
fn subscribers_only_see_matching_events() {
    let ctrl = EventController::new();
    let errors = ctrl.subscribe(EventKind::ERROR);
    let all = ctrl.subscribe_all();

    ctrl.emit(CanvasEvent::new(EventKind::STATUS, EventPayload::Status("hi".into())));
    ctrl.emit(CanvasEvent::new(EventKind::ERROR, EventPayload::Error("bad".into())));

    let got: Vec<CanvasEvent> = errors.try_iter().collect();
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].payload, EventPayload::Error("bad".into()));
    assert!(got[0].timestamp >= 0.0);
    assert_eq!(all.try_iter().count(), 2);
}

#[test]
fn dropped_receivers_are_pruned() {
    let ctrl = EventController::new();
    let keep = ctrl.subscribe(EventKind::CLEARED);
    {
        let _gone = ctrl.subscribe(EventKind::CLEARED);
        assert_eq!(ctrl.subscriber_count(), 2);
    }
    ctrl.emit(CanvasEvent::new(EventKind::CLEARED, EventPayload::Cleared));
    assert_eq!(ctrl.subscriber_count(), 1);
    assert_eq!(keep.try_iter().count(), 1);
}

#[test]
fn clones_share_subscribers() {
    let ctrl = EventController::default();
    let rx = ctrl.subscribe(EventKind::DISTANCE);
    ctrl.clone()
        .emit(CanvasEvent::new(EventKind::DISTANCE, EventPayload::Distance(4.5)));
    assert_eq!(rx.recv().unwrap().payload, EventPayload::Distance(4.5));
}
