use super::*;
use std::cell::Cell;

#[test]
fn dispatch_filters_by_kind() {
    let hub = EventHub::new();
    let moves = Rc::new(Cell::new(0));
    let seen = Rc::clone(&moves);
    let _sub = hub.subscribe(&[EventKind::PointerMove], move |_| seen.set(seen.get() + 1));

    hub.dispatch(&HostEvent::PointerMove { x: 1.0, y: 2.0 });
    hub.dispatch(&HostEvent::PointerDown);
    hub.dispatch(&HostEvent::PointerMove { x: 3.0, y: 4.0 });
    assert_eq!(moves.get(), 2);
}

#[test]
fn dropping_subscription_unregisters() {
    let hub = EventHub::new();
    let hits = Rc::new(Cell::new(0));
    let seen = Rc::clone(&hits);
    let sub = hub.subscribe(&[EventKind::Scroll], move |_| seen.set(seen.get() + 1));
    assert_eq!(hub.listener_count(), 1);

    hub.dispatch(&HostEvent::Scroll { offset_y: 10.0 });
    drop(sub);
    hub.dispatch(&HostEvent::Scroll { offset_y: 20.0 });

    assert_eq!(hits.get(), 1);
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn handlers_run_in_subscription_order() {
    let hub = EventHub::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let (a, b) = (Rc::clone(&log), Rc::clone(&log));
    let _s1 = hub.subscribe(&[EventKind::PointerUp], move |_| a.borrow_mut().push(1));
    let _s2 = hub.subscribe(&[EventKind::PointerUp], move |_| b.borrow_mut().push(2));
    hub.dispatch(&HostEvent::PointerUp);
    assert_eq!(*log.borrow(), vec![1, 2]);
}

#[test]
fn handler_may_unsubscribe_during_dispatch() {
    let hub = EventHub::new();
    let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
    let inner = Rc::clone(&slot);
    let sub = hub.subscribe(&[EventKind::PointerDown], move |_| {
        inner.borrow_mut().take();
    });
    *slot.borrow_mut() = Some(sub);

    hub.dispatch(&HostEvent::PointerDown);
    assert_eq!(hub.listener_count(), 0);
    hub.dispatch(&HostEvent::PointerDown);
}

#[derive(Debug, Default)]
struct Counter {
    scrolls: u32,
}

impl HostListener for Counter {
    fn event_kinds(&self) -> Vec<EventKind> {
        vec![EventKind::Scroll]
    }

    fn on_event(&mut self, _event: &HostEvent) {
        self.scrolls += 1;
    }
}

#[test]
fn mounted_component_receives_events_until_dropped() {
    let hub = EventHub::new();
    let mounted = hub.mount(Counter::default());
    hub.dispatch(&HostEvent::Scroll { offset_y: 1.0 });
    hub.dispatch(&HostEvent::Resize {
        width: 10.0,
        height: 10.0,
    });
    assert_eq!(mounted.borrow().scrolls, 1);

    drop(mounted);
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn events_deserialize_from_tagged_json() {
    let ev: HostEvent = serde_json::from_str(r#"{"type":"pointer_move","x":3.5,"y":4}"#).unwrap();
    assert_eq!(ev, HostEvent::PointerMove { x: 3.5, y: 4.0 });
    let ev: HostEvent =
        serde_json::from_str(r#"{"type":"pointer_over","path":[{"tag":"span"},{"tag":"a"}]}"#)
            .unwrap();
    assert_eq!(ev.kind(), EventKind::PointerOver);
}
