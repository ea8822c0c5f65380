//! Host event plumbing: the events a render host feeds in, and the observer hub
//! components subscribe to.

use std::cell::{Ref, RefCell, RefMut};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

/// Minimal description of a node under the pointer.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Element {
    /// Lower-case tag name (`a`, `button`, `span`, ...).
    pub tag: String,
    /// Explicit ARIA role, if any.
    #[serde(default)]
    pub role: Option<String>,
    /// Remaining attributes.
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

impl Element {
    /// Element with only a tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Builder-style role.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Builder-style attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Attribute lookup.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }
}

/// Input delivered by the render host.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    /// Pointer moved to viewport coordinates.
    PointerMove {
        /// Viewport x in pixels.
        x: f64,
        /// Viewport y in pixels.
        y: f64,
    },
    /// Pointer entered a node; `path` lists the target first, then its ancestors.
    PointerOver {
        /// Target and ancestor chain.
        path: Vec<Element>,
    },
    /// Primary button pressed.
    PointerDown,
    /// Primary button released.
    PointerUp,
    /// Viewport resized.
    Resize {
        /// New viewport width in pixels.
        width: f64,
        /// New viewport height in pixels.
        height: f64,
    },
    /// Page scrolled.
    Scroll {
        /// Vertical scroll offset in pixels.
        offset_y: f64,
    },
}

/// Discriminant of [`HostEvent`] used to filter subscriptions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// [`HostEvent::PointerMove`].
    PointerMove,
    /// [`HostEvent::PointerOver`].
    PointerOver,
    /// [`HostEvent::PointerDown`].
    PointerDown,
    /// [`HostEvent::PointerUp`].
    PointerUp,
    /// [`HostEvent::Resize`].
    Resize,
    /// [`HostEvent::Scroll`].
    Scroll,
}

impl HostEvent {
    /// Kind of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::PointerMove { .. } => EventKind::PointerMove,
            Self::PointerOver { .. } => EventKind::PointerOver,
            Self::PointerDown => EventKind::PointerDown,
            Self::PointerUp => EventKind::PointerUp,
            Self::Resize { .. } => EventKind::Resize,
            Self::Scroll { .. } => EventKind::Scroll,
        }
    }
}

type Handler = Rc<RefCell<dyn FnMut(&HostEvent)>>;

struct Listener {
    id: u64,
    kinds: Vec<EventKind>,
    handler: Handler,
}

#[derive(Default)]
struct HubInner {
    next_id: u64,
    listeners: Vec<Listener>,
}

/// Single-threaded observer hub standing in for document/window listeners.
///
/// Handlers run in subscription order. A handler may subscribe or drop
/// subscriptions while being dispatched to; changes apply from the next event.
#[derive(Clone, Default)]
pub struct EventHub {
    inner: Rc<RefCell<HubInner>>,
}

impl EventHub {
    /// Empty hub.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `kinds`. The handler stays registered for as long as
    /// the returned [`Subscription`] is alive.
    #[must_use = "dropping the subscription unregisters the handler"]
    pub fn subscribe(
        &self,
        kinds: &[EventKind],
        handler: impl FnMut(&HostEvent) + 'static,
    ) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push(Listener {
            id,
            kinds: kinds.to_vec(),
            handler: Rc::new(RefCell::new(handler)),
        });
        Subscription {
            hub: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Deliver `event` to every handler subscribed to its kind.
    pub fn dispatch(&self, event: &HostEvent) {
        let kind = event.kind();
        let handlers: Vec<Handler> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.kinds.contains(&kind))
            .map(|l| Rc::clone(&l.handler))
            .collect();
        for handler in handlers {
            // A handler that re-dispatches into itself is skipped rather than re-entered.
            if let Ok(mut f) = handler.try_borrow_mut() {
                (&mut *f)(event);
            }
        }
    }

    /// Number of live handlers.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Mount `component`, routing its event kinds to [`HostListener::on_event`].
    pub fn mount<T: HostListener + 'static>(&self, component: T) -> Mounted<T> {
        let kinds = component.event_kinds();
        let state = Rc::new(RefCell::new(component));
        let weak = Rc::downgrade(&state);
        let sub = self.subscribe(&kinds, move |event| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().on_event(event);
            }
        });
        Mounted {
            state,
            _subscription: sub,
        }
    }
}

impl std::fmt::Debug for EventHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Registration handle; unregisters its handler on drop.
#[derive(Debug)]
pub struct Subscription {
    hub: Weak<RefCell<HubInner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            // During dispatch the hub is not borrowed, so this cannot conflict.
            if let Ok(mut inner) = hub.try_borrow_mut() {
                inner.listeners.retain(|l| l.id != self.id);
            }
        }
    }
}

/// Component driven by host events.
pub trait HostListener {
    /// Event kinds the component reacts to.
    fn event_kinds(&self) -> Vec<EventKind>;

    /// Apply one event.
    fn on_event(&mut self, event: &HostEvent);
}

/// A component mounted on an [`EventHub`]. Dropping it unmounts the component and
/// releases its subscription.
pub struct Mounted<T> {
    state: Rc<RefCell<T>>,
    _subscription: Subscription,
}

impl<T> Mounted<T> {
    /// Shared view of the component.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.state.borrow()
    }

    /// Exclusive view of the component.
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.state.borrow_mut()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Mounted<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Mounted").field(&self.state.borrow()).finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/host.rs"]
mod tests;
