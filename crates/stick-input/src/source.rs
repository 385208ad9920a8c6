//! Event sources.
//!
//! An [`EventSource`] delivers [`InputEvent`]s to handlers subscribed by
//! [`EventKind`]. The DOM-backed source lives in `stick-wasm`; [`EventBus`]
//! is the in-memory source used by native hosts and tests.
//!
//! Sources are handles with interior mutability, mirroring DOM event
//! targets: subscribing and dispatching take `&self`, and clones of a handle
//! share one listener table.

use crate::input::{EventKind, InputEvent};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Callback invoked for every delivered event of the subscribed kind.
pub type Handler = Rc<dyn Fn(&InputEvent)>;

/// Identifies one registration on a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Allocate a process-unique id.
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        ListenerId(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Something handlers can be attached to and detached from.
pub trait EventSource {
    /// Register `handler` for `kind`.
    ///
    /// # Errors
    /// Returns a description of why the underlying target refused the
    /// listener.
    fn subscribe(&self, kind: EventKind, handler: Handler) -> Result<ListenerId, String>;

    /// Remove a registration. After this returns the handler is never
    /// invoked again. Returns `false` if `id` was not registered for `kind`.
    fn unsubscribe(&self, kind: EventKind, id: ListenerId) -> bool;
}

// ─── In-memory bus ───────────────────────────────────────────────────────

struct Registration {
    id: ListenerId,
    kind: EventKind,
    handler: Handler,
}

/// Synchronous in-memory event source.
#[derive(Clone, Default)]
pub struct EventBus {
    listeners: Rc<RefCell<Vec<Registration>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` to every handler subscribed to its kind, in
    /// registration order. Returns the number of handlers invoked.
    pub fn dispatch(&self, event: &InputEvent) -> usize {
        let kind = event.kind();
        // Snapshot the matching handlers so a handler may (un)subscribe.
        let handlers: Vec<Handler> = self
            .listeners
            .borrow()
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| Rc::clone(&r.handler))
            .collect();
        for handler in &handlers {
            handler(event);
        }
        handlers.len()
    }

    /// Number of live registrations for `kind`.
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|r| r.kind == kind)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }
}

impl EventSource for EventBus {
    fn subscribe(&self, kind: EventKind, handler: Handler) -> Result<ListenerId, String> {
        let id = ListenerId::next();
        self.listeners.borrow_mut().push(Registration { id, kind, handler });
        Ok(id)
    }

    fn unsubscribe(&self, kind: EventKind, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|r| !(r.id == id && r.kind == kind));
        listeners.len() != before
    }
}
