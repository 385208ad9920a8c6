//! A live input instance bound to one event source.
//!
//! `Input::attach` subscribes one handler per [`EventKind`]; each handler
//! forwards into the shared [`InputState`]. `destroy` removes every
//! subscription. Once destroyed the state is frozen: the source holds no
//! handler that could still mutate it.

use crate::input::{Button, EventKind, InputEvent};
use crate::source::{EventSource, Handler, ListenerId};
use crate::state::InputState;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use stick_core::key::KeyCode;
use stick_core::model::{AxisState, Joystick, Vector2};
use stick_core::options::Options;

type Subscriptions = SmallVec<[(EventKind, ListenerId); 6]>;

/// Input instance attached to a source `S`.
pub struct Input<S: EventSource> {
    source: S,
    state: Rc<RefCell<InputState>>,
    subscriptions: Subscriptions,
}

impl<S: EventSource> Input<S> {
    /// Create the state and subscribe to every event kind on `source`.
    ///
    /// # Errors
    /// If any subscription is refused, the ones already made are removed
    /// and the source's error is returned.
    pub fn attach(source: S, options: Options) -> Result<Self, String> {
        if options.threshold.is_some() && options.threshold().is_none() {
            log::warn!(
                "ignoring threshold {:?}: pointer steering disabled",
                options.threshold
            );
        }
        let state = Rc::new(RefCell::new(InputState::new(options)));
        let mut subscriptions = Subscriptions::new();

        for kind in EventKind::ALL {
            let target = Rc::clone(&state);
            let handler: Handler = Rc::new(move |event: &InputEvent| {
                target.borrow_mut().handle(event);
            });
            match source.subscribe(kind, handler) {
                Ok(id) => subscriptions.push((kind, id)),
                Err(e) => {
                    for (done, id) in subscriptions.drain(..) {
                        source.unsubscribe(done, id);
                    }
                    return Err(format!("failed to subscribe to {kind:?}: {e}"));
                }
            }
        }

        log::debug!("input attached with {} listeners", subscriptions.len());
        Ok(Self {
            source,
            state,
            subscriptions,
        })
    }

    /// Detach every listener. Calling it again does nothing.
    pub fn destroy(&mut self) {
        if self.subscriptions.is_empty() {
            return;
        }
        for (kind, id) in self.subscriptions.drain(..) {
            if !self.source.unsubscribe(kind, id) {
                log::warn!("listener {id:?} for {kind:?} was already gone");
            }
        }
        log::debug!("input detached");
    }

    pub fn is_attached(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn options(&self) -> Options {
        self.state.borrow().options().clone()
    }

    // ─── Snapshot queries ────────────────────────────────────────────────

    pub fn joystick(&self) -> Joystick {
        self.state.borrow().joystick()
    }

    pub fn axis(&self) -> AxisState {
        self.state.borrow().axis()
    }

    /// Whether the key with this `KeyboardEvent.code` is held. Unknown
    /// codes read as `false`.
    pub fn is_key_down(&self, code: &str) -> bool {
        KeyCode::get(code).is_some_and(|code| self.state.borrow().is_key_down(code))
    }

    pub fn last_key_pressed(&self) -> Option<KeyCode> {
        self.state.borrow().last_key_pressed()
    }

    pub fn is_button_down(&self, button: Button) -> bool {
        self.state.borrow().is_button_down(button)
    }

    pub fn mouse_position(&self) -> Vector2 {
        self.state.borrow().mouse_position()
    }
}

impl<S: EventSource> Drop for Input<S> {
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::EventBus;

    /// A source that refuses one kind.
    struct Refusing {
        bus: EventBus,
        refuse: EventKind,
    }

    impl EventSource for Refusing {
        fn subscribe(&self, kind: EventKind, handler: Handler) -> Result<ListenerId, String> {
            if kind == self.refuse {
                return Err("target is gone".to_string());
            }
            self.bus.subscribe(kind, handler)
        }

        fn unsubscribe(&self, kind: EventKind, id: ListenerId) -> bool {
            self.bus.unsubscribe(kind, id)
        }
    }

    #[test]
    fn attach_subscribes_every_kind() {
        let bus = EventBus::new();
        let input = Input::attach(bus.clone(), Options::default()).unwrap();
        assert!(input.is_attached());
        for kind in EventKind::ALL {
            assert_eq!(bus.listener_count(kind), 1, "{kind:?}");
        }
    }

    #[test]
    fn failed_attach_rolls_back() {
        let bus = EventBus::new();
        let source = Refusing {
            bus: bus.clone(),
            refuse: EventKind::PointerUp,
        };
        let err = Input::attach(source, Options::default()).err().unwrap();
        assert!(err.contains("PointerUp"), "{err}");
        assert!(bus.is_empty());
    }

    #[test]
    fn drop_detaches() {
        let bus = EventBus::new();
        {
            let _input = Input::attach(bus.clone(), Options::default()).unwrap();
            assert!(!bus.is_empty());
        }
        assert!(bus.is_empty());
    }

    #[test]
    fn querying_unknown_key_does_not_intern_it() {
        let bus = EventBus::new();
        let input = Input::attach(bus.clone(), Options::default()).unwrap();
        assert!(!input.is_key_down("QueriedButNeverPressed"));
        assert_eq!(KeyCode::get("QueriedButNeverPressed"), None);
    }

    #[test]
    fn destroy_is_idempotent() {
        let bus = EventBus::new();
        let mut input = Input::attach(bus.clone(), Options::default()).unwrap();
        input.destroy();
        assert!(!input.is_attached());
        assert!(bus.is_empty());
        input.destroy();
        assert!(bus.is_empty());
    }
}
