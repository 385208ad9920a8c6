//! DOM-backed event source.
//!
//! Keyboard listeners go on the surface's owning document, so keys are seen
//! even when the surface itself is not focusable. Pointer and blur listeners
//! go on the surface. Pointer coordinates are translated to surface-local
//! space with the element's `offsetLeft` / `offsetTop`, read at event time.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use stick_core::key::KeyCode;
use stick_core::model::round2;
use stick_input::{EventKind, EventSource, Handler, InputEvent, ListenerId};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, EventTarget, HtmlElement, KeyboardEvent, MouseEvent, Node};

/// Stringify a thrown JS value.
pub(crate) fn js_error(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Client coordinates → surface-local coordinates, rounded to hundredths.
pub(crate) fn local_position(client_x: f64, client_y: f64, offset: (i32, i32)) -> (f64, f64) {
    (
        round2(client_x - f64::from(offset.0)),
        round2(client_y - f64::from(offset.1)),
    )
}

/// Read a numeric event property as `f64`. `MouseEvent::client_x` is typed
/// `i32` and drops the fractional part pointer events carry.
fn number_property(event: &Event, name: &str) -> Option<f64> {
    js_sys::Reflect::get(event, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.as_f64())
}

struct Registration {
    kind: EventKind,
    target: EventTarget,
    name: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

struct DomInner {
    surface: EventTarget,
    /// Offset and style source; `None` when the surface is the document.
    element: Option<HtmlElement>,
    document: Option<Document>,
    pointer_events: bool,
    registrations: RefCell<HashMap<ListenerId, Registration>>,
}

/// Event source listening on a DOM element (or the document itself).
#[derive(Clone)]
pub struct DomSource {
    inner: Rc<DomInner>,
}

impl DomSource {
    pub fn new(surface: EventTarget, pointer_events: bool) -> Self {
        let element = surface.dyn_ref::<HtmlElement>().cloned();
        let document = if let Some(doc) = surface.dyn_ref::<Document>() {
            Some(doc.clone())
        } else {
            surface
                .dyn_ref::<Node>()
                .and_then(Node::owner_document)
                .or_else(|| web_sys::window().and_then(|w| w.document()))
        };
        Self {
            inner: Rc::new(DomInner {
                surface,
                element,
                document,
                pointer_events,
                registrations: RefCell::new(HashMap::new()),
            }),
        }
    }

    /// Stop the browser from turning drags into scroll/zoom gestures.
    pub fn disable_touch_action(&self) -> Result<(), String> {
        match &self.inner.element {
            Some(el) => el
                .style()
                .set_property("touch-action", "none")
                .map_err(|e| js_error(&e)),
            None => Ok(()),
        }
    }

    fn target_for(&self, kind: EventKind) -> EventTarget {
        match (&self.inner.document, kind.is_keyboard()) {
            (Some(doc), true) => doc.clone().unchecked_into(),
            _ => self.inner.surface.clone(),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.registrations.borrow().len()
    }
}

fn element_offset(element: Option<&HtmlElement>) -> (i32, i32) {
    element
        .map(|el| (el.offset_left(), el.offset_top()))
        .unwrap_or((0, 0))
}

/// Build an `InputEvent` from a raw DOM event of the subscribed kind.
fn translate(kind: EventKind, event: &Event, offset: (i32, i32)) -> Option<InputEvent> {
    match kind {
        EventKind::KeyDown | EventKind::KeyUp => {
            let key = event.dyn_ref::<KeyboardEvent>()?;
            let code = KeyCode::parse(&key.code()).ok()?;
            Some(if kind == EventKind::KeyDown {
                InputEvent::KeyDown { code }
            } else {
                InputEvent::KeyUp { code }
            })
        }
        EventKind::PointerDown | EventKind::PointerMove | EventKind::PointerUp => {
            let mouse = event.dyn_ref::<MouseEvent>()?;
            let client_x =
                number_property(event, "clientX").unwrap_or_else(|| f64::from(mouse.client_x()));
            let client_y =
                number_property(event, "clientY").unwrap_or_else(|| f64::from(mouse.client_y()));
            let (x, y) = local_position(client_x, client_y, offset);
            Some(match kind {
                EventKind::PointerDown => InputEvent::from_pointer_down(x, y, mouse.button()),
                EventKind::PointerUp => InputEvent::from_pointer_up(x, y, mouse.button()),
                _ => InputEvent::from_pointer_move(x, y),
            })
        }
        EventKind::Blur => Some(InputEvent::Blur),
    }
}

impl EventSource for DomSource {
    fn subscribe(&self, kind: EventKind, handler: Handler) -> Result<ListenerId, String> {
        let name = kind.dom_name(self.inner.pointer_events);
        let target = self.target_for(kind);
        let element = self.inner.element.clone();

        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let offset = element_offset(element.as_ref());
            match translate(kind, &event, offset) {
                Some(input) => handler(&input),
                None => log::trace!("dropped unreadable {name} event"),
            }
        });

        target
            .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            .map_err(|e| js_error(&e))?;

        let id = ListenerId::next();
        self.inner.registrations.borrow_mut().insert(
            id,
            Registration {
                kind,
                target,
                name,
                closure,
            },
        );
        log::trace!("listening for {name}");
        Ok(id)
    }

    fn unsubscribe(&self, kind: EventKind, id: ListenerId) -> bool {
        let reg = {
            let mut registrations = self.inner.registrations.borrow_mut();
            match registrations.remove(&id) {
                Some(reg) if reg.kind == kind => reg,
                Some(other) => {
                    registrations.insert(id, other);
                    return false;
                }
                None => return false,
            }
        };
        if let Err(e) = reg
            .target
            .remove_event_listener_with_callback(reg.name, reg.closure.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove {} listener: {}", reg.name, js_error(&e));
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_position_subtracts_offset() {
        assert_eq!(local_position(120.0, 80.0, (20, 30)), (100.0, 50.0));
        assert_eq!(local_position(5.0, 5.0, (0, 0)), (5.0, 5.0));
        assert_eq!(local_position(0.0, 0.0, (10, 10)), (-10.0, -10.0));
    }

    #[test]
    fn local_position_keeps_fractional_pixels() {
        assert_eq!(local_position(120.37, 80.5, (20, 30)), (100.37, 50.5));
        assert_eq!(local_position(10.75, 3.333, (0, 0)), (10.75, 3.33));
        assert_eq!(local_position(20.004, 0.0, (20, 0)), (0.0, 0.0));
    }

    #[test]
    fn document_surface_has_no_offset() {
        assert_eq!(element_offset(None), (0, 0));
    }
}
