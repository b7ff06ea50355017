use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};
use web_sys::{Document, Element, Event, EventTarget, Window};

use crate::error::{SiteError, SiteResult};

pub fn window() -> SiteResult<Window> {
    web_sys::window().ok_or(SiteError::MissingWindow)
}

pub fn document() -> SiteResult<Document> {
    window()?.document().ok_or(SiteError::MissingDocument)
}

pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let mut found = Vec::new();
    if let Ok(list) = root.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                found.push(el);
            }
        }
    }
    found
}

pub fn query_all_in_document(selector: &str) -> Vec<Element> {
    match document().ok().and_then(|d| d.document_element()) {
        Some(root) => query_all(&root, selector),
        None => Vec::new(),
    }
}

/// Reads `window[name]`, treating `undefined` and `null` as absent.
pub fn global(name: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str(name)).ok()?;
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    }
}

/// Reads `target[name]` if it is callable.
pub fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
}

struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// Owns event listeners and detaches them when dropped.
#[derive(Default)]
pub struct ListenerGuard {
    listeners: Vec<Listener>,
}

impl ListenerGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listen<F>(&mut self, target: &EventTarget, event: &'static str, handler: F)
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        match target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            Ok(()) => self.listeners.push(Listener {
                target: target.clone(),
                event,
                callback,
            }),
            Err(e) => log::warn!("failed to bind {} listener: {}", event, SiteError::from(e)),
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            let _ = listener.target.remove_event_listener_with_callback(
                listener.event,
                listener.callback.as_ref().unchecked_ref(),
            );
        }
    }
}
