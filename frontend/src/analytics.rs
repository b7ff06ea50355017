use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Function, Reflect};

use crate::dom;
use crate::error::SiteResult;
use crate::lead_form::Intent;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnalyticsPayload {
    pub form_id: String,
    pub intent: Intent,
}

impl AnalyticsPayload {
    pub fn new(form_id: impl Into<String>, intent: Intent) -> Self {
        Self {
            form_id: form_id.into(),
            intent,
        }
    }
}

/// Destination for analytics events. Emission is fire-and-forget.
pub trait AnalyticsSink {
    fn emit(&self, event: &str, payload: &AnalyticsPayload);
}

/// Swallows every event. Used when no collector is configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl AnalyticsSink for NoopSink {
    fn emit(&self, event: &str, _payload: &AnalyticsPayload) {
        log::trace!("analytics disabled, dropping {}", event);
    }
}

/// Forwards events to `window.gtag("event", name, payload)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GtagSink;

impl GtagSink {
    fn send(&self, event: &str, payload: &AnalyticsPayload) -> SiteResult<()> {
        let Some(gtag) = dom::global("gtag").and_then(|g| g.dyn_into::<Function>().ok()) else {
            return Ok(());
        };
        let window = dom::window()?;
        let params = serde_wasm_bindgen::to_value(payload)?;
        gtag.call3(&window, &JsValue::from_str("event"), &JsValue::from_str(event), &params)?;
        Ok(())
    }
}

impl AnalyticsSink for GtagSink {
    fn emit(&self, event: &str, payload: &AnalyticsPayload) {
        match self.send(event, payload) {
            Ok(()) => log::debug!("analytics event {} sent ({})", event, payload.intent),
            Err(e) => log::warn!("analytics event {} dropped: {}", event, e),
        }
    }
}

/// Installs the standard gtag queue so events emitted before the real
/// collector loads are buffered in `window.dataLayer`.
pub fn install_gtag_stub() -> SiteResult<()> {
    let window = dom::window()?;
    if dom::global("dataLayer").is_none() {
        Reflect::set(&window, &JsValue::from_str("dataLayer"), &Array::new())?;
    }
    if dom::global("gtag").is_none() {
        // gtag.js only accepts `arguments` objects in the queue
        let stub = Function::new_no_args("window.dataLayer.push(arguments);");
        Reflect::set(&window, &JsValue::from_str("gtag"), &stub)?;
    }
    Ok(())
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Keeps every emitted event for assertions.
    #[derive(Default)]
    pub struct RecordingSink {
        pub events: RefCell<Vec<(String, AnalyticsPayload)>>,
    }

    impl RecordingSink {
        pub fn names(&self) -> Vec<String> {
            self.events.borrow().iter().map(|(name, _)| name.clone()).collect()
        }

        pub fn intents(&self) -> Vec<Intent> {
            self.events.borrow().iter().map(|(_, p)| p.intent).collect()
        }
    }

    impl AnalyticsSink for RecordingSink {
        fn emit(&self, event: &str, payload: &AnalyticsPayload) {
            self.events.borrow_mut().push((event.to_string(), payload.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn payload_serializes_with_lowercase_intent() {
        let payload = AnalyticsPayload::new("leadForm", Intent::Proposal);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({ "form_id": "leadForm", "intent": "proposal" }));
    }

    #[test]
    fn noop_sink_accepts_events() {
        NoopSink.emit("generate_lead", &AnalyticsPayload::new("leadForm", Intent::Lead));
    }
}
