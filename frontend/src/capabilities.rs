use std::rc::Rc;

use wasm_bindgen::JsValue;

use crate::analytics::{install_gtag_stub, AnalyticsSink, GtagSink, NoopSink};
use crate::animations::engine::Gsap;
use crate::animations::scroll_reveal::ScrollReveal;
use crate::dom;

/// Optional collaborators found on the page at start-up.
///
/// Missing libraries are a normal configuration: the matching features are
/// simply skipped.
#[derive(Clone)]
pub struct Capabilities {
    pub analytics: Rc<dyn AnalyticsSink>,
    pub gsap: Option<Gsap>,
    pub scroll_trigger: Option<JsValue>,
    pub scroll_reveal: Option<ScrollReveal>,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            analytics: Rc::new(NoopSink),
            gsap: None,
            scroll_trigger: None,
            scroll_reveal: None,
        }
    }
}

impl PartialEq for Capabilities {
    fn eq(&self, other: &Self) -> bool {
        // detected once, compared by identity for the context provider
        Rc::ptr_eq(&self.analytics, &other.analytics)
            && self.gsap.is_some() == other.gsap.is_some()
            && self.scroll_trigger.is_some() == other.scroll_trigger.is_some()
            && self.scroll_reveal.is_some() == other.scroll_reveal.is_some()
    }
}

impl Capabilities {
    pub fn detect() -> Self {
        let analytics: Rc<dyn AnalyticsSink> = match install_gtag_stub() {
            Ok(()) => Rc::new(GtagSink),
            Err(e) => {
                log::warn!("analytics unavailable: {}", e);
                Rc::new(NoopSink)
            }
        };
        let caps = Self {
            analytics,
            gsap: dom::global("gsap").map(Gsap::new),
            scroll_trigger: dom::global("ScrollTrigger"),
            scroll_reveal: dom::global("AOS").map(ScrollReveal::new),
        };
        log::info!(
            "capabilities: gsap={} scroll_trigger={} aos={}",
            caps.gsap.is_some(),
            caps.scroll_trigger.is_some(),
            caps.scroll_reveal.is_some()
        );
        caps
    }
}
