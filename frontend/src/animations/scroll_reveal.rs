use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::dom;
use crate::error::{SiteError, SiteResult};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RevealOptions {
    pub duration: u32,
    pub easing: &'static str,
    pub once: bool,
    pub offset: u32,
    pub disable: bool,
}

impl RevealOptions {
    pub fn for_motion_preference(reduced_motion: bool) -> Self {
        Self {
            duration: 800,
            easing: "ease-out-cubic",
            once: true,
            offset: 100,
            disable: reduced_motion,
        }
    }
}

/// Handle on the page's `window.AOS`.
#[derive(Clone, Debug)]
pub struct ScrollReveal {
    inner: JsValue,
}

impl ScrollReveal {
    pub fn new(inner: JsValue) -> Self {
        Self { inner }
    }

    pub fn init(&self, options: &RevealOptions) -> SiteResult<()> {
        let init = dom::method(&self.inner, "init")
            .ok_or_else(|| SiteError::Js("AOS.init is not a function".to_string()))?;
        init.call1(&self.inner, &serde_wasm_bindgen::to_value(options)?)?;
        Ok(())
    }
}

pub fn prefers_reduced_motion() -> bool {
    dom::window()
        .ok()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_disables_reveal() {
        let options = RevealOptions::for_motion_preference(true);
        assert!(options.disable);
        assert_eq!(options.duration, 800);
        assert_eq!(options.offset, 100);

        let json = serde_json::to_value(RevealOptions::for_motion_preference(false)).unwrap();
        assert_eq!(json["easing"], "ease-out-cubic");
        assert_eq!(json["disable"], false);
        assert_eq!(json["once"], true);
    }
}
