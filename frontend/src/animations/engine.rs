use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys::js_sys::{Function, Reflect};

use crate::dom;
use crate::error::{SiteError, SiteResult};

pub const EASE_OUT: &str = "power2.out";

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollTriggerVars {
    #[serde(skip)]
    pub trigger: Option<JsValue>,
    pub start: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrub: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggle_actions: Option<&'static str>,
}

impl ScrollTriggerVars {
    /// Plays once when `trigger` reaches `start`.
    pub fn play_once(trigger: &JsValue, start: &'static str) -> Self {
        Self {
            trigger: Some(trigger.clone()),
            start,
            toggle_actions: Some("play none none none"),
            ..Self::default()
        }
    }
}

/// Tween parameters handed to GSAP; unset fields are left out.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tween {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stagger: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ease: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_trigger: Option<ScrollTriggerVars>,
}

impl Tween {
    pub fn eased(duration: f64) -> Self {
        Self {
            duration: Some(duration),
            ease: Some(EASE_OUT),
            ..Self::default()
        }
    }

    pub fn to_js(&self) -> SiteResult<JsValue> {
        let vars = serde_wasm_bindgen::to_value(self)?;
        if let Some(trigger) = self.scroll_trigger.as_ref().and_then(|st| st.trigger.as_ref()) {
            let st = Reflect::get(&vars, &JsValue::from_str("scrollTrigger"))?;
            Reflect::set(&st, &JsValue::from_str("trigger"), trigger)?;
        }
        Ok(vars)
    }
}

/// Handle on the page's `window.gsap`.
#[derive(Clone, Debug)]
pub struct Gsap {
    inner: JsValue,
}

impl Gsap {
    pub fn new(inner: JsValue) -> Self {
        Self { inner }
    }

    fn call(&self, name: &'static str, args: &[&JsValue]) -> SiteResult<JsValue> {
        let f: Function = dom::method(&self.inner, name)
            .ok_or_else(|| SiteError::Js(format!("gsap.{} is not a function", name)))?;
        let result = match args {
            [a] => f.call1(&self.inner, a)?,
            [a, b] => f.call2(&self.inner, a, b)?,
            [a, b, c] => f.call3(&self.inner, a, b, c)?,
            _ => f.call0(&self.inner)?,
        };
        Ok(result)
    }

    pub fn register_plugin(&self, plugin: &JsValue) -> SiteResult<()> {
        self.call("registerPlugin", &[plugin]).map(|_| ())
    }

    pub fn set(&self, target: &JsValue, vars: &Tween) -> SiteResult<()> {
        self.call("set", &[target, &vars.to_js()?]).map(|_| ())
    }

    pub fn to(&self, target: &JsValue, vars: &Tween) -> SiteResult<()> {
        self.call("to", &[target, &vars.to_js()?]).map(|_| ())
    }

    pub fn from(&self, target: &JsValue, vars: &Tween) -> SiteResult<()> {
        self.call("from", &[target, &vars.to_js()?]).map(|_| ())
    }

    /// `gsap.to` with an `onUpdate` callback attached to the vars.
    pub fn to_with_update(
        &self,
        target: &JsValue,
        vars: &Tween,
        on_update: &Closure<dyn FnMut()>,
    ) -> SiteResult<()> {
        let js_vars = vars.to_js()?;
        Reflect::set(&js_vars, &JsValue::from_str("onUpdate"), on_update.as_ref())?;
        self.call("to", &[target, &js_vars]).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unset_fields_are_omitted() {
        let tween = Tween {
            y: Some(-8.0),
            scale: Some(1.02),
            box_shadow: Some("0 25px 50px rgba(18, 18, 18, 0.15)"),
            ..Tween::eased(0.4)
        };
        let json = serde_json::to_value(&tween).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "y": -8.0,
                "scale": 1.02,
                "boxShadow": "0 25px 50px rgba(18, 18, 18, 0.15)",
                "duration": 0.4,
                "ease": "power2.out"
            })
        );
    }

    #[test]
    fn scroll_trigger_uses_gsap_keys() {
        let tween = Tween {
            y: Some(-30.0),
            scroll_trigger: Some(ScrollTriggerVars {
                start: "top bottom",
                end: Some("bottom top"),
                scrub: Some(1.0),
                ..ScrollTriggerVars::default()
            }),
            ..Tween::default()
        };
        let json = serde_json::to_value(&tween).unwrap();
        assert_eq!(
            json["scrollTrigger"],
            serde_json::json!({ "start": "top bottom", "end": "bottom top", "scrub": 1.0 })
        );
    }
}
