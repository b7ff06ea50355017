use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys::js_sys::{Object, Reflect};
use web_sys::Element;

use super::engine::{Gsap, ScrollTriggerVars, Tween};
use crate::dom;
use crate::error::SiteResult;

const HERO_SUBTITLE: &str = "#hero p.text-base, #hero p.text-lg, #hero .space-y-10 p";

fn intro(delay: f64) -> Tween {
    Tween {
        opacity: Some(0.0),
        y: Some(30.0),
        delay: Some(delay),
        ..Tween::eased(1.0)
    }
}

pub fn animate_hero(gsap: &Gsap) -> SiteResult<()> {
    let document = dom::document()?;
    if let Some(title) = document.query_selector("#hero-title")? {
        gsap.from(title.as_ref(), &intro(0.2))?;
    }
    if let Some(subtitle) = document.query_selector(HERO_SUBTITLE)? {
        gsap.from(subtitle.as_ref(), &intro(0.8))?;
    }
    Ok(())
}

pub fn parallax_images(gsap: &Gsap) -> usize {
    let mut count = 0;
    for img in dom::query_all_in_document(".card-hover img, article img") {
        if img.closest("#hero").ok().flatten().is_some() {
            continue;
        }
        let tween = Tween {
            y: Some(-30.0),
            scroll_trigger: Some(ScrollTriggerVars {
                trigger: Some(img.clone().into()),
                start: "top bottom",
                end: Some("bottom top"),
                scrub: Some(1.0),
                ..ScrollTriggerVars::default()
            }),
            ..Tween::default()
        };
        match gsap.to(img.as_ref(), &tween) {
            Ok(()) => count += 1,
            Err(e) => log::warn!("parallax failed: {}", e),
        }
    }
    count
}

/// Numeric figure shown in the insights section, e.g. `98%` or `4.9`.
#[derive(Clone, Debug, PartialEq)]
pub struct Counter {
    pub value: f64,
    pub suffix: String,
}

impl Counter {
    pub fn parse(text: &str) -> Option<Self> {
        let numeric: String = text.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
        // leading valid number only, like parseFloat
        let mut seen_dot = false;
        let prefix: String = numeric
            .chars()
            .take_while(|c| {
                if *c == '.' {
                    if seen_dot {
                        return false;
                    }
                    seen_dot = true;
                }
                true
            })
            .collect();
        let value = prefix.parse::<f64>().ok()?;
        let suffix = text.chars().filter(|c| !(c.is_ascii_digit() || *c == '.')).collect();
        Some(Self { value, suffix })
    }

    pub fn decimals(&self) -> usize {
        if self.suffix.contains('%') { 0 } else { 1 }
    }

    pub fn render(&self, current: f64) -> String {
        let decimals = self.decimals();
        // ties round up
        let factor = 10f64.powi(decimals as i32);
        let rounded = (current * factor).round() / factor;
        format!("{:.*}{}", decimals, rounded, self.suffix)
    }
}

fn animate_counter(gsap: &Gsap, element: &Element, counter: Counter) -> SiteResult<()> {
    let state = Object::new();
    Reflect::set(&state, &JsValue::from_str("value"), &JsValue::from_f64(0.0))?;

    let tween = Tween {
        value: Some(counter.value),
        scroll_trigger: Some(ScrollTriggerVars::play_once(element.as_ref(), "top 80%")),
        ..Tween::eased(2.0)
    };

    let target = element.clone();
    let progress = state.clone();
    let on_update = Closure::wrap(Box::new(move || {
        let current = Reflect::get(&progress, &JsValue::from_str("value"))
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        target.set_text_content(Some(&counter.render(current)));
    }) as Box<dyn FnMut()>);

    gsap.to_with_update(state.as_ref(), &tween, &on_update)?;
    // the tween may fire long after mount, so the callback lives for the page
    on_update.forget();
    Ok(())
}

pub fn animate_counters(gsap: &Gsap) -> usize {
    let mut count = 0;
    for element in dom::query_all_in_document("#insights .text-2xl") {
        let Some(counter) = element.text_content().and_then(|t| Counter::parse(&t)) else {
            continue;
        };
        match animate_counter(gsap, &element, counter) {
            Ok(()) => count += 1,
            Err(e) => log::warn!("counter animation failed: {}", e),
        }
    }
    count
}

pub fn stagger_lists(gsap: &Gsap) -> usize {
    let mut count = 0;
    for list in dom::query_all_in_document("ul.space-y-3, ul.space-y-2") {
        let Ok(items) = list.query_selector_all("li") else { continue };
        if items.length() == 0 {
            continue;
        }
        let tween = Tween {
            opacity: Some(0.0),
            x: Some(-20.0),
            duration: Some(0.5),
            stagger: Some(0.1),
            scroll_trigger: Some(ScrollTriggerVars::play_once(list.as_ref(), "top 85%")),
            ..Tween::default()
        };
        match gsap.from(items.as_ref(), &tween) {
            Ok(()) => count += 1,
            Err(e) => log::warn!("list stagger failed: {}", e),
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn percent_counters_render_without_decimals() {
        let counter = Counter::parse("98%").unwrap();
        assert_eq!(counter, Counter { value: 98.0, suffix: "%".to_string() });
        assert_eq!(counter.render(42.6), "43%");
        assert_eq!(counter.render(98.0), "98%");
    }

    #[test]
    fn other_counters_keep_one_decimal_and_suffix() {
        let counter = Counter::parse("15+ лет").unwrap();
        assert_eq!(counter.value, 15.0);
        assert_eq!(counter.suffix, "+ лет");
        assert_eq!(counter.render(7.26), "7.3+ лет");

        let rating = Counter::parse("4.9").unwrap();
        assert_eq!(rating.render(4.9), "4.9");
    }

    #[test]
    fn halfway_values_round_up() {
        assert_eq!(Counter::parse("98%").unwrap().render(2.5), "3%");
        assert_eq!(Counter::parse("98%").unwrap().render(0.5), "1%");
        assert_eq!(Counter::parse("12+ лет").unwrap().render(0.25), "0.3+ лет");
    }

    #[test]
    fn text_without_number_is_not_a_counter() {
        assert_eq!(Counter::parse("гарантия"), None);
        assert_eq!(Counter::parse("."), None);
    }

    #[test]
    fn second_dot_ends_the_number() {
        let counter = Counter::parse("1.2.3").unwrap();
        assert_eq!(counter.value, 1.2);
    }

    #[test]
    fn hero_intro_fades_up() {
        let tween = intro(0.8);
        assert_eq!(tween.opacity, Some(0.0));
        assert_eq!(tween.y, Some(30.0));
        assert_eq!(tween.delay, Some(0.8));
        assert_eq!(tween.duration, Some(1.0));
    }
}
