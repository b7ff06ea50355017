//! Decorative hover and scroll effects. Timing and easing belong to GSAP
//! and AOS; this layer only picks targets and parameters.

pub mod engine;
pub mod hover;
pub mod scroll;
pub mod scroll_reveal;

use crate::capabilities::Capabilities;
use crate::dom::ListenerGuard;
use scroll_reveal::{prefers_reduced_motion, RevealOptions};

/// Binds every effect to the current page. Dropping the returned guard
/// detaches the hover/click listeners.
pub fn init(caps: &Capabilities) -> ListenerGuard {
    let mut guard = ListenerGuard::new();

    if let Some(reveal) = &caps.scroll_reveal {
        let options = RevealOptions::for_motion_preference(prefers_reduced_motion());
        if let Err(e) = reveal.init(&options) {
            log::warn!("AOS init failed: {}", e);
        }
    }

    let Some(gsap) = &caps.gsap else {
        gloo_console::warn!("GSAP is not loaded");
        return guard;
    };

    if let Some(plugin) = &caps.scroll_trigger {
        if let Err(e) = gsap.register_plugin(plugin) {
            log::warn!("ScrollTrigger registration failed: {}", e);
        }
    }

    let cards = hover::bind_cards(gsap, &mut guard);
    let buttons = hover::bind_cta_buttons(gsap, &mut guard);
    if let Err(e) = scroll::animate_hero(gsap) {
        log::warn!("hero animation failed: {}", e);
    }
    let parallax = scroll::parallax_images(gsap);
    let counters = scroll::animate_counters(gsap);
    let lists = scroll::stagger_lists(gsap);

    log::debug!(
        "animations bound: {} cards, {} buttons, {} parallax images, {} counters, {} lists ({} listeners)",
        cards,
        buttons,
        parallax,
        counters,
        lists,
        guard.len()
    );
    guard
}
