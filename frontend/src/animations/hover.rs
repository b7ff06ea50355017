use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use super::engine::{Gsap, Tween};
use crate::dom::{self, ListenerGuard};
use crate::error::SiteResult;

const CARD_SHADOW_HOVER: &str = "0 25px 50px rgba(18, 18, 18, 0.15)";
const CARD_SHADOW_REST: &str = "0 20px 45px rgba(18, 18, 18, 0.12)";
const RIPPLE_MS: u32 = 600;

/// Images inside a fixed aspect-ratio box start pre-scaled.
pub fn is_aspect_container(class_name: &str) -> bool {
    class_name.contains("aspect-[3/2]") || class_name.contains("aspect-[4/3]")
}

pub fn image_base_scale(in_aspect_container: bool) -> f64 {
    if in_aspect_container { 1.2 } else { 1.0 }
}

pub fn card_tween(hovered: bool) -> Tween {
    let (y, scale, shadow, border) = if hovered {
        (-8.0, 1.02, CARD_SHADOW_HOVER, "var(--accent)")
    } else {
        (0.0, 1.0, CARD_SHADOW_REST, "var(--line)")
    };
    Tween {
        y: Some(y),
        scale: Some(scale),
        box_shadow: Some(shadow),
        border_color: Some(border),
        ..Tween::eased(0.4)
    }
}

pub fn card_image_tween(base_scale: f64, hovered: bool) -> Tween {
    let scale = if hovered { base_scale * 1.1 } else { base_scale };
    Tween {
        scale: Some(scale),
        ..Tween::eased(0.6)
    }
}

pub fn card_content_tween(hovered: bool) -> Tween {
    Tween {
        y: Some(if hovered { -2.0 } else { 0.0 }),
        ..Tween::eased(0.4)
    }
}

pub fn cta_tween(hovered: bool) -> Tween {
    let (y, scale) = if hovered { (-3.0, 1.05) } else { (0.0, 1.0) };
    Tween {
        y: Some(y),
        scale: Some(scale),
        ..Tween::eased(0.3)
    }
}

/// Square ripple centred on the click point, in button-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    pub fn at(rect_left: f64, rect_top: f64, width: f64, height: f64, client_x: f64, client_y: f64) -> Self {
        let size = width.max(height);
        Self {
            size,
            left: client_x - rect_left - size / 2.0,
            top: client_y - rect_top - size / 2.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; border-radius: 50%; \
             background: rgba(255, 255, 255, 0.5); left: {left}px; top: {top}px; \
             pointer-events: none; transform: scale(0);",
            size = self.size,
            left = self.left,
            top = self.top,
        )
    }
}

#[derive(Clone)]
struct Card {
    root: Element,
    image: Option<Element>,
    content: Option<Element>,
    base_scale: f64,
}

impl Card {
    fn animate(&self, gsap: &Gsap, hovered: bool) -> SiteResult<()> {
        gsap.to(self.root.as_ref(), &card_tween(hovered))?;
        if let Some(image) = &self.image {
            gsap.to(image.as_ref(), &card_image_tween(self.base_scale, hovered))?;
        }
        if let Some(content) = &self.content {
            gsap.to(content.as_ref(), &card_content_tween(hovered))?;
        }
        Ok(())
    }
}

pub fn bind_cards(gsap: &Gsap, guard: &mut ListenerGuard) -> usize {
    let cards = dom::query_all_in_document(".card-hover");
    for root in &cards {
        let image = root.query_selector("img").ok().flatten();
        let content = root.query_selector("div:last-child").ok().flatten();
        let in_aspect = image
            .as_ref()
            .and_then(|img| img.parent_element())
            .map(|parent| is_aspect_container(&parent.class_name()))
            .unwrap_or(false);
        let base_scale = image_base_scale(in_aspect);
        if let (true, Some(img)) = (in_aspect, &image) {
            let initial = Tween { scale: Some(base_scale), ..Tween::default() };
            if let Err(e) = gsap.set(img.as_ref(), &initial) {
                log::warn!("card image pre-scale failed: {}", e);
            }
        }

        let card = Card { root: root.clone(), image, content, base_scale };
        for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let gsap = gsap.clone();
            let card = card.clone();
            guard.listen(root.as_ref(), event, move |_| {
                if let Err(e) = card.animate(&gsap, hovered) {
                    log::warn!("card hover animation failed: {}", e);
                }
            });
        }
    }
    cards.len()
}

fn spawn_ripple(gsap: &Gsap, button: &Element, event: &MouseEvent) -> SiteResult<()> {
    let rect = button.get_bounding_client_rect();
    let ripple = Ripple::at(
        rect.left(),
        rect.top(),
        rect.width(),
        rect.height(),
        f64::from(event.client_x()),
        f64::from(event.client_y()),
    );

    let span = dom::document()?.create_element("span")?;
    span.set_attribute("style", &ripple.style())?;
    if let Some(button) = button.dyn_ref::<HtmlElement>() {
        let style = button.style();
        style.set_property("position", "relative")?;
        style.set_property("overflow", "hidden")?;
    }
    button.append_child(&span)?;

    let fade = Tween {
        scale: Some(2.0),
        opacity: Some(0.0),
        ..Tween::eased(f64::from(RIPPLE_MS) / 1000.0)
    };
    gsap.to(span.as_ref(), &fade)?;

    let timeout = Timeout::new(RIPPLE_MS, move || span.remove());
    timeout.forget();
    Ok(())
}

pub fn bind_cta_buttons(gsap: &Gsap, guard: &mut ListenerGuard) -> usize {
    let buttons = dom::query_all_in_document(".cta");
    for button in &buttons {
        for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let gsap = gsap.clone();
            let target = button.clone();
            guard.listen(button.as_ref(), event, move |_| {
                if let Err(e) = gsap.to(target.as_ref(), &cta_tween(hovered)) {
                    log::warn!("cta hover animation failed: {}", e);
                }
            });
        }

        let gsap = gsap.clone();
        let target = button.clone();
        guard.listen(button.as_ref(), "click", move |e| {
            let Some(click) = e.dyn_ref::<MouseEvent>() else { return };
            if let Err(err) = spawn_ripple(&gsap, &target, click) {
                log::warn!("ripple failed: {}", err);
            }
        });
    }
    buttons.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn aspect_images_start_zoomed() {
        assert!(is_aspect_container("relative aspect-[3/2] overflow-hidden"));
        assert!(is_aspect_container("aspect-[4/3]"));
        assert!(!is_aspect_container("aspect-square"));
        assert_eq!(image_base_scale(true), 1.2);
        assert_eq!(image_base_scale(false), 1.0);
    }

    #[test]
    fn hover_zoom_is_relative_to_base_scale() {
        let zoomed = card_image_tween(1.2, true).scale.unwrap();
        assert!((zoomed - 1.32).abs() < 1e-9);
        assert_eq!(card_image_tween(1.2, false).scale, Some(1.2));
        assert_eq!(card_image_tween(1.0, true).scale, Some(1.1));
    }

    #[test]
    fn card_leave_restores_resting_style() {
        let leave = card_tween(false);
        assert_eq!(leave.y, Some(0.0));
        assert_eq!(leave.scale, Some(1.0));
        assert_eq!(leave.border_color, Some("var(--line)"));
        assert_eq!(leave.box_shadow, Some(CARD_SHADOW_REST));
        assert_eq!(card_tween(true).border_color, Some("var(--accent)"));
    }

    #[test]
    fn ripple_is_centred_on_click() {
        let ripple = Ripple::at(100.0, 50.0, 200.0, 40.0, 150.0, 70.0);
        assert_eq!(ripple, Ripple { size: 200.0, left: -50.0, top: -80.0 });
        assert!(ripple.style().contains("width: 200px"));
        assert!(ripple.style().contains("left: -50px"));
    }
}
