//! Open/closed state of the mobile navigation panel.
//!
//! The header component feeds DOM events through [`NavState::apply`] and
//! mirrors the result into `aria-expanded` on the toggle button and
//! `hidden` on the panel, so both always agree.

use crate::config::MOBILE_BREAKPOINT_PX;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavEvent {
    Toggle,
    LinkClicked,
    Resized { width: f64 },
}

impl NavState {
    pub fn closed() -> Self {
        Self { open: false }
    }

    pub fn apply(self, event: NavEvent) -> Self {
        match event {
            NavEvent::Toggle => Self { open: !self.open },
            NavEvent::LinkClicked => Self::closed(),
            NavEvent::Resized { width } if is_desktop(width) => Self::closed(),
            NavEvent::Resized { .. } => self,
        }
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    pub fn panel_hidden(self) -> bool {
        !self.open
    }
}

pub fn is_desktop(width: f64) -> bool {
    width >= MOBILE_BREAKPOINT_PX
}
