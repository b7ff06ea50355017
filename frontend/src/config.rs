use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Viewport width (CSS px) from which the desktop navigation is shown.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// Element ids the behaviour layer binds to
pub const MENU_BUTTON_ID: &str = "menuBtn";
pub const MOBILE_NAV_ID: &str = "mobileNav";
pub const YEAR_ID: &str = "year";
pub const LEAD_FORM_ID: &str = "leadForm";
pub const FORM_MESSAGE_ID: &str = "formMessage";
pub const PROPOSAL_BUTTON_ID: &str = "btnKP";

// Analytics
pub const EVENT_GENERATE_LEAD: &str = "generate_lead";
pub const EVENT_FORM_SUBMIT: &str = "form_submit";

// Lead form feedback
pub const MSG_REJECTED: &str = "Проверьте обязательные поля и согласие.";
pub const MSG_ACCEPTED: &str = "Заявка отправлена. Свяжемся для обсуждения деталей.";
pub const COLOR_SUCCESS: &str = "#16a34a";
pub const COLOR_NEUTRAL: &str = "var(--muted)";
