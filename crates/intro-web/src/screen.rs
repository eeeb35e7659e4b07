use intro_core::{AmbientState, AMBIENT_LABEL_UNAVAILABLE};
use web_sys as web;

pub fn set_typed_text(el: &web::Element, text: &str) {
    el.set_text_content(Some(text));
}

/// Enable the enter control once the reveal is complete.
pub fn enable_enter(btn: &web::HtmlButtonElement) {
    btn.set_disabled(false);
    _ = btn.class_list().add_1("ready");
}

pub fn fade_out(screen: &web::Element) {
    _ = screen.class_list().add_1("fade-out");
}

/// Reflect the ambient flag on the toggle control (label + pressed state).
pub fn set_ambient_toggle(el: &web::Element, state: &AmbientState) {
    el.set_text_content(Some(state.label()));
    _ = el.set_attribute("aria-pressed", if state.is_on() { "true" } else { "false" });
}

pub fn mark_ambient_unavailable(el: &web::Element) {
    el.set_text_content(Some(AMBIENT_LABEL_UNAVAILABLE));
}
