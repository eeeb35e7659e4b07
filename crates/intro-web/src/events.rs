use crate::app::IntroApp;
use crate::dom;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach every intro-screen listener. Parallax listeners are not attached
/// at all under reduced motion.
pub fn wire(app: &IntroApp) {
    wire_controls(app);
    wire_resize(app);
    wire_visibility(app);
    wire_pagehide(app);
    if !app.reduced_motion {
        wire_parallax(app);
    }
}

fn wire_controls(app: &IntroApp) {
    let skip_app = app.clone();
    dom::on_click(&app.dom.skip_btn, move || skip_app.skip_typing());

    let enter_app = app.clone();
    dom::on_click(&app.dom.enter_btn, move || enter_app.enter());

    let audio_app = app.clone();
    dom::on_click(&app.dom.audio_toggle, move || audio_app.toggle_ambient());
}

fn wire_resize(app: &IntroApp) {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move || app.on_resize()) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_visibility(app: &IntroApp) {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Some(document) = dom::window_document() {
            app.on_visibility_change(document.hidden());
        }
    }) as Box<dyn FnMut()>);
    if let Some(document) = dom::window_document() {
        _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pagehide(app: &IntroApp) {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move || app.dispose()) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_parallax(app: &IntroApp) {
    let move_app = app.clone();
    let move_closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        move_app.apply_parallax(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("mousemove", move_closure.as_ref().unchecked_ref());
    }
    move_closure.forget();

    let leave_app = app.clone();
    let leave_closure = Closure::wrap(Box::new(move || leave_app.reset_parallax()) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("mouseleave", leave_closure.as_ref().unchecked_ref());
    }
    leave_closure.forget();
}
