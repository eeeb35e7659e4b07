#![cfg(target_arch = "wasm32")]

use wasm_bindgen::prelude::*;
use web_sys as web;

mod app;
mod audio;
mod dom;
mod events;
mod frame;
mod screen;

use app::IntroApp;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("intro-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let dom = dom::IntroDom::lookup(&document)?;

    // Sampled once; nothing re-reads the media query for the page's lifetime.
    let reduced_motion = dom::prefers_reduced_motion(&window);
    if reduced_motion {
        log::info!("[intro] reduced motion requested; animation suppressed");
    }

    let app = IntroApp::new(dom, reduced_motion, rand::random::<u64>());
    events::wire(&app);
    app.start();
    Ok(())
}
