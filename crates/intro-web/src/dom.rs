use anyhow::anyhow;
use intro_core::scaled_backing_size;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Every element the intro screen touches, resolved once at startup and
/// injected into the controller. Lookups never happen after this.
#[derive(Clone)]
pub struct IntroDom {
    pub canvas: web::HtmlCanvasElement,
    pub ctx2d: web::CanvasRenderingContext2d,
    pub typed_text: web::Element,
    pub enter_btn: web::HtmlButtonElement,
    pub skip_btn: web::Element,
    pub audio_toggle: web::Element,
    pub screen: web::Element,
    pub parallax_layer: web::HtmlElement,
}

impl IntroDom {
    pub fn lookup(document: &web::Document) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = require(document, "intro-canvas")?
            .dyn_into()
            .map_err(|el| anyhow!("#intro-canvas is not a canvas: {:?}", el))?;
        let ctx2d = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("2d context error: {:?}", e))?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|obj| anyhow!("2d context cast failed: {:?}", obj))?;
        let enter_btn: web::HtmlButtonElement = require(document, "enter-btn")?
            .dyn_into()
            .map_err(|el| anyhow!("#enter-btn is not a button: {:?}", el))?;
        let parallax_layer: web::HtmlElement = require(document, "parallax-layer")?
            .dyn_into()
            .map_err(|el| anyhow!("#parallax-layer is not an html element: {:?}", el))?;

        Ok(Self {
            canvas,
            ctx2d,
            typed_text: require(document, "typed-text")?,
            enter_btn,
            skip_btn: require(document, "skip-btn")?,
            audio_toggle: require(document, "audio-toggle")?,
            screen: require(document, "intro-screen")?,
            parallax_layer,
        })
    }
}

fn require(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}

pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

#[inline]
pub fn on_click(target: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Match the canvas backing store to the viewport at the (capped) device
/// pixel ratio and reset the transform so drawing stays in CSS pixels.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) {
    if let Some(window) = web::window() {
        let (css_w, css_h) = viewport_size(&window);
        let size = scaled_backing_size(css_w, css_h, window.device_pixel_ratio());
        canvas.set_width(size.width);
        canvas.set_height(size.height);
        _ = ctx.set_transform(size.scale, 0.0, 0.0, size.scale, 0.0, 0.0);
    }
}
