use crate::audio::{self, AmbientGraph};
use crate::dom::{self, IntroDom};
use crate::frame::{FrameContext, FrameLoop};
use crate::screen;
use glam::Vec2;
use intro_core::{
    parallax_offset, AmbientState, ParticleField, TypingReveal, FADE_OUT_MS, HOME_URL,
    TYPED_MESSAGE, TYPING_TICK_MS,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Owns every piece of intro-screen state for one page session. Clones share
/// the same underlying state; event closures capture a clone.
#[derive(Clone)]
pub struct IntroApp {
    pub dom: IntroDom,
    pub reduced_motion: bool,
    field: Rc<RefCell<ParticleField>>,
    typing: Rc<RefCell<TypingReveal>>,
    ambient: Rc<RefCell<AmbientState>>,
    graph: Rc<RefCell<Option<AmbientGraph>>>,
    frame_loop: FrameLoop,
    typing_timer: Rc<RefCell<Option<i32>>>,
}

impl IntroApp {
    pub fn new(dom: IntroDom, reduced_motion: bool, seed: u64) -> Self {
        let field = Rc::new(RefCell::new(ParticleField::new(seed)));
        let frame_loop = FrameLoop::new(FrameContext {
            field: field.clone(),
            ctx2d: dom.ctx2d.clone(),
        });
        Self {
            dom,
            reduced_motion,
            field,
            typing: Rc::new(RefCell::new(TypingReveal::new(TYPED_MESSAGE))),
            ambient: Rc::new(RefCell::new(AmbientState::default())),
            graph: Rc::new(RefCell::new(None)),
            frame_loop,
            typing_timer: Rc::new(RefCell::new(None)),
        }
    }

    pub fn start(&self) {
        self.size_canvas_and_repopulate();
        self.start_typing();
        if !self.reduced_motion {
            self.frame_loop.start();
        }
    }

    /// Resize the backing store and replace the particle set wholesale.
    pub fn on_resize(&self) {
        self.size_canvas_and_repopulate();
    }

    pub fn on_visibility_change(&self, hidden: bool) {
        if hidden {
            self.frame_loop.stop();
            log::info!("[frame] paused while hidden");
        } else if !self.reduced_motion {
            self.frame_loop.start();
        }
    }

    /// Cancel timers and the frame chain. The audio graph is deliberately
    /// left for the browser to reclaim on navigation.
    pub fn dispose(&self) {
        self.frame_loop.stop();
        self.clear_typing_timer();
    }

    fn size_canvas_and_repopulate(&self) {
        dom::sync_canvas_backing_size(&self.dom.canvas, &self.dom.ctx2d);
        if let Some(window) = web::window() {
            let (w, h) = dom::viewport_size(&window);
            self.field.borrow_mut().populate(w as f32, h as f32);
        }
    }

    // --- typing reveal ---

    fn start_typing(&self) {
        if self.reduced_motion {
            self.finish_typing();
            return;
        }
        let app = self.clone();
        let closure = Closure::wrap(Box::new(move || app.tick_typing()) as Box<dyn FnMut()>);
        if let Some(window) = web::window() {
            match window.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                TYPING_TICK_MS,
            ) {
                Ok(id) => *self.typing_timer.borrow_mut() = Some(id),
                Err(e) => log::error!("[typing] interval error: {:?}", e),
            }
        }
        closure.forget();
    }

    fn tick_typing(&self) {
        let visible = {
            let mut typing = self.typing.borrow_mut();
            typing.advance();
            typing.visible()
        };
        screen::set_typed_text(&self.dom.typed_text, &visible);
        if self.typing.borrow().is_done() {
            self.clear_typing_timer();
            self.on_typing_done();
        }
    }

    /// Force-complete the reveal. No-op once typing is done.
    pub fn skip_typing(&self) {
        if self.typing.borrow().is_done() {
            return;
        }
        self.clear_typing_timer();
        self.finish_typing();
    }

    fn finish_typing(&self) {
        let message = {
            let mut typing = self.typing.borrow_mut();
            typing.skip();
            typing.message()
        };
        screen::set_typed_text(&self.dom.typed_text, &message);
        self.on_typing_done();
    }

    fn on_typing_done(&self) {
        log::info!("[typing] reveal complete");
        screen::enable_enter(&self.dom.enter_btn);
    }

    fn clear_typing_timer(&self) {
        if let Some(id) = self.typing_timer.borrow_mut().take() {
            if let Some(window) = web::window() {
                window.clear_interval_with_handle(id);
            }
        }
    }

    // --- ambient audio ---

    pub fn toggle_ambient(&self) {
        let app = self.clone();
        spawn_local(async move {
            if app.toggle_ambient_inner().await.is_err() {
                screen::mark_ambient_unavailable(&app.dom.audio_toggle);
            }
        });
    }

    async fn toggle_ambient_inner(&self) -> Result<(), ()> {
        if self.graph.borrow().is_none() {
            let graph = audio::build_ambient_graph()?;
            log::info!("[audio] ambient graph ready");
            *self.graph.borrow_mut() = Some(graph);
        }

        // Clone the JS handle out so no RefCell borrow is held across await.
        let audio_ctx = {
            let graph = self.graph.borrow();
            graph.as_ref().ok_or(())?.audio_ctx.clone()
        };
        if audio_ctx.state() == web::AudioContextState::Suspended {
            let resumed = audio_ctx.resume().map_err(|e| {
                log::error!("[audio] resume error: {:?}", e);
            })?;
            JsFuture::from(resumed).await.map_err(|e| {
                log::error!("[audio] resume rejected: {:?}", e);
            })?;
        }

        let target = self.ambient.borrow_mut().toggle();
        if let Some(graph) = self.graph.borrow().as_ref() {
            graph.ramp_master_gain(target);
        }
        let state = *self.ambient.borrow();
        screen::set_ambient_toggle(&self.dom.audio_toggle, &state);
        Ok(())
    }

    // --- navigation handoff ---

    /// Fade the screen out, then navigate after the fixed delay. Repeated
    /// triggers schedule redundant timeouts that all resolve identically.
    pub fn enter(&self) {
        screen::fade_out(&self.dom.screen);
        log::info!("[intro] entering home");
        let closure = Closure::wrap(Box::new(move || {
            if let Some(window) = web::window() {
                _ = window.location().set_href(HOME_URL);
            }
        }) as Box<dyn FnMut()>);
        if let Some(window) = web::window() {
            _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                FADE_OUT_MS,
            );
        }
        closure.forget();
    }

    // --- parallax ---

    pub fn apply_parallax(&self, cursor: Vec2) {
        if let Some(window) = web::window() {
            let (w, h) = dom::viewport_size(&window);
            let offset = parallax_offset(cursor, Vec2::new(w as f32, h as f32));
            _ = self.dom.parallax_layer.style().set_property(
                "transform",
                &format!("translate3d({}px, {}px, 0)", offset.x, offset.y),
            );
        }
    }

    pub fn reset_parallax(&self) {
        _ = self
            .dom
            .parallax_layer
            .style()
            .set_property("transform", "translate3d(0, 0, 0)");
    }
}
