use crate::dom;
use intro_core::{Particle, ParticleField, GLOW_RADIUS_MULT};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: Rc<RefCell<ParticleField>>,
    pub ctx2d: web::CanvasRenderingContext2d,
}

impl FrameContext {
    pub fn frame(&mut self) {
        if let Some(window) = web::window() {
            let (css_w, css_h) = dom::viewport_size(&window);
            self.ctx2d.clear_rect(0.0, 0.0, css_w, css_h);

            let mut field = self.field.borrow_mut();
            field.step(css_w as f32, css_h as f32);
            for p in field.particles.iter() {
                draw_particle(&self.ctx2d, p);
            }
        }
    }
}

fn draw_particle(ctx: &web::CanvasRenderingContext2d, p: &Particle) {
    let (x, y) = (p.pos.x as f64, p.pos.y as f64);
    let halo = (p.radius * GLOW_RADIUS_MULT) as f64;

    // Soft halo first, solid core dot on top.
    if let Ok(gradient) = ctx.create_radial_gradient(x, y, 0.0, x, y, halo) {
        let [r, g, b] = p.hue.glow_rgb();
        _ = gradient.add_color_stop(0.0, &format!("rgba({}, {}, {}, {})", r, g, b, p.glow));
        _ = gradient.add_color_stop(1.0, &format!("rgba({}, {}, {}, 0)", r, g, b));
        ctx.begin_path();
        ctx.set_fill_style_canvas_gradient(&gradient);
        _ = ctx.arc(x, y, halo, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    ctx.begin_path();
    ctx.set_fill_style_str(p.hue.core_rgba());
    _ = ctx.arc(x, y, p.radius as f64, 0.0, std::f64::consts::PI * 2.0);
    ctx.fill();
}

/// requestAnimationFrame chain that records the pending frame id, so the loop
/// can be canceled when the page is hidden and restarted fresh (a new chain,
/// never a resumed stale callback) when it becomes visible again.
#[derive(Clone)]
pub struct FrameLoop {
    ctx: Rc<RefCell<FrameContext>>,
    raf_id: Rc<RefCell<Option<i32>>>,
}

impl FrameLoop {
    pub fn new(ctx: FrameContext) -> Self {
        Self {
            ctx: Rc::new(RefCell::new(ctx)),
            raf_id: Rc::new(RefCell::new(None)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.raf_id.borrow().is_some()
    }

    /// Begin a fresh frame chain. No-op while one is already scheduled.
    pub fn start(&self) {
        if self.is_running() {
            return;
        }
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let this = self.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            this.ctx.borrow_mut().frame();
            if let Some(w) = web::window() {
                if let Ok(id) = w.request_animation_frame(
                    tick_clone
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                ) {
                    *this.raf_id.borrow_mut() = Some(id);
                }
            }
        }) as Box<dyn FnMut()>));
        if let Some(w) = web::window() {
            if let Ok(id) =
                w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
            {
                *self.raf_id.borrow_mut() = Some(id);
            }
        }
    }

    /// Cancel the pending frame, if any.
    pub fn stop(&self) {
        if let Some(id) = self.raf_id.borrow_mut().take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}
