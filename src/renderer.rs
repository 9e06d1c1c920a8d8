// Canvas 2d backend for the particle field, plus the window wiring that keeps the
// canvas sized to the viewport and redraws it every animation frame.

use crate::color::Color;
use crate::config::FieldConfig;
use crate::dom;
use crate::error::EffectsError;
use crate::field::ParticleField;
use crate::surface::Surface;
use crate::Timer;
use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement, Window};

pub struct Canvas2dSurface {
    pub context: CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    // Grabs the 2d context from a canvas on the DOM
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, EffectsError> {
        let context = canvas
            .get_context("2d")?
            .ok_or(EffectsError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EffectsError::NoContext)?;
        Ok(Canvas2dSurface { context })
    }
}

impl Surface for Canvas2dSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_glow_circle(&mut self, center: [f64; 2], radius: f64, color: Color, blur: f64) {
        let hex = color.to_hex();
        self.context.begin_path();
        self.context.set_fill_style_str(&hex);
        self.context.set_shadow_blur(blur);
        self.context.set_shadow_color(&hex);
        // Only fails for a negative radius
        if self
            .context
            .arc(center[0], center[1], radius, 0.0, PI * 2.0)
            .is_ok()
        {
            self.context.fill();
        }
    }

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], color: Color, alpha: f64, width: f64) {
        self.context.begin_path();
        self.context.set_stroke_style_str(&color.to_rgba(alpha));
        self.context.set_line_width(width);
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
    }
}

fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

/// Sizes the canvas to the viewport, seeds the field and starts the frame loop.
/// Returns the number of particles in play.
pub fn start(window: &Window, config: FieldConfig) -> Result<usize, EffectsError> {
    let document = window.document().ok_or(EffectsError::NoDocument)?;
    let canvas = document
        .get_element_by_id(&config.canvas_id)
        .ok_or_else(|| EffectsError::MissingElement(config.canvas_id.clone()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| EffectsError::WrongElement {
            id: config.canvas_id.clone(),
            expected: "canvas",
        })?;

    let (width, height) = viewport_size(window);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let mut surface = Canvas2dSurface::new(&canvas)?;
    let profile = config.profile_frames;
    let mut rng = rand::thread_rng();
    let field = Rc::new(RefCell::new(ParticleField::new(
        &mut rng, width, height, config,
    )));
    let count = field.borrow().particles().len();

    {
        let field = field.clone();
        let canvas = canvas.clone();
        let resize_window = window.clone();
        dom::listen(window, "resize", move |_: web_sys::Event| {
            let (width, height) = viewport_size(&resize_window);
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);
            field.borrow_mut().resize(width, height);
        })?;
    }

    // `f` holds the frame closure so it can hand itself back to
    // `request_animation_frame` at the end of every frame.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let frame_window = window.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        {
            let _timer = if profile {
                Some(Timer::new("ParticleField::tick"))
            } else {
                None
            };
            field.borrow_mut().tick(&mut surface);
        }

        if let Some(frame) = f.borrow().as_ref() {
            if let Err(err) = frame_window.request_animation_frame(frame.as_ref().unchecked_ref()) {
                console::error_2(&"requestAnimationFrame failed".into(), &err);
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(frame) = g.borrow().as_ref() {
        window.request_animation_frame(frame.as_ref().unchecked_ref())?;
    }

    Ok(count)
}
