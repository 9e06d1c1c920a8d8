// Horizontal carousel: step buttons, arrow keys, and grab-to-scroll with mouse or touch.

use crate::config::CarouselConfig;
use crate::dom;
use crate::error::EffectsError;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys::{
    HtmlElement, KeyboardEvent, MouseEvent, ScrollBehavior, ScrollToOptions, TouchEvent, Window,
};

/// Mouse drag state. Touch keeps its own anchor in [`TouchAnchor`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { anchor_x: f64, anchor_scroll: f64 },
}

impl DragState {
    pub fn press(&mut self, x: f64, scroll_left: f64) {
        *self = DragState::Dragging {
            anchor_x: x,
            anchor_scroll: scroll_left,
        };
    }

    /// Ends any drag in progress; the scroll offset stays wherever the drag left it.
    pub fn release(&mut self) {
        *self = DragState::Idle;
    }

    #[cfg(test)]
    fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Scroll offset for a pointer at `x`, or `None` when not dragging.
    pub fn drag(&self, x: f64) -> Option<f64> {
        match *self {
            DragState::Idle => None,
            DragState::Dragging {
                anchor_x,
                anchor_scroll,
            } => Some(anchor_scroll - (x - anchor_x)),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TouchAnchor {
    pub start_x: f64,
    pub start_scroll: f64,
}

impl TouchAnchor {
    pub fn start(&mut self, x: f64, scroll_left: f64) {
        self.start_x = x;
        self.start_scroll = scroll_left;
    }

    pub fn drag(&self, x: f64) -> f64 {
        self.start_scroll - (x - self.start_x)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScrollStep {
    Back,
    Forward,
}

impl ScrollStep {
    pub fn from_key(key: &str) -> Option<ScrollStep> {
        match key {
            "ArrowLeft" => Some(ScrollStep::Back),
            "ArrowRight" => Some(ScrollStep::Forward),
            _ => None,
        }
    }

    pub fn delta(self, step: f64) -> f64 {
        match self {
            ScrollStep::Back => -step,
            ScrollStep::Forward => step,
        }
    }
}

fn smooth_scroll_by(carousel: &HtmlElement, left: f64) {
    let options = ScrollToOptions::new();
    options.set_left(left);
    options.set_behavior(ScrollBehavior::Smooth);
    carousel.scroll_by_with_scroll_to_options(&options);
}

/// Wires the carousel if the page has one. Returns whether it was found.
pub fn install(window: &Window, config: CarouselConfig) -> Result<bool, EffectsError> {
    let document = dom::document(window)?;
    let carousel: HtmlElement = match dom::by_id(&document, &config.carousel_id) {
        Some(el) => el,
        None => return Ok(false),
    };
    let step = config.step;

    for (id, direction) in [
        (&config.back_button_id, ScrollStep::Back),
        (&config.forward_button_id, ScrollStep::Forward),
    ] {
        if let Some(button) = dom::by_id::<HtmlElement>(&document, id) {
            let carousel = carousel.clone();
            dom::listen(&button, "click", move |_: MouseEvent| {
                smooth_scroll_by(&carousel, direction.delta(step));
            })?;
        }
    }

    {
        let carousel = carousel.clone();
        dom::listen(&document, "keydown", move |e: KeyboardEvent| {
            if let Some(direction) = ScrollStep::from_key(&e.key()) {
                smooth_scroll_by(&carousel, direction.delta(step));
            }
        })?;
    }

    let drag = Rc::new(Cell::new(DragState::Idle));
    let dragging_class = Rc::new(config.dragging_class);

    {
        let drag = drag.clone();
        let el = carousel.clone();
        let class = dragging_class.clone();
        dom::listen(&carousel, "mousedown", move |e: MouseEvent| {
            let mut state = drag.get();
            state.press(
                (e.page_x() - el.offset_left()) as f64,
                el.scroll_left() as f64,
            );
            drag.set(state);
            let _ = el.class_list().add_1(&class);
        })?;
    }

    for event in ["mouseleave", "mouseup"] {
        let drag = drag.clone();
        let el = carousel.clone();
        let class = dragging_class.clone();
        dom::listen(&carousel, event, move |_: MouseEvent| {
            let mut state = drag.get();
            state.release();
            drag.set(state);
            let _ = el.class_list().remove_1(&class);
        })?;
    }

    {
        let drag = drag.clone();
        let el = carousel.clone();
        dom::listen(&carousel, "mousemove", move |e: MouseEvent| {
            let x = (e.page_x() - el.offset_left()) as f64;
            if let Some(scroll_left) = drag.get().drag(x) {
                e.prevent_default();
                el.set_scroll_left(scroll_left as i32);
            }
        })?;
    }

    let touch = Rc::new(RefCell::new(TouchAnchor::default()));

    {
        let touch = touch.clone();
        let el = carousel.clone();
        dom::listen_passive(&carousel, "touchstart", move |e: TouchEvent| {
            if let Some(t) = e.touches().get(0) {
                touch
                    .borrow_mut()
                    .start(t.page_x() as f64, el.scroll_left() as f64);
            }
        })?;
    }

    {
        let el = carousel.clone();
        dom::listen_passive(&carousel, "touchmove", move |e: TouchEvent| {
            if let Some(t) = e.touches().get(0) {
                let scroll_left = touch.borrow().drag(t.page_x() as f64);
                el.set_scroll_left(scroll_left as i32);
            }
        })?;
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_then_move_maps_drag_one_to_one() {
        let mut state = DragState::default();
        assert_eq!(state.drag(50.0), None);
        state.press(100.0, 720.0);
        assert!(state.is_dragging());
        assert_eq!(state.drag(160.0), Some(660.0));
        assert_eq!(state.drag(40.0), Some(780.0));
    }

    #[test]
    fn release_freezes_scroll() {
        let mut state = DragState::default();
        state.press(100.0, 0.0);
        let last = state.drag(70.0);
        assert_eq!(last, Some(30.0));
        state.release();
        assert!(!state.is_dragging());
        assert_eq!(state.drag(10.0), None);
    }

    #[test]
    fn touch_anchor_is_independent_of_mouse() {
        let mut mouse = DragState::default();
        let mut touch = TouchAnchor::default();
        mouse.press(10.0, 100.0);
        touch.start(300.0, 500.0);
        assert_eq!(touch.drag(280.0), 520.0);
        assert_eq!(mouse.drag(20.0), Some(90.0));
    }

    #[test]
    fn keys_and_buttons_step_by_fixed_amount() {
        assert_eq!(ScrollStep::from_key("ArrowLeft"), Some(ScrollStep::Back));
        assert_eq!(ScrollStep::from_key("ArrowRight"), Some(ScrollStep::Forward));
        assert_eq!(ScrollStep::from_key("ArrowUp"), None);
        assert_eq!(ScrollStep::from_key("a"), None);
        assert_eq!(ScrollStep::Back.delta(360.0), -360.0);
        assert_eq!(ScrollStep::Forward.delta(360.0), 360.0);
    }
}
