//! Selectors and tuning constants for every effect on the page.
//!
//! [`EffectsConfig::default`] describes the stock page layout; embedders with a
//! different markup can build their own and hand it to [`crate::run`].

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub canvas_id: String,
    pub max_particles: usize,
    /// Viewport area (in square pixels) that earns one particle.
    pub area_per_particle: f64,
    /// Pairs closer than this are linked; link alpha fades to 0 at this distance.
    pub link_distance: f64,
    pub link_width: f64,
    pub glow_blur: f64,
    /// Wrap each frame in `console.time`/`console.timeEnd`.
    pub profile_frames: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxConfig {
    pub selector: String,
    pub speed_attribute: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressConfig {
    pub selector: String,
    pub threshold: f64,
    pub width_property: String,
    pub fallback_width: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    pub carousel_id: String,
    pub back_button_id: String,
    pub forward_button_id: String,
    pub dragging_class: String,
    pub step: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavConfig {
    pub link_selector: String,
    pub active_class: String,
    pub anchor_offset: f64,
    pub item_selector: String,
    pub stagger_ms: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EffectsConfig {
    pub field: FieldConfig,
    pub parallax: ParallaxConfig,
    pub progress: ProgressConfig,
    pub carousel: CarouselConfig,
    pub nav: NavConfig,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            canvas_id: "particles".to_owned(),
            max_particles: 160,
            area_per_particle: 40_000.0,
            link_distance: 140.0,
            link_width: 0.8,
            glow_blur: 8.0,
            profile_frames: false,
        }
    }
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        ParallaxConfig {
            selector: "[data-speed]".to_owned(),
            speed_attribute: "data-speed".to_owned(),
        }
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        ProgressConfig {
            selector: ".progress".to_owned(),
            threshold: 0.45,
            width_property: "--w".to_owned(),
            fallback_width: "70%".to_owned(),
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        CarouselConfig {
            carousel_id: "carousel".to_owned(),
            back_button_id: "carousel-left".to_owned(),
            forward_button_id: "carousel-right".to_owned(),
            dragging_class: "dragging".to_owned(),
            step: 360.0,
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig {
            link_selector: ".top-nav a".to_owned(),
            active_class: "active".to_owned(),
            anchor_offset: 80.0,
            item_selector: ".nav-item".to_owned(),
            stagger_ms: 30,
        }
    }
}
