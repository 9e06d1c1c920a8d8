// Scroll-driven parallax: elements tagged with a speed drift vertically by
// `scrollY * speed` pixels.

use crate::config::ParallaxConfig;
use crate::dom;
use crate::error::EffectsError;
use regex::Regex;
use web_sys::{HtmlElement, Window};

/// Reads speed attributes the way `parseFloat` would: the longest leading number
/// after whitespace, ignoring whatever follows. Anything unreadable is 0.
pub struct SpeedReader {
    leading_number: Regex,
}

impl SpeedReader {
    pub fn new() -> Result<Self, EffectsError> {
        let leading_number = Regex::new(
            r"^\s*([+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?))",
        )?;
        Ok(SpeedReader { leading_number })
    }

    pub fn read(&self, raw: Option<&str>) -> f64 {
        raw.and_then(|text| self.leading_number.captures(text))
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .unwrap_or(0.0)
    }
}

pub fn offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed
}

/// CSS transform for a vertical offset. Negative zero prints as `0`.
pub fn translate_y(offset: f64) -> String {
    format!("translateY({}px)", offset + 0.0)
}

/// Moves every tagged element on each window scroll. Returns how many were found.
pub fn install(window: &Window, config: ParallaxConfig) -> Result<usize, EffectsError> {
    let document = dom::document(window)?;
    let elements: Vec<HtmlElement> = dom::query_all(&document, &config.selector)?;
    let count = elements.len();
    let speeds = SpeedReader::new()?;

    let scroll_window = window.clone();
    dom::listen(window, "scroll", move |_: web_sys::Event| {
        let scroll_y = dom::scroll_y(&scroll_window);
        for el in &elements {
            let speed = speeds.read(el.get_attribute(&config.speed_attribute).as_deref());
            let _ = el
                .style()
                .set_property("transform", &translate_y(offset(scroll_y, speed)));
        }
    })?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_scroll_times_speed() {
        for &scroll_y in &[0.0, 500.0] {
            for &speed in &[0.0, 0.5, 1.0, -1.0] {
                assert_eq!(offset(scroll_y, speed), scroll_y * speed);
            }
        }
        assert_eq!(offset(500.0, 0.5), 250.0);
        assert_eq!(offset(500.0, -1.0), -500.0);
    }

    #[test]
    fn transform_string_matches_css_syntax() {
        assert_eq!(translate_y(250.0), "translateY(250px)");
        assert_eq!(translate_y(-500.0), "translateY(-500px)");
        assert_eq!(translate_y(12.5), "translateY(12.5px)");
        assert_eq!(translate_y(offset(0.0, -1.0)), "translateY(0px)");
    }

    fn reader() -> SpeedReader {
        match SpeedReader::new() {
            Ok(r) => r,
            Err(e) => panic!("speed pattern should compile: {}", e),
        }
    }

    #[test]
    fn speed_parsing_follows_parse_float() {
        let r = reader();
        assert_eq!(r.read(Some("0.5")), 0.5);
        assert_eq!(r.read(Some("  -1")), -1.0);
        assert_eq!(r.read(Some(".25x")), 0.25);
        assert_eq!(r.read(Some("2.")), 2.0);
        assert_eq!(r.read(Some("1e")), 1.0);
        assert_eq!(r.read(Some("1.5e1px")), 15.0);
        assert_eq!(r.read(Some("+3")), 3.0);
        assert_eq!(r.read(Some("-Infinity")), f64::NEG_INFINITY);
    }

    #[test]
    fn missing_or_malformed_speed_is_zero() {
        let r = reader();
        assert_eq!(r.read(None), 0.0);
        assert_eq!(r.read(Some("")), 0.0);
        assert_eq!(r.read(Some("fast")), 0.0);
        assert_eq!(r.read(Some(".")), 0.0);
        assert_eq!(r.read(Some("-")), 0.0);
        assert_eq!(r.read(Some("infinity")), 0.0);
    }
}
