// Top navigation: highlights the link whose section is under the anchor line,
// and staggers the nav items' transitions.

use crate::config::NavConfig;
use crate::dom;
use crate::error::EffectsError;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Window};

/// A section's vertical extent in document coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    /// Half-open: `[top, top + height)`.
    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && self.top + self.height > y
    }
}

pub fn anchor_line(scroll_y: f64, offset: f64) -> f64 {
    scroll_y + offset
}

/// Active flag per link. Links without a resolvable section get `None` and are
/// left untouched. Each link is judged on its own, so overlapping sections can
/// mark several links at once.
pub fn highlight(spans: &[Option<SectionSpan>], anchor: f64) -> Vec<Option<bool>> {
    spans
        .iter()
        .map(|span| span.map(|s| s.contains(anchor)))
        .collect()
}

pub fn stagger_delay(index: usize, step_ms: u32) -> String {
    format!("{}ms", index as u64 * step_ms as u64)
}

fn section_span(document: &web_sys::Document, link: &Element) -> Option<SectionSpan> {
    let target = link.get_attribute("href")?;
    let section = document
        .query_selector(&target)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()?;
    Some(SectionSpan {
        top: section.offset_top() as f64,
        height: section.offset_height() as f64,
    })
}

/// Staggers nav items and keeps the active link in sync with scrolling.
/// Returns the number of links tracked.
pub fn install(window: &Window, config: NavConfig) -> Result<usize, EffectsError> {
    let document = dom::document(window)?;

    let items: Vec<HtmlElement> = dom::query_all(&document, &config.item_selector)?;
    for (i, item) in items.iter().enumerate() {
        let _ = item
            .style()
            .set_property("transition-delay", &stagger_delay(i, config.stagger_ms));
    }

    let links: Vec<Element> = dom::query_all(&document, &config.link_selector)?;
    let count = links.len();
    let scroll_window = window.clone();
    dom::listen(window, "scroll", move |_: web_sys::Event| {
        let anchor = anchor_line(dom::scroll_y(&scroll_window), config.anchor_offset);
        // Section geometry shifts with layout, so it is looked up on every scroll.
        let spans: Vec<Option<SectionSpan>> = links
            .iter()
            .map(|link| section_span(&document, link))
            .collect();
        for (link, active) in links.iter().zip(highlight(&spans, anchor)) {
            let classes = link.class_list();
            let _ = match active {
                Some(true) => classes.add_1(&config.active_class),
                Some(false) => classes.remove_1(&config.active_class),
                None => Ok(()),
            };
        }
    })?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(top: f64, height: f64) -> Option<SectionSpan> {
        Some(SectionSpan { top, height })
    }

    #[test]
    fn span_is_half_open() {
        let s = SectionSpan {
            top: 600.0,
            height: 400.0,
        };
        assert!(s.contains(600.0));
        assert!(s.contains(999.9));
        assert!(!s.contains(1000.0));
        assert!(!s.contains(599.0));
    }

    #[test]
    fn only_the_section_under_the_anchor_is_active() {
        let spans = [span(0.0, 600.0), span(600.0, 400.0), span(1000.0, 800.0)];
        let anchor = anchor_line(520.0, 80.0);
        assert_eq!(
            highlight(&spans, anchor),
            vec![Some(false), Some(true), Some(false)]
        );
        assert_eq!(
            highlight(&spans, anchor_line(0.0, 80.0)),
            vec![Some(true), Some(false), Some(false)]
        );
    }

    #[test]
    fn unresolved_links_are_left_alone() {
        let spans = [None, span(0.0, 500.0)];
        assert_eq!(highlight(&spans, 80.0), vec![None, Some(true)]);
    }

    #[test]
    fn overlapping_sections_are_not_tie_broken() {
        let spans = [span(0.0, 500.0), span(400.0, 500.0)];
        assert_eq!(highlight(&spans, 450.0), vec![Some(true), Some(true)]);
    }

    #[test]
    fn nav_items_stagger_by_step() {
        assert_eq!(stagger_delay(0, 30), "0ms");
        assert_eq!(stagger_delay(4, 30), "120ms");
    }
}
