#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

/// Absolute scroll offset below which the home section is forced active,
/// in CSS pixels.
pub const NEAR_TOP_PX: f64 = 100.0;

/// Distance of the reference line from the viewport top, in CSS pixels.
/// A section is a candidate while this line lies inside its rectangle.
pub const REFERENCE_OFFSET_PX: f64 = 300.0;

/// Viewport-relative bounding geometry for one mounted section.
///
/// Sections configured in the nav but not yet mounted in the document are
/// simply absent from the sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub id: &'static str,
    pub top: f64,
    pub bottom: f64,
}

/// Classify the active section for one scroll sample.
///
/// `rects` holds the mounted sections in document order. Among all
/// sections whose rectangle contains the reference line, the last in
/// iteration order (the one with the greatest document offset) wins.
/// Below [`NEAR_TOP_PX`] of absolute scroll the home id is forced so the
/// indicator starts on Home before any section crosses the line.
///
/// Returns `None` when no section contains the line; the caller keeps the
/// previous value, so the indicator never flaps in the gaps.
#[must_use]
pub fn active_section(
    home_id: &'static str,
    scroll_y: f64,
    rects: &[SectionRect],
) -> Option<&'static str> {
    if scroll_y < NEAR_TOP_PX {
        return Some(home_id);
    }
    let mut hit = None;
    for rect in rects {
        if rect.top <= REFERENCE_OFFSET_PX && rect.bottom >= REFERENCE_OFFSET_PX {
            hit = Some(rect.id);
        }
    }
    hit
}
