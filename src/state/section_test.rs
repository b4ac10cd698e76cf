use super::*;

const HOME: &str = "hero";

fn rect(id: &'static str, top: f64, bottom: f64) -> SectionRect {
    SectionRect { id, top, bottom }
}

// =============================================================
// Home override
// =============================================================

#[test]
fn near_top_forces_home_regardless_of_geometry() {
    // Geometry says "pricing" is under the reference line; the near-top
    // rule wins anyway.
    let rects = [rect("pricing", 0.0, 10_000.0)];
    for scroll_y in [0.0, 1.0, 50.0, 99.9] {
        assert_eq!(active_section(HOME, scroll_y, &rects), Some(HOME));
    }
}

#[test]
fn the_override_ends_exactly_at_the_threshold() {
    let rects = [rect("pricing", 0.0, 10_000.0)];
    assert_eq!(active_section(HOME, NEAR_TOP_PX, &rects), Some("pricing"));
}

#[test]
fn near_top_applies_even_with_no_mounted_sections() {
    assert_eq!(active_section(HOME, 0.0, &[]), Some(HOME));
}

// =============================================================
// Reference-line candidacy
// =============================================================

#[test]
fn a_section_containing_the_reference_line_is_active() {
    let rects = [rect("hero", -500.0, 200.0), rect("features", 200.0, 900.0)];
    assert_eq!(active_section(HOME, 400.0, &rects), Some("features"));
}

#[test]
fn the_rectangle_bounds_are_inclusive() {
    let exactly_top = [rect("features", REFERENCE_OFFSET_PX, 900.0)];
    assert_eq!(active_section(HOME, 400.0, &exactly_top), Some("features"));

    let exactly_bottom = [rect("features", -100.0, REFERENCE_OFFSET_PX)];
    assert_eq!(active_section(HOME, 400.0, &exactly_bottom), Some("features"));
}

#[test]
fn no_candidate_returns_none_so_the_caller_keeps_the_previous_id() {
    // The reference line sits in a gap between two sections.
    let rects = [rect("hero", -500.0, 100.0), rect("features", 500.0, 900.0)];
    assert_eq!(active_section(HOME, 400.0, &rects), None);
}

// =============================================================
// Tie-break: later-in-document wins
// =============================================================

#[test]
fn among_overlapping_candidates_the_last_wins() {
    // Short sections overlapping at the reference line: "contact" has the
    // greatest document offset and takes priority.
    let rects = [
        rect("pricing", 100.0, 350.0),
        rect("advanced", 250.0, 400.0),
        rect("contact", 290.0, 600.0),
    ];
    assert_eq!(active_section(HOME, 2_000.0, &rects), Some("contact"));
}

#[test]
fn unmounted_sections_are_skipped_without_fault() {
    // Only a subset of the configured sections is present in the sample;
    // classification proceeds over what exists.
    let rects = [rect("contact", 100.0, 500.0)];
    assert_eq!(active_section(HOME, 3_000.0, &rects), Some("contact"));
}

// =============================================================
// Determinism
// =============================================================

#[test]
fn repeated_evaluation_of_the_same_sample_is_stable() {
    let rects = [
        rect("hero", -800.0, 250.0),
        rect("features", 250.0, 1_000.0),
        rect("pricing", 1_000.0, 1_800.0),
    ];
    let first = active_section(HOME, 640.0, &rects);
    for _ in 0..10 {
        assert_eq!(active_section(HOME, 640.0, &rects), first);
    }
    assert_eq!(first, Some("features"));
}
