// Host-side tests for scroll-offset to section mapping.

use portfolio_core::*;
use std::collections::HashMap;

struct FixedLayout(HashMap<Section, SectionBounds>);

impl SectionLayout for FixedLayout {
    fn bounds(&self, section: Section) -> Option<SectionBounds> {
        self.0.get(&section).copied()
    }
}

fn bounds(top: f64, height: f64) -> SectionBounds {
    SectionBounds { top, height }
}

/// about:[0,800) skills:[800,1600) projects:[1600,2400) contact:[2400,3200)
fn page_layout() -> FixedLayout {
    FixedLayout(HashMap::from([
        (Section::About, bounds(0.0, 800.0)),
        (Section::Skills, bounds(800.0, 800.0)),
        (Section::Projects, bounds(1600.0, 800.0)),
        (Section::Contact, bounds(2400.0, 800.0)),
    ]))
}

fn active_after(offsets: &[f64]) -> Section {
    let layout = page_layout();
    let mut spy = ScrollSpy::default();
    for &o in offsets {
        spy.on_scroll(o, &layout);
    }
    spy.active()
}

#[test]
fn default_spy_uses_page_order_and_lookahead() {
    let spy = ScrollSpy::default();
    assert_eq!(spy.active(), Section::About);
    assert_eq!(spy.lookahead(), 100.0);
}

#[test]
fn offset_zero_is_about() {
    assert_eq!(active_after(&[0.0]), Section::About);
}

#[test]
fn lookahead_pulls_next_section_in_early() {
    // 750 + 100 = 850 lands in skills
    assert_eq!(active_after(&[750.0]), Section::Skills);
    // 2350 + 100 = 2450 lands in contact
    assert_eq!(active_after(&[2350.0]), Section::Contact);
}

#[test]
fn section_boundaries_are_half_open() {
    // 699 + 100 = 799 is still about
    assert_eq!(active_after(&[699.0]), Section::About);
    // 700 + 100 = 800 is the first pixel of skills
    assert_eq!(active_after(&[700.0]), Section::Skills);
    assert_eq!(active_after(&[1499.0]), Section::Skills);
    assert_eq!(active_after(&[1500.0]), Section::Projects);
    assert_eq!(active_after(&[1499.5]), Section::Skills);
}

#[test]
fn no_match_keeps_previous_section() {
    // Past the end of contact: 3200 + 100 is outside every section.
    assert_eq!(active_after(&[1600.0, 3200.0]), Section::Projects);
    assert_eq!(active_after(&[2500.0, 9000.0]), Section::Contact);
}

#[test]
fn on_scroll_reports_only_changes() {
    let layout = page_layout();
    let mut spy = ScrollSpy::default();
    assert_eq!(spy.on_scroll(0.0, &layout), None);
    assert_eq!(spy.on_scroll(900.0, &layout), Some(Section::Skills));
    assert_eq!(spy.on_scroll(950.0, &layout), None);
    assert_eq!(spy.on_scroll(100.0, &layout), Some(Section::About));
}

#[test]
fn missing_section_element_is_skipped() {
    let mut layout = page_layout();
    layout.0.remove(&Section::Skills);
    let mut spy = ScrollSpy::default();
    // Nothing covers 850 without skills; value stays.
    assert_eq!(spy.on_scroll(750.0, &layout), None);
    assert_eq!(spy.active(), Section::About);
    // Later sections still resolve.
    assert_eq!(spy.on_scroll(1700.0, &layout), Some(Section::Projects));
}

#[test]
fn first_match_wins_on_overlap() {
    let layout = FixedLayout(HashMap::from([
        (Section::About, bounds(0.0, 2000.0)),
        (Section::Skills, bounds(500.0, 500.0)),
    ]));
    let mut spy = ScrollSpy::new(vec![Section::About, Section::Skills], 100.0);
    spy.on_scroll(600.0, &layout);
    assert_eq!(spy.active(), Section::About);
}

#[test]
fn custom_section_order_and_lookahead() {
    let layout = page_layout();
    let mut spy = ScrollSpy::new(vec![Section::Contact, Section::Projects], 0.0);
    assert_eq!(spy.active(), Section::Contact);
    assert_eq!(spy.on_scroll(1600.0, &layout), Some(Section::Projects));
    // About is not tracked by this spy.
    assert_eq!(spy.on_scroll(0.0, &layout), None);
    assert_eq!(spy.active(), Section::Projects);
}

#[test]
fn section_ids_round_trip_through_parse() {
    for s in constants::SECTION_ORDER {
        assert_eq!(s.id().parse::<Section>(), Ok(s));
        assert_eq!(s.to_string(), s.id());
    }
    let err = "blog".parse::<Section>().unwrap_err();
    assert_eq!(err.to_string(), "unknown section id `blog`");
    assert_eq!(Section::Skills.nav_label(), "Expertise");
}
