// Host-side tests for the mount/unmount lifecycle and the cursor follower.

use glam::Vec2;
use portfolio_core::constants::PARTICLE_COUNT;
use portfolio_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Default)]
struct CountingCanvas {
    clears: usize,
    fills: usize,
}

impl ParticleCanvas for CountingCanvas {
    fn clear(&mut self, _viewport: Viewport) {
        self.clears += 1;
    }

    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _rgb: [u8; 3], _alpha: f32) {
        self.fills += 1;
    }
}

/// Every section is 800px tall, stacked in page order.
struct StackedLayout;

impl SectionLayout for StackedLayout {
    fn bounds(&self, section: Section) -> Option<SectionBounds> {
        let index = constants::SECTION_ORDER.iter().position(|s| *s == section)?;
        Some(SectionBounds {
            top: index as f64 * 800.0,
            height: 800.0,
        })
    }
}

fn make_stage() -> Stage {
    let mut rng = StdRng::seed_from_u64(7);
    Stage::mount(Viewport::new(1200.0, 900.0), FieldParams::default(), &mut rng)
}

#[test]
fn follower_centre_tracks_pointer_immediately() {
    let mut stage = make_stage();
    assert_eq!(stage.cursor.center(), None);
    let c = stage.on_pointer_move(500.0, 300.0);
    assert_eq!(c, Some(Vec2::new(500.0, 300.0)));
    assert_eq!(stage.cursor.center(), Some(Vec2::new(500.0, 300.0)));
}

#[test]
fn follower_has_no_smoothing_between_events() {
    let mut follower = CursorFollower::default();
    follower.on_pointer_move(0.0, 0.0);
    follower.on_pointer_move(1000.0, 10.0);
    assert_eq!(follower.center(), Some(Vec2::new(1000.0, 10.0)));
    follower.on_pointer_move(999.5, 10.0);
    assert_eq!(follower.center(), Some(Vec2::new(999.5, 10.0)));
}

#[test]
fn mounted_stage_animates_and_spies() {
    let mut stage = make_stage();
    let mut canvas = CountingCanvas::default();
    for _ in 0..3 {
        assert_eq!(stage.frame(&mut canvas), FrameOutcome::Drawn);
    }
    assert_eq!(stage.frames(), 3);
    assert_eq!(canvas.clears, 3);
    assert_eq!(canvas.fills, 3 * PARTICLE_COUNT);
    assert_eq!(stage.on_scroll(1650.0, &StackedLayout), Some(Section::Projects));
}

#[test]
fn bad_frame_is_skipped_and_loop_continues() {
    let mut stage = make_stage();
    let mut canvas = CountingCanvas::default();
    stage.on_resize(0.0, 0.0);
    assert!(matches!(stage.frame(&mut canvas), FrameOutcome::Skipped(_)));
    stage.on_resize(800.0, 600.0);
    assert_eq!(stage.frame(&mut canvas), FrameOutcome::Drawn);
    assert_eq!(stage.frames(), 1);
}

#[test]
fn unmount_silences_every_handler() {
    let mut stage = make_stage();
    let mut canvas = CountingCanvas::default();
    stage.frame(&mut canvas);
    stage.on_pointer_move(10.0, 10.0);
    stage.on_scroll(900.0, &StackedLayout);
    assert_eq!(stage.spy.active(), Section::Skills);

    stage.unmount();
    assert!(!stage.is_mounted());
    assert_eq!(stage.cursor.center(), None);

    let positions: Vec<Vec2> = stage.field.particles().iter().map(|p| p.pos).collect();
    let viewport = stage.field.viewport();
    let (clears, fills) = (canvas.clears, canvas.fills);

    // Synthetic events after teardown.
    for _ in 0..10 {
        assert_eq!(stage.frame(&mut canvas), FrameOutcome::Halted);
    }
    assert_eq!(stage.on_pointer_move(500.0, 300.0), None);
    assert_eq!(stage.on_scroll(2500.0, &StackedLayout), None);
    stage.on_resize(320.0, 240.0);

    assert_eq!((canvas.clears, canvas.fills), (clears, fills));
    assert_eq!(stage.frames(), 1);
    assert_eq!(stage.cursor.center(), None);
    assert_eq!(stage.spy.active(), Section::Skills);
    assert_eq!(stage.field.viewport(), viewport);
    let after: Vec<Vec2> = stage.field.particles().iter().map(|p| p.pos).collect();
    assert_eq!(positions, after);
}

#[test]
fn unmount_twice_is_harmless() {
    let mut stage = make_stage();
    stage.unmount();
    stage.unmount();
    assert!(!stage.is_mounted());
}

#[test]
fn project_modal_opens_known_projects_only() {
    let mut modal = ProjectModal::default();
    assert!(!modal.is_open());

    let p = modal.open(3).expect("project 3 exists");
    assert_eq!(p.title, "API Gateway & Auth Service");
    assert!(modal.is_open());

    // Unknown id leaves the current selection alone.
    assert!(modal.open(99).is_none());
    assert_eq!(modal.selected().map(|p| p.id), Some(3));

    modal.close();
    assert!(modal.selected().is_none());
}

#[test]
fn project_catalog_is_complete() {
    assert_eq!(PROJECTS.len(), 4);
    for (i, p) in PROJECTS.iter().enumerate() {
        assert_eq!(p.id as usize, i + 1);
        assert!(!p.title.is_empty());
        assert!(!p.long_description.is_empty());
        assert_eq!(p.features.len(), 4);
        assert_eq!(p.tech.len(), 4);
        assert!(p.github_url.starts_with("https://"));
    }
    assert!(project_by_id(0).is_none());
}

#[test]
fn card_link_click_does_not_open_modal() {
    let mut modal = ProjectModal::default();
    assert!(modal.on_card_click(2, true).is_none());
    assert!(!modal.is_open());

    let p = modal.on_card_click(2, false).expect("project 2 exists");
    assert_eq!(p.title, "Real-time Analytics Dashboard");

    // A link click on another card keeps the current selection.
    assert!(modal.on_card_click(4, true).is_none());
    assert_eq!(modal.selected().map(|p| p.id), Some(2));
}
