mod harness;

use app::{NavClasses, NavScrollController, ScriptError, ScrollDirection};
use assert_matches::assert_matches;
use harness::{FakeNav, FakeViewport};

fn controller(nav: FakeNav) -> NavScrollController<FakeNav> {
    NavScrollController::new(nav, NavClasses::default())
}

#[test]
fn test_initial_state_has_no_classes() {
    let nav = controller(FakeNav::new(80));
    assert!(nav.nav().classes().is_empty());
    assert_eq!(nav.scroll_pos(), 0.0);
}

#[test]
fn test_crossing_header_height_pins_without_revealing() {
    let mut nav = controller(FakeNav::new(80));

    assert_eq!(nav.on_scroll(81.0).unwrap(), ScrollDirection::Down);

    assert_eq!(nav.nav().classes(), vec!["is-fixed"]);
}

#[test]
fn test_upward_while_fixed_reveals_and_keeps_pin() {
    let mut nav = controller(FakeNav::with_classes(80, &["is-fixed"]));
    nav.on_scroll(200.0).unwrap();

    assert_eq!(nav.on_scroll(150.0).unwrap(), ScrollDirection::Up);

    assert_eq!(nav.nav().classes(), vec!["is-fixed", "is-visible"]);
}

#[test]
fn test_upward_to_top_resets_bar() {
    let mut nav = controller(FakeNav::with_classes(80, &["is-fixed"]));
    nav.on_scroll(50.0).unwrap();

    assert_eq!(nav.on_scroll(0.0).unwrap(), ScrollDirection::Up);

    assert!(nav.nav().classes().is_empty());
}

#[test]
fn test_full_scroll_session() {
    let viewport = FakeViewport::default();
    let mut nav = controller(FakeNav::new(80));

    let mut step = |top: f64| {
        viewport.scroll_to(top);
        nav.sync(&viewport).unwrap();
        nav.nav().classes()
    };

    assert!(step(40.0).is_empty());
    assert_eq!(step(400.0), vec!["is-fixed"]);
    assert_eq!(step(380.0), vec!["is-fixed", "is-visible"]);
    assert_eq!(step(380.0), vec!["is-fixed"]);
    assert_eq!(step(120.0), vec!["is-fixed", "is-visible"]);
    assert!(step(0.0).is_empty());
}

#[test]
fn test_class_failure_leaves_offset_unchanged() {
    let fake = FakeNav::new(80);
    fake.reject("is-fixed");
    let mut nav = controller(fake);

    assert_matches!(nav.on_scroll(500.0), Err(ScriptError::Dom(_)));
    assert_eq!(nav.scroll_pos(), 0.0);
}
