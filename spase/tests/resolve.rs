use simplelog::{Config, LevelFilter, TestLogger};
use spase::{Point, Rect, RectOptions, ResolutionFailure, Size, Snapshot, Target, ViewportMetrics};

fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

fn page() -> Snapshot {
    Snapshot::new(ViewportMetrics::new(Size::new(800.0, 600.0)))
        .element("header", Rect::new(0.0, 0.0, 800.0, 100.0))
        .element("list", Rect::new(50.0, 150.0, 300.0, 200.0))
        .child("list", "item-0", Rect::new(50.0, 150.0, 300.0, 50.0))
        .child("list", "item-1", Rect::new(50.0, 200.0, 300.0, 50.0))
        .child("list", "item-2", Rect::new(60.0, 250.0, 280.0, 50.0))
        .with_scroll_size("list", Size::new(300.0, 900.0))
        .element("footer", Rect::new(0.0, 500.0, 800.0, 300.0))
}

fn el(id: &str) -> Target<String> {
    Target::element(id)
}

fn opts() -> RectOptions<String> {
    RectOptions::new()
}

fn list() -> String {
    "list".to_string()
}

// ============================================================================
// Rect::from_target
// ============================================================================

#[test]
fn test_resolved_rect_is_returned_unchanged() {
    let env = page().scroll_to(Point::new(30.0, 40.0));
    let rect = Rect::new(1.0, 2.0, 3.0, 4.0);

    let options = RectOptions::new().reference("list").overflow(true);
    assert_eq!(Rect::from_target(&env, &Target::Rect(rect), &options), rect);
}

#[test]
fn test_element_without_scroll_matches_client_box() {
    let env = page();
    assert_eq!(
        Rect::from_target(&env, &el("list"), &opts()),
        Rect::new(50.0, 150.0, 300.0, 200.0)
    );
}

#[test]
fn test_scroll_offset_is_added() {
    let env = page().scroll_to(Point::new(0.0, 120.0));

    // Client box moved up by the scroll amount...
    assert_eq!(env.get("list"), Some(Rect::new(50.0, 30.0, 300.0, 200.0)));
    // ...but the document position did not change.
    assert_eq!(
        Rect::from_target(&env, &el("list"), &opts()),
        Rect::new(50.0, 150.0, 300.0, 200.0)
    );
}

#[test]
fn test_reference_element_origin_is_subtracted() {
    let expected = Rect::new(0.0, 50.0, 300.0, 50.0);
    let options = RectOptions::new().reference("list");

    assert_eq!(Rect::from_target(&page(), &el("item-1"), &options), expected);

    let scrolled = page().scroll_to(Point::new(15.0, 200.0));
    assert_eq!(Rect::from_target(&scrolled, &el("item-1"), &options), expected);
}

#[test]
fn test_explicit_window_reference_matches_default() {
    let env = page().scroll_to(Point::new(0.0, 10.0));
    let options = RectOptions::new().relative_to_window();
    assert_eq!(
        Rect::from_target(&env, &el("header"), &options),
        Rect::from_target(&env, &el("header"), &opts())
    );
}

#[test]
fn test_overflow_uses_scroll_size() {
    let env = page();
    let options = RectOptions::new().overflow(true);

    assert_eq!(
        Rect::from_target(&env, &el("list"), &options),
        Rect::new(50.0, 150.0, 300.0, 900.0)
    );
    // Elements without overflowing content keep their box.
    assert_eq!(
        Rect::from_target(&env, &el("header"), &options),
        Rect::new(0.0, 0.0, 800.0, 100.0)
    );
}

#[test]
fn test_multiple_elements_resolve_to_union() {
    let env = page();
    let target = Target::elements(["header", "list"]);
    assert_eq!(
        Rect::from_target(&env, &target, &opts()),
        Rect::from_bounds(0.0, 0.0, 800.0, 350.0)
    );
}

#[test]
fn test_union_order_does_not_matter() {
    let env = page();
    let a = Rect::from_target(&env, &Target::elements(["item-2", "header", "list"]), &opts());
    let b = Rect::from_target(&env, &Target::elements(["list", "item-2", "header"]), &opts());
    assert_eq!(a, b);
}

#[test]
fn test_empty_element_list_is_zero() {
    let env = page();
    assert_eq!(Rect::from_target(&env, &Target::Elements(vec![]), &opts()), Rect::ZERO);
}

#[test]
fn test_window_resolves_through_document_element() {
    let env = page();
    assert_eq!(
        Rect::from_target(&env, &Target::Window, &opts()),
        Rect::new(0.0, 0.0, 800.0, 600.0)
    );

    let scrolled = page().scroll_to(Point::new(0.0, 120.0));
    assert_eq!(
        Rect::from_target(&scrolled, &Target::Window, &opts()),
        Rect::new(0.0, 0.0, 800.0, 600.0)
    );
}

#[test]
fn test_detached_element_degrades_to_zero() {
    init_logging();
    let env = page().detach("list");

    assert_eq!(Rect::from_target(&env, &el("list"), &opts()), Rect::ZERO);
    assert_eq!(
        Rect::try_from_target(&env, &el("list"), &opts()),
        Err(ResolutionFailure::detached("list"))
    );
    // One bad element spoils the whole union.
    assert_eq!(
        Rect::from_target(&env, &Target::elements(["header", "list"]), &opts()),
        Rect::ZERO
    );
}

#[test]
fn test_detached_reference_degrades_to_zero() {
    init_logging();
    let env = page().detach("list");
    let options = RectOptions::new().reference("list");
    assert_eq!(Rect::from_target(&env, &el("header"), &options), Rect::ZERO);
}

// ============================================================================
// Rect::from_viewport
// ============================================================================

#[test]
fn test_viewport_origin_is_scroll_offset() {
    let env = page().scroll_to(Point::new(10.0, 20.0));
    assert_eq!(Rect::from_viewport(&env), Rect::new(10.0, 20.0, 800.0, 600.0));
}

#[test]
fn test_viewport_takes_larger_of_document_and_window() {
    let metrics = ViewportMetrics::new(Size::new(800.0, 0.0))
        .inner_size(Some(Size::new(1024.0, 768.0)));
    let env = Snapshot::new(metrics);
    assert_eq!(Rect::from_viewport(&env), Rect::new(0.0, 0.0, 1024.0, 768.0));

    let metrics = ViewportMetrics::new(Size::new(640.0, 480.0)).inner_size(None);
    let env = Snapshot::new(metrics);
    assert_eq!(Rect::from_viewport(&env), Rect::new(0.0, 0.0, 640.0, 480.0));
}

#[test]
fn test_viewport_falls_back_to_scrolling_element_offset() {
    let metrics = ViewportMetrics::new(Size::new(800.0, 600.0))
        .page_offset(None)
        .scrolling_element_offset(Point::new(0.0, 40.0));
    let env = Snapshot::new(metrics);

    assert_eq!(Rect::from_viewport(&env), Rect::new(0.0, 40.0, 800.0, 600.0));
}

// ============================================================================
// Children
// ============================================================================

#[test]
fn test_children_of_defaults_to_parent_frame() {
    let env = page();
    assert_eq!(
        Rect::from_children_of(&env, &list(), &opts()),
        Rect::new(0.0, 0.0, 300.0, 150.0)
    );
    assert_eq!(
        Rect::from_children_of(&env, &list(), &RectOptions::new().relative_to_window()),
        Rect::new(50.0, 150.0, 300.0, 150.0)
    );
}

#[test]
fn test_children_before() {
    let env = page();
    let before = |index| Rect::from_children_before(&env, &list(), index, &opts());

    assert_eq!(before(-3), Rect::ZERO);
    assert_eq!(before(0), Rect::ZERO);
    assert_eq!(before(1), Rect::new(0.0, 0.0, 300.0, 50.0));
    assert_eq!(before(2), Rect::new(0.0, 0.0, 300.0, 100.0));
    assert_eq!(before(3), Rect::new(0.0, 0.0, 300.0, 150.0));
    assert_eq!(before(10), Rect::new(0.0, 0.0, 300.0, 150.0));
}

#[test]
fn test_children_after() {
    let env = page();
    let after = |index| Rect::from_children_after(&env, &list(), index, &opts());

    assert_eq!(after(-1), Rect::new(0.0, 0.0, 300.0, 150.0));
    assert_eq!(after(0), Rect::new(0.0, 50.0, 300.0, 100.0));
    assert_eq!(after(1), Rect::new(10.0, 100.0, 280.0, 50.0));
    assert_eq!(after(2), Rect::ZERO);
    assert_eq!(after(5), Rect::ZERO);
}

#[test]
fn test_child_at() {
    let env = page();
    let at = |index| Rect::from_child_at(&env, &list(), index, &opts());

    assert_eq!(at(0), Rect::new(0.0, 0.0, 300.0, 50.0));
    assert_eq!(at(1), Rect::new(0.0, 50.0, 300.0, 50.0));
    assert_eq!(at(3), Rect::ZERO);
    assert_eq!(at(-1), Rect::ZERO);
}

#[test]
fn test_children_of_childless_element_is_zero() {
    let env = page();
    assert_eq!(
        Rect::from_children_of(&env, &"header".to_string(), &opts()),
        Rect::ZERO
    );
}

#[test]
fn test_children_of_detached_parent_degrades() {
    init_logging();
    let env = page().detach("list");
    assert_eq!(Rect::from_children_of(&env, &list(), &opts()), Rect::ZERO);
    assert!(Rect::try_from_children_before(&env, &list(), 1, &opts()).is_err());
}

// ============================================================================
// Rect::intersecting
// ============================================================================

#[test]
fn test_single_target_intersects_viewport() {
    let env = page();
    let alone = Rect::intersecting(&env, &[el("footer")]);

    assert_eq!(alone, Rect::new(0.0, 500.0, 800.0, 100.0));
    assert_eq!(
        alone,
        Rect::intersecting(&env, &[el("footer"), Target::Rect(Rect::from_viewport(&env))])
    );
}

#[test]
fn test_single_target_follows_scrolled_viewport() {
    let env = page().scroll_to(Point::new(0.0, 400.0));
    assert_eq!(
        Rect::intersecting(&env, &[el("footer")]),
        Rect::new(0.0, 500.0, 800.0, 300.0)
    );
    assert_eq!(Rect::intersecting(&env, &[el("header")]), Rect::ZERO);
}

#[test]
fn test_intersection_chains_through_all_targets() {
    let env = page();
    let clip = Rect::new(0.0, 260.0, 100.0, 100.0);
    let targets = [el("list"), el("item-2"), Target::Rect(clip)];

    let chained = Rect::intersecting(&env, &targets);
    assert_eq!(chained, Rect::new(60.0, 260.0, 40.0, 40.0));

    let pair = Rect::intersecting(&env, &[el("list"), el("item-2")]);
    assert_eq!(chained, Rect::intersecting(&env, &[Target::Rect(pair), Target::Rect(clip)]));
}

#[test]
fn test_disjoint_chain_is_zero() {
    let env = page();
    let everything = Target::Rect(Rect::from_bounds(-1e6, -1e6, 1e6, 1e6));
    assert_eq!(
        Rect::intersecting(&env, &[el("header"), el("list"), everything]),
        Rect::ZERO
    );
}

#[test]
fn test_no_targets_is_zero() {
    let env = page();
    assert_eq!(Rect::intersecting(&env, &[]), Rect::ZERO);
}

#[test]
fn test_unresolvable_target_degrades() {
    init_logging();
    let env = page().detach("item-1");
    assert_eq!(Rect::intersecting(&env, &[el("list"), el("item-1")]), Rect::ZERO);
    assert_eq!(
        Rect::try_intersecting(&env, &[el("list"), el("item-1")]),
        Err(ResolutionFailure::detached("item-1"))
    );
}
