//! Tests for which gated content is rendered at a given width.
//!
//! These tests verify that:
//! - Exactly one of the desktop, tablet and mobile gates renders at any width
//! - Thresholds are inclusive at the lower bound of each breakpoint
//! - Custom thresholds and breakpoint sets are honored

use floem_responsive::config::ResponsiveConfig;
use floem_responsive_test::prelude::*;

fn page() -> Stack {
    stack((
        desktop(|| "Desktop View"),
        tablet(|| "Tablet View"),
        mobile(|| "Mobile View"),
    ))
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_wide_window_renders_desktop() {
    let harness = HeadlessHarness::new_with_width(1200, page);
    assert_eq!(harness.breakpoint(), Breakpoint::Desktop);
    assert_eq!(harness.render().texts(), ["Desktop View"]);
}

#[test]
fn test_medium_window_renders_tablet() {
    let harness = HeadlessHarness::new_with_width(800, page);
    assert_eq!(harness.breakpoint(), Breakpoint::Tablet);
    assert_eq!(harness.render().texts(), ["Tablet View"]);
}

#[test]
fn test_narrow_window_renders_mobile() {
    let harness = HeadlessHarness::new_with_width(500, page);
    assert_eq!(harness.breakpoint(), Breakpoint::Mobile);
    assert_eq!(harness.render().texts(), ["Mobile View"]);
}

// ============================================================================
// Exclusivity
// ============================================================================

#[test]
fn test_exactly_one_gate_renders_at_every_boundary() {
    let mut harness = HeadlessHarness::new_with_width(0, page);

    for width in [0, 1, 500, 767, 768, 769, 900, 991, 992, 993, 1920, u32::MAX] {
        harness.set_width(width);
        let tree = harness.render();
        assert_eq!(
            tree.texts(),
            [expected_text(width)],
            "width {width} rendered {tree}"
        );
    }
}

#[test]
fn test_exclusivity_across_a_sweep() {
    let mut harness = HeadlessHarness::new_with_width(0, page);

    for width in (0..=2000).step_by(7) {
        harness.set_width(width);
        assert_eq!(harness.render().texts().len(), 1, "width {width}");
    }
}

#[test]
fn test_inactive_gates_are_absent_from_output() {
    let harness = HeadlessHarness::new_with_width(1200, page);
    let tree = harness.render();

    // only the stack and the desktop label are present
    let names: Vec<&str> = tree.nodes().iter().map(|n| n.name.as_ref()).collect();
    assert_eq!(names, ["Stack", "Label"]);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_custom_thresholds() {
    let breakpoints = Breakpoints::new(600, 1400).unwrap();
    let mut harness = HeadlessHarness::new_with_breakpoints(1200, breakpoints, page);
    assert_eq!(harness.render().texts(), ["Tablet View"]);

    harness.set_width(1400);
    assert_eq!(harness.render().texts(), ["Desktop View"]);

    harness.set_width(599);
    assert_eq!(harness.render().texts(), ["Mobile View"]);
}

#[test]
fn test_harness_from_config() {
    let config = ResponsiveConfig::from_json_str(
        r#"{ "breakpoints": { "tablet": 500, "desktop": 700 }, "initial_width": 650 }"#,
    )
    .unwrap();

    let harness = HeadlessHarness::new_with_config(&config, page);
    assert_eq!(harness.width(), 650);
    assert_eq!(harness.render().texts(), ["Tablet View"]);
}

#[test]
fn test_changing_thresholds_at_runtime() {
    let harness = HeadlessHarness::new_with_width(800, page);
    assert_eq!(harness.render().texts(), ["Tablet View"]);

    let narrow = Breakpoints::new(900, 1000).unwrap();
    harness.viewport().set_breakpoints(narrow);
    assert_eq!(harness.viewport().breakpoints(), narrow);
    assert_eq!(harness.render().texts(), ["Mobile View"]);
}

// ============================================================================
// Breakpoint sets
// ============================================================================

#[test]
fn test_range_gate_covers_multiple_breakpoints() {
    let mut harness = HeadlessHarness::new_with_width(500, || {
        stack((
            responsive(range(Breakpoint::Tablet..), || "Sidebar"),
            responsive(BreakpointSet::not(BreakpointSet::DESKTOP), || "Menu Button"),
        ))
    });
    assert_eq!(harness.render().texts(), ["Menu Button"]);

    harness.set_width(800);
    assert_eq!(harness.render().texts(), ["Sidebar", "Menu Button"]);

    harness.set_width(1200);
    assert_eq!(harness.render().texts(), ["Sidebar"]);
}

#[test]
fn test_gates_built_from_an_iterator() {
    let labels = ["Desktop View", "Tablet View", "Mobile View"];
    let mut harness = HeadlessHarness::new_with_width(800, || {
        stack_from_iter(
            Breakpoint::ALL
                .into_iter()
                .rev()
                .zip(labels)
                .map(|(bp, text)| responsive(bp.into(), move || text)),
        )
    });
    assert_eq!(harness.render().texts(), ["Tablet View"]);

    harness.set_width(2000);
    assert_eq!(harness.render().texts(), ["Desktop View"]);
}

#[test]
fn test_nested_gates() {
    let mut harness = HeadlessHarness::new_with_width(1200, || {
        responsive(range(Breakpoint::Tablet..), || {
            stack((
                "Navigation",
                desktop(|| "Wide Navigation"),
                tablet(|| "Compact Navigation"),
            ))
        })
    });
    assert_eq!(harness.render().texts(), ["Navigation", "Wide Navigation"]);

    harness.set_width(800);
    assert_eq!(
        harness.render().texts(),
        ["Navigation", "Compact Navigation"]
    );

    harness.set_width(300);
    assert!(harness.render().is_empty());

    harness.set_width(1000);
    assert_eq!(harness.render().texts(), ["Navigation", "Wide Navigation"]);
}

#[test]
fn test_explicit_viewport_gate() {
    let viewport = Viewport::new(1200);
    let gate = BreakpointGate::new_in(viewport, Breakpoint::Mobile, || "Mobile View");
    assert!(!gate.is_mounted());

    viewport.set_logical_width(320.7);
    assert_eq!(viewport.width_untracked(), 320);
    assert!(gate.is_mounted());
}
