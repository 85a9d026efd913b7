//! Tests for subscription lifecycles.
//!
//! These tests verify that:
//! - Gates subscribe to the viewport on construction and unsubscribe on drop
//! - Host resize listeners are removed when their binding is dropped
//! - Unmounting a tree releases every effect created by gated content
//! - Leaked listeners are reported as warnings, not errors
//! - A resize that arrives while content mounts is classified again

use std::{
    io,
    rc::Rc,
    sync::{Arc, Mutex},
};

use floem_responsive::host::ViewportHost;
use floem_responsive_reactive::{create_effect, live_effect_count};
use floem_responsive_test::prelude::*;

/// Collects formatted log output written by the subscriber.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a subscriber recording warnings, returning what was logged.
fn capture_warnings(f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer({
            let logs = logs.clone();
            move || logs.clone()
        })
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = logs.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_gates_subscribe_once_each() {
    let harness = HeadlessHarness::new_with_width(1200, || {
        stack((
            desktop(|| "Desktop View"),
            tablet(|| "Tablet View"),
            mobile(|| "Mobile View"),
        ))
    });

    assert_eq!(harness.viewport().listener_count(), 3);
    assert_eq!(harness.host().listener_count(), 1);
}

#[test]
fn test_unmount_releases_gate_subscriptions() {
    let tracker = MountTracker::new();
    let mut harness = HeadlessHarness::new_with_width(800, || {
        stack((
            desktop(tracker.track("desktop", || "Desktop View")),
            tablet(tracker.track("tablet", || "Tablet View")),
        ))
    });

    harness.unmount();

    assert_eq!(harness.viewport().listener_count(), 0);
    assert_eq!(tracker.unmount_count("tablet"), 1);
    assert!(tracker.mounted_names().is_empty());

    // resizes after unmount reach nobody
    harness.set_width(1200);
    assert_eq!(tracker.mount_count("desktop"), 0);
}

#[test]
fn test_dropping_harness_releases_everything() {
    let baseline = live_effect_count();
    let host_listeners;

    {
        let harness = HeadlessHarness::new_with_width(1200, || {
            stack((desktop(|| "Desktop View"), mobile(|| "Mobile View")))
        });
        host_listeners = harness.host().listener_count();
        assert!(live_effect_count() > baseline);
    }

    assert_eq!(host_listeners, 1);
    assert_eq!(live_effect_count(), baseline);
}

#[test]
fn test_effects_inside_gated_content_are_released() {
    let width_reads = Rc::new(std::cell::Cell::new(0));
    let mut harness = HeadlessHarness::new_with_width(1200, || {
        let width_reads = width_reads.clone();
        desktop(move || {
            let viewport = Viewport::current();
            let width_reads = width_reads.clone();
            create_effect(move |_| {
                viewport.width();
                width_reads.set(width_reads.get() + 1);
            });
            "Desktop View"
        })
    });

    assert_eq!(width_reads.get(), 1);
    harness.set_width(1300);
    assert_eq!(width_reads.get(), 2);

    // crossing to mobile disposes the effect along with the desktop content
    harness.set_width(500);
    let after_unmount = width_reads.get();
    harness.set_width(600).set_width(700);
    assert_eq!(width_reads.get(), after_unmount);
}

#[test]
fn test_binding_drop_removes_host_listener() {
    let host = Rc::new(HeadlessHost::new(1024));
    let viewport = Viewport::new(0);

    {
        let binding = viewport.bind(&host);
        assert_eq!(binding.viewport(), viewport);
        assert_eq!(host.listener_count(), 1);
        assert_eq!(viewport.width_untracked(), host.width());
    }

    assert_eq!(host.listener_count(), 0);
    host.resize(300);
    assert_eq!(viewport.breakpoint_untracked(), Breakpoint::Desktop);
}

#[test]
fn test_each_harness_has_its_own_viewport() {
    let wide = HeadlessHarness::new_with_width(1200, || desktop(|| "Desktop View"));
    let mut narrow = HeadlessHarness::new_with_width(500, || mobile(|| "Mobile View"));

    narrow.set_width(400);

    assert_ne!(wide.viewport(), narrow.viewport());
    assert_eq!(wide.render().texts(), ["Desktop View"]);
    assert_eq!(narrow.render().texts(), ["Mobile View"]);
}

#[test]
fn test_host_dropped_with_listeners_warns() {
    let logs = capture_warnings(|| {
        let host = Rc::new(HeadlessHost::new(1024));
        let viewport = Viewport::new(0);
        std::mem::forget(viewport.bind(&host));
        drop(host);
    });

    assert!(
        logs.contains("headless host dropped with resize listeners still registered"),
        "{logs}"
    );
}

#[test]
fn test_resize_reaching_disposed_viewport_warns() {
    let host = Rc::new(HeadlessHost::new(1024));
    let viewport = Viewport::new(0);
    let binding = viewport.bind(&host);

    let logs = capture_warnings(|| {
        viewport.dispose();
        host.resize(500);
    });

    assert!(logs.contains("resize reached a disposed viewport"), "{logs}");
    drop(binding);
    assert_eq!(host.listener_count(), 0);
}

#[test]
fn test_clean_teardown_logs_nothing() {
    let logs = capture_warnings(|| {
        let mut harness = HeadlessHarness::new_with_width(1200, || {
            stack((desktop(|| "Desktop View"), mobile(|| "Mobile View")))
        });
        harness.set_width(500).set_width(900);
    });

    assert!(logs.is_empty(), "{logs}");
}

#[test]
fn test_resize_during_mount_is_reclassified() {
    let tracker = MountTracker::new();
    let mut harness = HeadlessHarness::new_with_width(1200, || {
        stack((
            desktop(tracker.track("desktop", || "Desktop View")),
            tablet(tracker.track("tablet", || "Tablet View")),
            // mounting mobile content widens the viewport, e.g. a scrollbar going away
            mobile(tracker.track("mobile", || {
                Viewport::current().set_width(780);
                "Mobile View"
            })),
        ))
    });

    harness.set_width(500);

    assert_eq!(harness.width(), 780);
    assert_eq!(harness.breakpoint(), Breakpoint::Tablet);
    assert_eq!(harness.render().texts(), ["Tablet View"]);
    assert_eq!(tracker.mounted_names(), ["tablet"]);
    assert_eq!(tracker.unmount_count("mobile"), 1);
}

#[test]
fn test_gate_without_target_warns_and_never_mounts() {
    let tracker = MountTracker::new();
    let mut harness = None;
    let logs = capture_warnings(|| {
        harness = Some(HeadlessHarness::new_with_width(1200, || {
            responsive(
                BreakpointSet::not(BreakpointSet::ALL),
                tracker.track("nowhere", || "Never"),
            )
        }));
    });
    let mut harness = harness.unwrap();
    harness.resize_through(&[800, 500, 1200]);

    assert!(logs.contains("gate targets no breakpoint"), "{logs}");
    assert_eq!(tracker.total_mounts(), 0);
    assert!(harness.render().texts().is_empty());
}
