//! Testing utilities for floem_responsive views.
//!
//! # Example
//!
//! ```rust
//! use floem_responsive_test::prelude::*;
//!
//! let tracker = MountTracker::new();
//!
//! let mut harness = HeadlessHarness::new_with_width(1200, || {
//!     stack((
//!         desktop(tracker.track("desktop", || "Desktop View")),
//!         mobile(tracker.track("mobile", || "Mobile View")),
//!     ))
//! });
//!
//! harness.set_width(500);
//!
//! assert_eq!(tracker.mount_count("desktop"), 1);
//! assert_eq!(tracker.unmount_count("desktop"), 1);
//! assert_eq!(tracker.mounted_names(), ["mobile"]);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use floem_responsive::IntoView;
use floem_responsive_reactive::on_cleanup;

pub use floem_responsive::headless::*;

/// Prelude module for convenient imports in tests.
pub mod prelude {
    pub use super::{MountEvent, MountTracker, expected_text};
    pub use floem_responsive::headless::*;
    pub use floem_responsive::prelude::*;
    pub use floem_responsive::render::RenderTree;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MountEvent {
    Mounted(String),
    Unmounted(String),
}

/// Tracks when gated content is built and disposed.
///
/// Wrap a gate's child constructor with [`MountTracker::track`]; every build is
/// recorded as a mount, and the disposal of the scope it was built in as an
/// unmount.
#[derive(Clone, Default)]
pub struct MountTracker {
    events: Rc<RefCell<Vec<MountEvent>>>,
}

impl MountTracker {
    /// Create a new mount tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a child constructor so its mounts and unmounts are recorded under `name`.
    pub fn track<V, F>(&self, name: &str, child: F) -> impl Fn() -> V + use<V, F>
    where
        V: IntoView + 'static,
        F: Fn() -> V + 'static,
    {
        let events = self.events.clone();
        let name = name.to_string();
        move || {
            events.borrow_mut().push(MountEvent::Mounted(name.clone()));
            on_cleanup({
                let events = events.clone();
                let name = name.clone();
                move || events.borrow_mut().push(MountEvent::Unmounted(name))
            });
            child()
        }
    }

    /// All recorded events in order.
    pub fn events(&self) -> Vec<MountEvent> {
        self.events.borrow().clone()
    }

    pub fn mount_count(&self, name: &str) -> usize {
        self.count(|event| matches!(event, MountEvent::Mounted(n) if n == name))
    }

    pub fn unmount_count(&self, name: &str) -> usize {
        self.count(|event| matches!(event, MountEvent::Unmounted(n) if n == name))
    }

    /// Total number of mounts across all tracked names.
    pub fn total_mounts(&self) -> usize {
        self.count(|event| matches!(event, MountEvent::Mounted(_)))
    }

    /// Names that are mounted right now, in first-mount order.
    pub fn mounted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for event in self.events.borrow().iter() {
            match event {
                MountEvent::Mounted(name) => {
                    if !names.contains(name) {
                        names.push(name.clone());
                    }
                }
                MountEvent::Unmounted(name) => names.retain(|n| n != name),
            }
        }
        names
    }

    /// Reset the tracker, clearing all recorded events.
    pub fn reset(&self) {
        self.events.borrow_mut().clear();
    }

    fn count(&self, f: impl Fn(&MountEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|event| f(event)).count()
    }
}

/// The text a page of `"Desktop View"`, `"Tablet View"` and `"Mobile View"` gates
/// should render at `width` with the default thresholds.
pub fn expected_text(width: u32) -> &'static str {
    if width >= 992 {
        "Desktop View"
    } else if width >= 768 {
        "Tablet View"
    } else {
        "Mobile View"
    }
}
