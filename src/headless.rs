//! Headless harness for responsive UI testing and benchmarking.
//!
//! [`HeadlessHost`] stands in for a window: it has a width and a list of resize
//! listeners. [`HeadlessHarness`] builds a view tree against a fresh viewport
//! bound to such a host, so tests can resize and inspect what is rendered
//! without touching a display.
//!
//! # Example
//!
//! ```rust
//! use floem_responsive::headless::HeadlessHarness;
//! use floem_responsive::prelude::*;
//!
//! let mut harness = HeadlessHarness::new_with_width(1200, || {
//!     stack((
//!         desktop(|| "Desktop View"),
//!         tablet(|| "Tablet View"),
//!         mobile(|| "Mobile View"),
//!     ))
//! });
//! assert_eq!(harness.render().texts(), ["Desktop View"]);
//!
//! harness.set_width(500);
//! assert_eq!(harness.render().texts(), ["Mobile View"]);
//! ```

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use floem_responsive_reactive::{Scope, batch, with_scope};
use rustc_hash::FxHashMap;

use crate::{
    breakpoint::{Breakpoint, Breakpoints},
    host::{HostBinding, ListenerId, ResizeListener, ViewportHost},
    render::{RenderCx, RenderTree},
    view::{AnyView, IntoView},
    viewport::Viewport,
};

/// An in-memory [`ViewportHost`].
#[derive(Default)]
pub struct HeadlessHost {
    width: Cell<u32>,
    listeners: RefCell<FxHashMap<ListenerId, ResizeListener>>,
}

impl HeadlessHost {
    pub fn new(width: u32) -> Self {
        Self {
            width: Cell::new(width),
            listeners: Default::default(),
        }
    }

    /// Changes the width and notifies every listener.
    pub fn resize(&self, width: u32) {
        self.width.set(width);
        let listeners: Vec<ResizeListener> = self.listeners.borrow().values().cloned().collect();
        for listener in listeners {
            listener(width);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl ViewportHost for HeadlessHost {
    fn width(&self) -> u32 {
        self.width.get()
    }

    fn add_resize_listener(&self, listener: ResizeListener) -> ListenerId {
        let id = ListenerId::next();
        self.listeners.borrow_mut().insert(id, listener);
        id
    }

    fn remove_resize_listener(&self, id: ListenerId) {
        self.listeners.borrow_mut().remove(&id);
    }
}

impl Drop for HeadlessHost {
    fn drop(&mut self) {
        let leaked = self.listeners.get_mut().len();
        if leaked > 0 {
            tracing::warn!(leaked, "headless host dropped with resize listeners still registered");
        }
    }
}

/// A headless harness for responsive UI testing and benchmarking.
pub struct HeadlessHarness {
    root: Option<AnyView>,
    scope: Scope,
    binding: Option<HostBinding<HeadlessHost>>,
    host: Rc<HeadlessHost>,
    viewport: Viewport,
}

impl HeadlessHarness {
    /// Create a new headless harness at the default width (800).
    pub fn new<V: IntoView>(view: impl FnOnce() -> V) -> Self {
        Self::new_with_width(800, view)
    }

    pub fn new_with_width<V: IntoView>(width: u32, view: impl FnOnce() -> V) -> Self {
        Self::new_with_breakpoints(width, Breakpoints::default(), view)
    }

    #[cfg(feature = "serde")]
    pub fn new_with_config<V: IntoView>(
        config: &crate::config::ResponsiveConfig,
        view: impl FnOnce() -> V,
    ) -> Self {
        Self::new_with_viewport(Viewport::from_config(config), view)
    }

    pub fn new_with_breakpoints<V: IntoView>(
        width: u32,
        breakpoints: Breakpoints,
        view: impl FnOnce() -> V,
    ) -> Self {
        Self::new_with_viewport(Viewport::with_breakpoints(width, breakpoints), view)
    }

    /// Builds `view` with `viewport` as the current viewport, bound to a new
    /// host of the viewport's width.
    fn new_with_viewport<V: IntoView>(viewport: Viewport, view: impl FnOnce() -> V) -> Self {
        let host = Rc::new(HeadlessHost::new(viewport.width_untracked()));
        let binding = viewport.bind(&host);
        let scope = Scope::new();
        let root = viewport.with_current(|| with_scope(scope, || view().into_any()));

        Self {
            root: Some(root),
            scope,
            binding: Some(binding),
            host,
            viewport,
        }
    }

    /// Resize the host, as a window resize would.
    pub fn set_width(&mut self, width: u32) -> &mut Self {
        self.host.resize(width);
        self
    }

    /// Resize through every width in order, each one observed.
    pub fn resize_through(&mut self, widths: &[u32]) -> &mut Self {
        for width in widths {
            self.host.resize(*width);
        }
        self
    }

    /// Resize through every width as one instantaneous change: only the last
    /// width is observed by the view tree.
    pub fn resize_batched(&mut self, widths: &[u32]) -> &mut Self {
        batch(|| {
            for width in widths {
                self.host.resize(*width);
            }
        });
        self
    }

    pub fn width(&self) -> u32 {
        self.viewport.width_untracked()
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.viewport.breakpoint_untracked()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn host(&self) -> &HeadlessHost {
        &self.host
    }

    pub fn render(&self) -> RenderTree {
        let mut cx = RenderCx::new();
        if let Some(root) = &self.root {
            root.render(&mut cx);
        }
        cx.finish()
    }

    /// Drops the view tree and releases everything it registered. The viewport
    /// stays bound to the host.
    pub fn unmount(&mut self) {
        self.root.take();
        self.scope.dispose();
    }
}

impl Drop for HeadlessHarness {
    fn drop(&mut self) {
        self.unmount();
        self.binding.take();
        self.viewport.dispose();
    }
}
