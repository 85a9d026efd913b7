//! The observable viewport.
//!
//! A [`Viewport`] holds the current width and the breakpoint thresholds as
//! signals, and derives the active [`Breakpoint`] as a memo. Anything reading
//! [`Viewport::breakpoint`] inside an effect re-runs only when the breakpoint
//! changes, not on every pixel of a resize.
//!
//! Each UI thread has a current viewport, used by the breakpoint gates when no
//! viewport is passed explicitly. Tests replace it with [`Viewport::with_current`]
//! to drive arbitrary widths without a real window.

use std::cell::Cell;

use floem_responsive_reactive::{Memo, RwSignal, Scope, SignalGet, SignalUpdate, SignalWith};

use crate::breakpoint::{Breakpoint, Breakpoints, logical_width};

thread_local! {
    static CURRENT_VIEWPORT: Cell<Option<Viewport>> = const { Cell::new(None) };
}

#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    scope: Scope,
    width: RwSignal<u32>,
    breakpoints: RwSignal<Breakpoints>,
    breakpoint: Memo<Breakpoint>,
}

impl PartialEq for Viewport {
    fn eq(&self, other: &Self) -> bool {
        self.scope == other.scope
    }
}

impl Eq for Viewport {}

impl Viewport {
    pub fn new(width: u32) -> Self {
        Self::with_breakpoints(width, Breakpoints::default())
    }

    pub fn with_breakpoints(width: u32, breakpoints: Breakpoints) -> Self {
        let scope = Scope::new();
        let width = scope.create_rw_signal(width);
        let breakpoints = scope.create_rw_signal(breakpoints);
        let breakpoint = scope.create_memo(move |prev: Option<&Breakpoint>| {
            let width = width.get();
            let next = breakpoints.with(|bps| bps.classify(width));
            if let Some(prev) = prev
                && *prev != next
            {
                tracing::debug!(from = %prev, to = %next, width, "breakpoint changed");
            }
            next
        });

        Self {
            scope,
            width,
            breakpoints,
            breakpoint,
        }
    }

    #[cfg(feature = "serde")]
    pub fn from_config(config: &crate::config::ResponsiveConfig) -> Self {
        Self::with_breakpoints(config.initial_width, config.breakpoints)
    }

    /// The viewport of the current thread, created at width 0 on first use.
    pub fn current() -> Viewport {
        CURRENT_VIEWPORT.with(|current| match current.get() {
            Some(viewport) if !viewport.is_disposed() => viewport,
            _ => {
                let viewport = Viewport::new(0);
                current.set(Some(viewport));
                viewport
            }
        })
    }

    /// Makes this the current viewport, returning the one it replaced.
    pub fn provide(self) -> Option<Viewport> {
        CURRENT_VIEWPORT.with(|current| current.replace(Some(self)))
    }

    /// Runs `f` with this as the current viewport.
    pub fn with_current<T>(self, f: impl FnOnce() -> T) -> T {
        let prev = self.provide();
        let result = f();
        CURRENT_VIEWPORT.with(|current| current.set(prev));
        result
    }

    /// The current width. Subscribes the running effect to every width change.
    pub fn width(&self) -> u32 {
        self.width.get()
    }

    pub fn width_untracked(&self) -> u32 {
        self.width.get_untracked()
    }

    /// Applies a width reported by the host. Setting the width it already has
    /// notifies nobody.
    pub fn set_width(&self, width: u32) {
        if self.width.try_get_untracked() == Some(width) {
            return;
        }
        if self.width.try_update(|current| *current = width).is_none() {
            tracing::warn!(
                width,
                "resize reached a disposed viewport; a resize listener outlived it"
            );
        }
    }

    pub fn set_logical_width(&self, width: f64) {
        self.set_width(logical_width(width));
    }

    pub fn breakpoints(&self) -> Breakpoints {
        self.breakpoints.get_untracked()
    }

    pub fn set_breakpoints(&self, breakpoints: Breakpoints) {
        if self.breakpoints.get_untracked() != breakpoints {
            self.breakpoints.set(breakpoints);
        }
    }

    /// The active breakpoint. Subscribes the running effect to breakpoint
    /// changes only.
    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint.get()
    }

    pub fn breakpoint_untracked(&self) -> Breakpoint {
        self.breakpoint.get_untracked()
    }

    /// Calls `f` every time the breakpoint changes, until the returned
    /// [`Subscription`] is dropped.
    pub fn subscribe(&self, f: impl Fn(Breakpoint) + 'static) -> Subscription {
        let breakpoint = self.breakpoint;
        let scope = self.scope.create_child();
        scope.create_effect(move |prev: Option<Breakpoint>| {
            let next = breakpoint.get();
            if prev.is_some_and(|prev| prev != next) {
                f(next);
            }
            next
        });
        Subscription { scope }
    }

    /// Calls `f` on every width change, until the returned [`Subscription`] is
    /// dropped.
    pub fn subscribe_width(&self, f: impl Fn(u32) + 'static) -> Subscription {
        let width = self.width;
        let scope = self.scope.create_child();
        scope.create_effect(move |prev: Option<u32>| {
            let next = width.get();
            if prev.is_some() {
                f(next);
            }
            next
        });
        Subscription { scope }
    }

    /// Effects outside the viewport itself that are subscribed to it.
    pub fn listener_count(&self) -> usize {
        // the breakpoint memo is always subscribed to the width
        self.breakpoint.subscriber_count() + self.width.subscriber_count().saturating_sub(1)
    }

    pub fn is_disposed(&self) -> bool {
        self.width.is_disposed()
    }

    /// Releases the viewport and every subscription made through it.
    pub fn dispose(&self) {
        self.scope.dispose();
    }
}

/// Keeps a viewport listener registered. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
#[derive(Debug)]
pub struct Subscription {
    scope: Scope,
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.scope.dispose();
    }
}
