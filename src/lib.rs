//! # Floem Responsive
//! Breakpoint-gated views for Floem-style reactive UIs.
//!
//! The viewport width is classified into one of three breakpoints, `Mobile`,
//! `Tablet` or `Desktop`, and content wrapped in a gate for a breakpoint only
//! exists while that breakpoint is active.
//!
//! ## Example
//! ```rust
//! use floem_responsive::headless::HeadlessHarness;
//! use floem_responsive::prelude::*;
//!
//! let mut harness = HeadlessHarness::new_with_width(800, || {
//!     stack((
//!         desktop(|| "Desktop View"),
//!         tablet(|| "Tablet View"),
//!         mobile(|| "Mobile View"),
//!     ))
//! });
//!
//! assert_eq!(harness.render().texts(), ["Tablet View"]);
//! ```
//!
//! ## Breakpoints
//! [`Breakpoints`](breakpoint::Breakpoints) holds the two thresholds, 768 and
//! 992 by default. A width at or above `desktop` is `Desktop`, at or above
//! `tablet` is `Tablet`, and anything narrower is `Mobile`. Thresholds can be
//! loaded from JSON with [`ResponsiveConfig`](config::ResponsiveConfig).
//!
//! ## The viewport
//! A [`Viewport`](viewport::Viewport) keeps the width in a signal and derives
//! the breakpoint from it as a memo, so gates re-run only when a resize crosses
//! a threshold. Every UI thread has a current viewport; a real window drives it
//! through a [`ViewportHost`](host::ViewportHost) binding, tests through the
//! [`headless`] harness.
//!
//! ## Gates
//! [`desktop`](views::desktop), [`tablet`](views::tablet) and
//! [`mobile`](views::mobile) are all the same
//! [`BreakpointGate`](views::BreakpointGate) with a different target. Use
//! [`responsive`](views::responsive) with a
//! [`BreakpointSet`](breakpoint::BreakpointSet) to target several breakpoints at
//! once. The gated child is built when the gate activates and disposed when it
//! deactivates, together with every signal and effect it created.

pub mod breakpoint;
#[cfg(feature = "serde")]
pub mod config;
pub mod error;
pub mod headless;
pub mod host;
pub mod id;
pub mod render;
pub mod view;
pub mod view_tuple;
pub mod viewport;
pub mod views;

pub use floem_responsive_reactive as reactive;

pub use breakpoint::{Breakpoint, BreakpointSet, Breakpoints};
pub use error::ResponsiveError;
pub use id::ViewId;
pub use view::{AnyView, IntoView, View};
pub use viewport::{Subscription, Viewport};

pub mod prelude {
    pub use crate::breakpoint::{Breakpoint, BreakpointSet, Breakpoints, range};
    pub use crate::view_tuple::ViewTuple;
    pub use crate::views::*;
    pub use crate::viewport::Viewport;
    pub use crate::{IntoView, View};
    pub use floem_responsive_reactive::{
        RwSignal, SignalGet, SignalUpdate, SignalWith, create_rw_signal, create_signal,
    };
}
