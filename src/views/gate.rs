use std::{borrow::Cow, cell::RefCell, rc::Rc};

use floem_responsive_reactive::{Scope, untrack, with_scope};

use crate::{
    breakpoint::{Breakpoint, BreakpointSet},
    id::ViewId,
    render::RenderCx,
    view::{AnyView, IntoView, View},
    viewport::Viewport,
};

#[derive(Default)]
struct GateState {
    child: Option<(AnyView, Scope)>,
}

/// A container that mounts its child only while the viewport is at one of the
/// targeted breakpoints.
///
/// The child is built by a closure each time the gate becomes active, inside a
/// fresh scope that is disposed when the gate deactivates, with the gate's
/// viewport as the current one. While inactive the child does not exist:
/// nothing is rendered and none of its reactive state is alive. The gate itself
/// renders nothing of its own.
///
/// ```rust
/// use floem_responsive::prelude::*;
///
/// let page = stack((
///     desktop(|| "Desktop View"),
///     tablet(|| "Tablet View"),
///     mobile(|| "Mobile View"),
/// ));
/// ```
#[derive(educe::Educe)]
#[educe(Debug)]
pub struct BreakpointGate {
    id: ViewId,
    target: BreakpointSet,
    viewport: Viewport,
    scope: Scope,
    #[educe(Debug(ignore))]
    state: Rc<RefCell<GateState>>,
}

impl BreakpointGate {
    /// Gate `child` on the current thread's [`Viewport`].
    pub fn new<V: IntoView + 'static>(
        target: impl Into<BreakpointSet>,
        child: impl Fn() -> V + 'static,
    ) -> Self {
        Self::new_in(Viewport::current(), target, child)
    }

    pub fn new_in<V: IntoView + 'static>(
        viewport: Viewport,
        target: impl Into<BreakpointSet>,
        child: impl Fn() -> V + 'static,
    ) -> Self {
        let id = ViewId::new();
        let target = target.into();
        if target.is_empty() {
            tracing::warn!(gate = id.to_raw(), "gate targets no breakpoint and will never mount");
        }
        let scope = Scope::current().create_child();
        let state = Rc::new(RefCell::new(GateState::default()));

        scope.create_effect({
            let state = state.clone();
            move |_| {
                let breakpoint = viewport.breakpoint();
                let active = target.contains(breakpoint);
                let mounted = state.borrow().child.is_some();

                if active && !mounted {
                    let child_scope = scope.create_child();
                    // the child must not subscribe this effect to what it reads
                    let view = untrack(|| {
                        viewport.with_current(|| with_scope(child_scope, || child().into_any()))
                    });
                    state.borrow_mut().child = Some((view, child_scope));
                    tracing::trace!(gate = id.to_raw(), %breakpoint, "gate mounted");
                } else if !active && mounted {
                    let unmounted = state.borrow_mut().child.take();
                    if let Some((view, child_scope)) = unmounted {
                        drop(view);
                        child_scope.dispose();
                        tracing::trace!(gate = id.to_raw(), %breakpoint, "gate unmounted");
                    }
                }
            }
        });

        Self {
            id,
            target,
            viewport,
            scope,
            state,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.state.borrow().child.is_some()
    }
}

impl Drop for BreakpointGate {
    fn drop(&mut self) {
        let child = self.state.borrow_mut().child.take();
        drop(child);
        self.scope.dispose();
    }
}

impl View for BreakpointGate {
    fn id(&self) -> ViewId {
        self.id
    }

    fn debug_name(&self) -> Cow<'static, str> {
        let names: Vec<&str> = self.target.breakpoints().map(Breakpoint::name).collect();
        if names.len() == 1 {
            names[0].into()
        } else {
            format!("Responsive({})", names.join("|")).into()
        }
    }

    fn render(&self, cx: &mut RenderCx) {
        if let Some((child, _)) = &self.state.borrow().child {
            child.render(cx);
        }
    }
}

/// Content shown only at the `Desktop` breakpoint.
pub fn desktop<V: IntoView + 'static>(child: impl Fn() -> V + 'static) -> BreakpointGate {
    BreakpointGate::new(Breakpoint::Desktop, child)
}

/// Content shown only at the `Tablet` breakpoint.
pub fn tablet<V: IntoView + 'static>(child: impl Fn() -> V + 'static) -> BreakpointGate {
    BreakpointGate::new(Breakpoint::Tablet, child)
}

/// Content shown only at the `Mobile` breakpoint.
pub fn mobile<V: IntoView + 'static>(child: impl Fn() -> V + 'static) -> BreakpointGate {
    BreakpointGate::new(Breakpoint::Mobile, child)
}

/// Content shown at any breakpoint of `target`, e.g. `range(Breakpoint::Tablet..)`.
pub fn responsive<V: IntoView + 'static>(
    target: BreakpointSet,
    child: impl Fn() -> V + 'static,
) -> BreakpointGate {
    BreakpointGate::new(target, child)
}
