use std::{any::Any, fmt};

use crate::{
    effect::create_effect,
    id::Id,
    memo::{Memo, create_memo},
    runtime::RUNTIME,
    signal::{RwSignal, create_rw_signal},
};

/// You can manually control a Signal's lifetime by using Scope.
/// Every Signal and Effect belongs to a Scope, created explicitly or implicitly,
/// and disposing the Scope cleans up everything that belongs to it and to its
/// child Scopes.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Scope(pub(crate) Id);

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope").field("id", &self.0).finish()
    }
}

impl Scope {
    /// Create a new Scope that isn't a child or parent of any scope
    pub fn new() -> Self {
        Self(Id::next())
    }

    /// The current Scope in the Runtime. Anything created without an explicit
    /// Scope goes under this one.
    pub fn current() -> Scope {
        RUNTIME.with(|runtime| Scope(*runtime.current_scope.borrow()))
    }

    /// Create a child Scope of this Scope
    pub fn create_child(&self) -> Scope {
        let child = Id::next();
        self.0.add_child(child);
        Scope(child)
    }

    /// Create a RwSignal under this Scope
    pub fn create_rw_signal<T>(self, value: T) -> RwSignal<T>
    where
        T: Any + 'static,
    {
        with_scope(self, || create_rw_signal(value))
    }

    /// Create a Memo under this Scope
    pub fn create_memo<T>(self, f: impl Fn(Option<&T>) -> T + 'static) -> Memo<T>
    where
        T: PartialEq + 'static,
    {
        with_scope(self, || create_memo(f))
    }

    /// Create an effect under this Scope
    pub fn create_effect<T>(self, f: impl Fn(Option<T>) -> T + 'static)
    where
        T: Any + 'static,
    {
        with_scope(self, || create_effect(f))
    }

    /// Whether anything created under this Scope is still alive
    pub fn has_children(&self) -> bool {
        RUNTIME.with(|runtime| {
            runtime
                .children
                .borrow()
                .get(&self.0)
                .is_some_and(|children| !children.is_empty())
        })
    }

    /// Dispose this Scope, cleaning up all the Signals, Effects and child Scopes
    /// of this Scope.
    pub fn dispose(&self) {
        self.0.dispose();
    }
}

/// Runs the given code with the given Scope
pub fn with_scope<T>(scope: Scope, f: impl FnOnce() -> T) -> T {
    let prev_scope = RUNTIME.with(|runtime| runtime.current_scope.replace(scope.0));

    let result = f();

    RUNTIME.with(|runtime| {
        *runtime.current_scope.borrow_mut() = prev_scope;
    });

    result
}
