use std::sync::atomic::{AtomicU64, Ordering};

use crate::{effect::observer_clean_up, runtime::RUNTIME, signal::Signal};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A stable identifier for a signal, an effect or a scope. Ids are allocated in
/// increasing order, so comparing two ids compares their creation order.
pub struct Id(u64);

impl Id {
    pub(crate) fn next() -> Id {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Id(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub(crate) fn signal(&self) -> Option<Signal> {
        RUNTIME.with(|runtime| runtime.signals.borrow().get(self).cloned())
    }

    pub(crate) fn add_signal(&self, signal: Signal) {
        RUNTIME.with(|runtime| runtime.signals.borrow_mut().insert(*self, signal));
    }

    pub(crate) fn is_live_effect(&self) -> bool {
        RUNTIME.with(|runtime| runtime.effects.borrow().contains_key(self))
    }

    /// Registers this id as a child of the current scope.
    pub(crate) fn set_scope(&self) {
        let scope = RUNTIME.with(|runtime| *runtime.current_scope.borrow());
        scope.add_child(*self);
    }

    pub(crate) fn add_child(&self, child: Id) {
        RUNTIME.with(|runtime| {
            runtime
                .children
                .borrow_mut()
                .entry(*self)
                .or_default()
                .insert(child);
            runtime.parents.borrow_mut().insert(child, *self);
        });
    }

    /// Disposes everything created under this id and runs its cleanups, but keeps
    /// the id itself alive. Effects call this before every run.
    pub(crate) fn dispose_children(&self) {
        let (children, cleanups) = RUNTIME.with(|runtime| {
            (
                runtime.children.borrow_mut().remove(self),
                runtime.cleanups.borrow_mut().remove(self),
            )
        });

        if let Some(children) = children {
            for child in children {
                child.dispose();
            }
        }

        if let Some(cleanups) = cleanups {
            for cleanup in cleanups {
                cleanup();
            }
        }
    }

    pub(crate) fn dispose(&self) {
        RUNTIME.with(|runtime| {
            if let Some(parent) = runtime.parents.borrow_mut().remove(self)
                && let Some(siblings) = runtime.children.borrow_mut().get_mut(&parent)
            {
                siblings.remove(self);
            }
        });

        self.dispose_children();

        let (signal, effect) = RUNTIME.with(|runtime| {
            (
                runtime.signals.borrow_mut().remove(self),
                runtime.effects.borrow_mut().remove(self),
            )
        });

        if let Some(effect) = effect {
            observer_clean_up(&effect);
        }

        if let Some(signal) = signal {
            for (_, effect) in signal.subscribers() {
                effect.remove_observer(*self);
            }
            signal.subscribers.borrow_mut().clear();
        }
    }
}
