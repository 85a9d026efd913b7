use std::{
    any::Any,
    cell::{Cell, RefCell},
    collections::HashSet,
    rc::Rc,
};

use crate::{
    id::Id,
    runtime::{RUNTIME, run_pending_effects},
    scope::{Scope, with_scope},
};

pub(crate) trait EffectTrait {
    fn id(&self) -> Id;
    fn run(&self);
    fn is_running(&self) -> bool;
    fn mark_dirty(&self);
    fn take_dirty(&self) -> bool;
    fn add_observer(&self, signal: Id);
    fn remove_observer(&self, signal: Id);
    fn take_observers(&self) -> HashSet<Id>;
}

struct EffectState<T, F>
where
    T: 'static,
    F: Fn(Option<T>) -> T,
{
    id: Id,
    f: F,
    value: RefCell<Option<T>>,
    running: Cell<bool>,
    dirty: Cell<bool>,
    observers: RefCell<HashSet<Id>>,
}

impl<T, F> EffectTrait for EffectState<T, F>
where
    T: 'static,
    F: Fn(Option<T>) -> T,
{
    fn id(&self) -> Id {
        self.id
    }

    fn run(&self) {
        self.running.set(true);
        let curr_value = self.value.borrow_mut().take();
        let new_value = (self.f)(curr_value);
        *self.value.borrow_mut() = Some(new_value);
        self.running.set(false);
    }

    fn is_running(&self) -> bool {
        self.running.get()
    }

    fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    fn add_observer(&self, signal: Id) {
        self.observers.borrow_mut().insert(signal);
    }

    fn remove_observer(&self, signal: Id) {
        self.observers.borrow_mut().remove(&signal);
    }

    fn take_observers(&self) -> HashSet<Id> {
        self.observers.take()
    }
}

/// Create an Effect that runs the given function whenever the Signals it read
/// in its last run change.
///
/// The function runs immediately once. The effect re-tracks on every run, so it
/// is only re-run by the Signals that were actually read in the previous run.
/// The effect belongs to the current [`Scope`] and never runs again once that
/// scope is disposed.
pub fn create_effect<T>(f: impl Fn(Option<T>) -> T + 'static)
where
    T: Any + 'static,
{
    let id = Id::next();
    let effect: Rc<dyn EffectTrait> = Rc::new(EffectState {
        id,
        f,
        value: RefCell::new(None::<T>),
        running: Cell::new(false),
        dirty: Cell::new(false),
        observers: RefCell::new(HashSet::new()),
    });
    id.set_scope();
    RUNTIME.with(|runtime| runtime.effects.borrow_mut().insert(id, effect.clone()));

    run_effect(effect);
}

/// Signals read inside `f` are not subscribed to by the running effect
pub fn untrack<T>(f: impl FnOnce() -> T) -> T {
    let prev_effect = RUNTIME.with(|runtime| runtime.current_effect.borrow_mut().take());
    let result = f();
    RUNTIME.with(|runtime| {
        *runtime.current_effect.borrow_mut() = prev_effect;
    });
    result
}

/// Runs `f` while deferring effects. Every effect triggered inside runs at most
/// once, after the outermost batch returns.
pub fn batch<T>(f: impl FnOnce() -> T) -> T {
    RUNTIME.with(|runtime| runtime.batch_depth.set(runtime.batch_depth.get() + 1));
    let result = f();
    let flush = RUNTIME.with(|runtime| {
        let depth = runtime.batch_depth.get() - 1;
        runtime.batch_depth.set(depth);
        depth == 0
    });
    if flush {
        run_pending_effects();
    }
    result
}

/// Registers `f` to run when the current scope is disposed, or when the current
/// effect re-runs.
pub fn on_cleanup(f: impl FnOnce() + 'static) {
    RUNTIME.with(|runtime| {
        let scope = *runtime.current_scope.borrow();
        runtime
            .cleanups
            .borrow_mut()
            .entry(scope)
            .or_default()
            .push(Box::new(f));
    });
}

/// Number of effects alive on this thread's runtime.
pub fn live_effect_count() -> usize {
    RUNTIME.with(|runtime| runtime.effects.borrow().len())
}

pub(crate) fn run_effect(effect: Rc<dyn EffectTrait>) {
    // A subscriber snapshot may still hold effects disposed earlier in the same pass
    if !effect.id().is_live_effect() {
        return;
    }

    // Triggered by its own run, directly or through the effects it notified.
    // The run in progress may have read stale values, so run again once it returns.
    if effect.is_running() {
        effect.mark_dirty();
        return;
    }

    loop {
        effect.id().dispose_children();

        observer_clean_up(&effect);

        let prev_effect =
            RUNTIME.with(|runtime| runtime.current_effect.replace(Some(effect.clone())));

        with_scope(Scope(effect.id()), || {
            effect.run();
        });

        RUNTIME.with(|runtime| {
            *runtime.current_effect.borrow_mut() = prev_effect;
        });

        if !effect.take_dirty() || !effect.id().is_live_effect() {
            break;
        }
    }
}

/// Clears the effect from all the Signals it subscribed to, so that the next run
/// can re-track signals.
pub(crate) fn observer_clean_up(effect: &Rc<dyn EffectTrait>) {
    for signal in effect.take_observers() {
        if let Some(signal) = signal.signal() {
            signal.subscribers.borrow_mut().remove(&effect.id());
        }
    }
}
