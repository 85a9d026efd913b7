use std::{
    cell::{Cell, RefCell},
    collections::{HashMap, HashSet},
    rc::Rc,
};

use smallvec::SmallVec;

use crate::{
    effect::{EffectTrait, run_effect},
    id::Id,
    signal::Signal,
};

thread_local! {
    pub(crate) static RUNTIME: Runtime = Runtime::new();
}

/// The internal reactive Runtime which stores all the reactive system states in a
/// thread local
pub(crate) struct Runtime {
    pub(crate) current_effect: RefCell<Option<Rc<dyn EffectTrait>>>,
    pub(crate) current_scope: RefCell<Id>,
    pub(crate) children: RefCell<HashMap<Id, HashSet<Id>>>,
    pub(crate) parents: RefCell<HashMap<Id, Id>>,
    pub(crate) signals: RefCell<HashMap<Id, Signal>>,
    pub(crate) effects: RefCell<HashMap<Id, Rc<dyn EffectTrait>>>,
    pub(crate) cleanups: RefCell<HashMap<Id, Vec<Box<dyn FnOnce()>>>>,
    pub(crate) batch_depth: Cell<usize>,
    pub(crate) pending_effects: RefCell<SmallVec<[Rc<dyn EffectTrait>; 10]>>,
}

impl Runtime {
    pub(crate) fn new() -> Self {
        Self {
            current_effect: RefCell::new(None),
            current_scope: RefCell::new(Id::next()),
            children: RefCell::new(HashMap::new()),
            parents: RefCell::new(HashMap::new()),
            signals: Default::default(),
            effects: Default::default(),
            cleanups: Default::default(),
            batch_depth: Cell::new(0),
            pending_effects: RefCell::new(SmallVec::new()),
        }
    }

    pub(crate) fn is_batching(&self) -> bool {
        self.batch_depth.get() > 0
    }

    pub(crate) fn add_pending_effect(&self, effect: Rc<dyn EffectTrait>) {
        let has_effect = self
            .pending_effects
            .borrow()
            .iter()
            .any(|e| e.id() == effect.id());
        if !has_effect {
            self.pending_effects.borrow_mut().push(effect);
        }
    }
}

/// Runs every effect queued while batching. Effects may queue more work, so this
/// is called outside of any `RUNTIME` borrow.
pub(crate) fn run_pending_effects() {
    let pending = RUNTIME.with(|runtime| runtime.pending_effects.take());
    for effect in pending {
        run_effect(effect);
    }
}
