use std::{fmt, marker::PhantomData};

use crate::{
    effect::create_effect,
    read::SignalWith,
    scope::{Scope, with_scope},
    signal::{ReadSignal, create_signal},
    write::SignalUpdate,
};

/// A derived value. Its effects only re-run when the computed value changes,
/// not every time one of its sources does.
pub struct Memo<T> {
    getter: ReadSignal<Option<T>>,
    ty: PhantomData<T>,
}

impl<T> Copy for Memo<T> {}

impl<T> Clone for Memo<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> fmt::Debug for Memo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memo").field("getter", &self.getter).finish()
    }
}

impl<T: PartialEq + 'static> Memo<T> {
    pub fn new(f: impl Fn(Option<&T>) -> T + 'static) -> Self {
        create_memo(f)
    }
}

impl<T: Clone + 'static> Memo<T> {
    pub fn get(&self) -> T {
        self.with(T::clone)
    }

    pub fn get_untracked(&self) -> T {
        self.with_untracked(T::clone)
    }
}

impl<T: 'static> Memo<T> {
    pub fn with<O>(&self, f: impl FnOnce(&T) -> O) -> O {
        self.getter
            .with(|value| f(value.as_ref().expect("memo computes on creation")))
    }

    pub fn with_untracked<O>(&self, f: impl FnOnce(&T) -> O) -> O {
        self.getter
            .with_untracked(|value| f(value.as_ref().expect("memo computes on creation")))
    }

    /// The number of effects depending on this memo.
    pub fn subscriber_count(&self) -> usize {
        self.getter.subscriber_count()
    }
}

pub fn create_memo<T>(f: impl Fn(Option<&T>) -> T + 'static) -> Memo<T>
where
    T: PartialEq + 'static,
{
    let (getter, setter) = create_signal(None::<T>);
    let id = getter.id;

    with_scope(Scope(id).create_child(), move || {
        create_effect(move |_| {
            let (is_different, new_value) = getter.with_untracked(|value| {
                let new_value = f(value.as_ref());
                (Some(&new_value) != value.as_ref(), new_value)
            });
            if is_different {
                setter.set(Some(new_value));
            }
        });
    });

    Memo {
        getter,
        ty: PhantomData,
    }
}
