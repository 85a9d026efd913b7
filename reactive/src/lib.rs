//! # Floem Responsive Reactive
//!
//! Fine-grained reactivity for `floem_responsive`. All state lives in a thread
//! local runtime, so signals, memos and effects must be created and used on the
//! UI thread.
//!
//! The building blocks are:
//! - [`RwSignal`]: a value that notifies the effects reading it when it changes.
//!   It is read through [`SignalGet`] and [`SignalWith`] and written through
//!   [`SignalUpdate`].
//! - [`create_effect`]: a closure re-run whenever the signals it read change.
//! - [`Memo`]: a derived value that only notifies when the derived result changes.
//! - [`Scope`]: the owner of signals and effects. Disposing a scope releases
//!   everything created under it.

mod effect;
mod id;
mod memo;
mod read;
mod runtime;
mod scope;
mod signal;
mod write;

pub use effect::{batch, create_effect, live_effect_count, on_cleanup, untrack};
pub use memo::{Memo, create_memo};
pub use read::{SignalGet, SignalWith};
pub use scope::{Scope, with_scope};
pub use signal::{ReadSignal, RwSignal, WriteSignal, create_rw_signal, create_signal};
pub use write::SignalUpdate;
