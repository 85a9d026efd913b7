//! Binding a [`Viewport`] to the environment that owns the rendering surface.

use std::{
    rc::{Rc, Weak},
    sync::atomic::{AtomicU64, Ordering},
};

use crate::viewport::Viewport;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn next() -> ListenerId {
        static LISTENER_ID_COUNTER: AtomicU64 = AtomicU64::new(0);
        ListenerId(LISTENER_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

pub type ResizeListener = Rc<dyn Fn(u32)>;

/// A rendering surface that reports its width and notifies on resize.
pub trait ViewportHost {
    /// The current width in device-independent pixels.
    fn width(&self) -> u32;

    fn add_resize_listener(&self, listener: ResizeListener) -> ListenerId;

    fn remove_resize_listener(&self, id: ListenerId);
}

/// A registered resize listener. The listener is removed from the host when the
/// binding is dropped.
#[must_use = "dropping a HostBinding removes its resize listener"]
pub struct HostBinding<H: ViewportHost + ?Sized> {
    host: Weak<H>,
    listener: ListenerId,
    viewport: Viewport,
}

impl<H: ViewportHost + ?Sized> HostBinding<H> {
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

impl<H: ViewportHost + ?Sized> Drop for HostBinding<H> {
    fn drop(&mut self) {
        if let Some(host) = self.host.upgrade() {
            host.remove_resize_listener(self.listener);
            tracing::trace!(listener = ?self.listener, "resize listener removed");
        }
    }
}

impl Viewport {
    /// Syncs the viewport to the host's width and follows its resizes until the
    /// returned binding is dropped.
    pub fn bind<H: ViewportHost + ?Sized>(self, host: &Rc<H>) -> HostBinding<H> {
        self.set_width(host.width());
        let listener = host.add_resize_listener(Rc::new(move |width| self.set_width(width)));
        tracing::trace!(?listener, width = host.width(), "resize listener added");
        HostBinding {
            host: Rc::downgrade(host),
            listener,
            viewport: self,
        }
    }
}
