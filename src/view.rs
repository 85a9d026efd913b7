//! # View and IntoView
//!
//! A [`View`] is a node of the UI tree that knows how to describe itself into a
//! [`RenderCx`]. Views are owned by their parent; dropping a view releases any
//! reactive state it registered.
//!
//! [`IntoView`] lets plain strings be used where a view is expected:
//!
//! ```rust
//! use floem_responsive::prelude::*;
//!
//! let page = stack(("Title", Label::new("Body")));
//! ```

use std::borrow::Cow;

use crate::{id::ViewId, render::RenderCx, views::Label};

pub trait View {
    fn id(&self) -> ViewId;

    fn debug_name(&self) -> Cow<'static, str> {
        std::any::type_name::<Self>().into()
    }

    /// Describe this view and its visible children into `cx`.
    fn render(&self, cx: &mut RenderCx);
}

/// A type-erased, heap-allocated view.
pub type AnyView = Box<dyn View>;

impl View for Box<dyn View> {
    fn id(&self) -> ViewId {
        (**self).id()
    }

    fn debug_name(&self) -> Cow<'static, str> {
        (**self).debug_name()
    }

    fn render(&self, cx: &mut RenderCx) {
        (**self).render(cx)
    }
}

pub trait IntoView: Sized {
    type V: View + 'static;

    fn into_view(self) -> Self::V;

    fn into_any(self) -> AnyView {
        Box::new(self.into_view())
    }
}

impl<V: View + 'static> IntoView for V {
    type V = V;

    fn into_view(self) -> Self::V {
        self
    }
}

impl IntoView for &'static str {
    type V = Label;

    fn into_view(self) -> Self::V {
        Label::new(self)
    }
}

impl IntoView for String {
    type V = Label;

    fn into_view(self) -> Self::V {
        Label::new(self)
    }
}
