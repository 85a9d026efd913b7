use std::borrow::Cow;

use crate::{
    id::ViewId,
    render::RenderCx,
    view::{AnyView, IntoView, View},
    view_tuple::ViewTuple,
};

/// Renders its children in order.
pub struct Stack {
    id: ViewId,
    children: Vec<AnyView>,
}

impl Stack {
    pub fn new(children: impl ViewTuple) -> Self {
        Self {
            id: ViewId::new(),
            children: children.into_views(),
        }
    }
}

impl<V: IntoView> FromIterator<V> for Stack {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            id: ViewId::new(),
            children: iter.into_iter().map(IntoView::into_any).collect(),
        }
    }
}

pub fn stack(children: impl ViewTuple) -> Stack {
    Stack::new(children)
}

pub fn stack_from_iter<V: IntoView>(children: impl IntoIterator<Item = V>) -> Stack {
    children.into_iter().collect()
}

impl View for Stack {
    fn id(&self) -> ViewId {
        self.id
    }

    fn debug_name(&self) -> Cow<'static, str> {
        "Stack".into()
    }

    fn render(&self, cx: &mut RenderCx) {
        cx.node(self.id, "Stack", None, |cx| {
            for child in &self.children {
                child.render(cx);
            }
        });
    }
}
