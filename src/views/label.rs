use std::borrow::Cow;

use floem_responsive_reactive::untrack;

use crate::{id::ViewId, render::RenderCx, view::View};

enum LabelText {
    Static(String),
    Derived(Box<dyn Fn() -> String>),
}

/// A line of text.
pub struct Label {
    id: ViewId,
    text: LabelText,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: ViewId::new(),
            text: LabelText::Static(text.into()),
        }
    }

    /// A label whose text is recomputed every time it renders.
    pub fn derived(text: impl Fn() -> String + 'static) -> Self {
        Self {
            id: ViewId::new(),
            text: LabelText::Derived(Box::new(text)),
        }
    }

    pub fn text(&self) -> String {
        match &self.text {
            LabelText::Static(text) => text.clone(),
            LabelText::Derived(text) => untrack(text),
        }
    }
}

pub fn label(text: impl Fn() -> String + 'static) -> Label {
    Label::derived(text)
}

impl View for Label {
    fn id(&self) -> ViewId {
        self.id
    }

    fn debug_name(&self) -> Cow<'static, str> {
        "Label".into()
    }

    fn render(&self, cx: &mut RenderCx) {
        cx.node(self.id, "Label", Some(self.text()), |_| {});
    }
}
