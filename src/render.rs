//! Headless rendering.
//!
//! Rendering walks the view tree and records every view that is present as a
//! [`RenderNode`]. Views that are not mounted never reach the [`RenderCx`], so a
//! [`RenderTree`] only ever contains what would actually be on screen.

use std::{borrow::Cow, fmt};

use crate::id::ViewId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderNode {
    pub id: ViewId,
    pub depth: usize,
    pub name: Cow<'static, str>,
    pub text: Option<String>,
}

#[derive(Default)]
pub struct RenderCx {
    nodes: Vec<RenderNode>,
    depth: usize,
}

impl RenderCx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a node, rendering its children one level deeper.
    pub fn node(
        &mut self,
        id: ViewId,
        name: impl Into<Cow<'static, str>>,
        text: Option<String>,
        children: impl FnOnce(&mut RenderCx),
    ) {
        self.nodes.push(RenderNode {
            id,
            depth: self.depth,
            name: name.into(),
            text,
        });
        self.depth += 1;
        children(self);
        self.depth -= 1;
    }

    pub fn finish(self) -> RenderTree {
        RenderTree { nodes: self.nodes }
    }
}

/// A snapshot of the rendered output, in depth-first order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderTree {
    nodes: Vec<RenderNode>,
}

impl RenderTree {
    pub fn nodes(&self) -> &[RenderNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter_map(|node| node.text.as_deref())
            .collect()
    }

    pub fn contains_text(&self, text: &str) -> bool {
        self.nodes
            .iter()
            .any(|node| node.text.as_deref() == Some(text))
    }
}

impl fmt::Display for RenderTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            write!(f, "{:indent$}{}", "", node.name, indent = node.depth * 2)?;
            if let Some(text) = &node.text {
                write!(f, " {text:?}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
