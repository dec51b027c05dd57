//! Arena-backed document tree.
//!
//! The html5ever parse is lowered into a flat `Vec` of nodes addressed by
//! [`NodeId`]. Replacing an element's content detaches its old children:
//! they stay in the arena (ids remain valid) but are no longer reachable
//! from the root.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Element {
        name: String,
        attrs: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

fn is_hidden_text_container(tag: &str) -> bool {
    matches!(tag, "script" | "style" | "template")
}

impl Document {
    pub fn parse(html: &str) -> Result<Self> {
        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())
            .map_err(Error::Parse)?;
        let doc = Self::from_rcdom(&dom);
        tracing::trace!(nodes = doc.nodes.len(), "built document tree");
        Ok(doc)
    }

    fn from_rcdom(dom: &RcDom) -> Self {
        let mut doc = Document {
            nodes: vec![Node {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
            }],
        };

        // Explicit stack: nesting depth is unbounded in the input.
        let mut stack: Vec<(Handle, NodeId)> = vec![(dom.document.clone(), doc.root())];
        while let Some((handle, parent)) = stack.pop() {
            let kind = match &handle.data {
                NodeData::Document => None,
                NodeData::Element { name, attrs, .. } => Some(NodeKind::Element {
                    name: name.local.to_string().to_ascii_lowercase(),
                    attrs: attrs
                        .borrow()
                        .iter()
                        .map(|a| (a.name.local.to_string(), a.value.to_string()))
                        .collect(),
                }),
                NodeData::Text { contents } => Some(NodeKind::Text(contents.borrow().to_string())),
                NodeData::Comment { .. }
                | NodeData::Doctype { .. }
                | NodeData::ProcessingInstruction { .. } => continue,
            };
            let id = match kind {
                Some(kind) => doc.push(kind, parent),
                None => parent,
            };
            for c in handle.children.borrow().iter().rev() {
                stack.push((c.clone(), id));
            }
        }
        doc
    }

    fn push(&mut self, kind: NodeKind, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Element { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Siblings after `id` under the same parent, in document order.
    pub fn following_siblings(&self, id: NodeId) -> &[NodeId] {
        let Some(parent) = self.parent(id) else {
            return &[];
        };
        let siblings = self.children(parent);
        match siblings.iter().position(|&c| c == id) {
            Some(pos) => &siblings[pos + 1..],
            None => &[],
        }
    }

    /// Every element below `from` whose tag is in `names`, in document order.
    pub fn find_all(&self, from: NodeId, names: &[&str]) -> Vec<NodeId> {
        self.collect(from, names, true)
    }

    /// Like [`Document::find_all`], but does not look inside a match.
    pub fn find_outermost(&self, from: NodeId, names: &[&str]) -> Vec<NodeId> {
        self.collect(from, names, false)
    }

    fn collect(&self, from: NodeId, names: &[&str], descend_into_matches: bool) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(from).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let matched = self.tag_name(id).is_some_and(|t| names.contains(&t));
            if matched {
                out.push(id);
                if !descend_into_matches {
                    continue;
                }
            }
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// Concatenated text of every descendant text node.
    pub fn text(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.push_text(id, &mut out);
        out
    }

    fn push_text(&self, id: NodeId, out: &mut String) {
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            match self.kind(id) {
                NodeKind::Text(t) => out.push_str(t),
                NodeKind::Element { name, .. } if is_hidden_text_container(name) => {}
                NodeKind::Element { .. } | NodeKind::Document => {
                    stack.extend(self.children(id).iter().rev().copied());
                }
            }
        }
    }

    /// Replace everything inside `id` with a single text node.
    pub fn set_string(&mut self, id: NodeId, text: impl Into<String>) {
        let old = std::mem::take(&mut self.nodes[id.0].children);
        for c in old {
            self.nodes[c.0].parent = None;
        }
        self.push(NodeKind::Text(text.into()), id);
    }
}
