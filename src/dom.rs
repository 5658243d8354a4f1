// Arena-backed document tree
//
// The controller never touches a real rendering engine: the "page" is this
// tree, injected into `Page::mount`. Nodes are stored in a flat arena and
// addressed by `NodeId`, so handlers can hold handles across mutations
// without borrow gymnastics.
//
// Removal is tombstone-based: removed nodes are detached from their parent
// and marked dead, and every query walks the live tree only. This keeps
// `NodeId`s stable for timers that may still reference a removed node
// (a removed target is a defensive no-op, never a panic).

use crate::style::InlineStyle;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Handle into the document arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Vertical layout box for a node, in page units
///
/// Only the vertical axis matters to any behavior on this page (scroll
/// offsets, intersection checks), so the box is one-dimensional.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LayoutBox {
    /// Distance from the top of the page to the top of the node
    #[serde(default)]
    pub top: f64,
    /// Rendered height of the node
    #[serde(default)]
    pub height: f64,
}

/// A single element in the document tree
#[derive(Debug, Clone)]
pub struct Node {
    /// Tag name, lowercase ("section", "a", "input", ...)
    pub tag: String,
    /// Element id, if any
    pub id: Option<String>,
    /// Class list in source order
    pub classes: Vec<String>,
    /// Text content (for inputs, the current value)
    pub text: String,
    /// Attributes other than id/class ("href", "name", ...)
    pub attrs: BTreeMap<String, String>,
    /// Inline visual state, mutated directly by handlers
    pub style: InlineStyle,
    /// Vertical layout box
    pub layout: LayoutBox,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    dead: bool,
}

impl Node {
    fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            text: String::new(),
            attrs: BTreeMap::new(),
            style: InlineStyle::default(),
            layout: LayoutBox::default(),
            parent: None,
            children: Vec::new(),
            dead: false,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Declarative node description for JSON fixtures and the built-in sample
/// page. Flattened into the arena by `Document::from_spec`.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeSpec {
    pub tag: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
    #[serde(flatten)]
    pub layout: LayoutBox,
    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            text: String::new(),
            attrs: BTreeMap::new(),
            layout: LayoutBox::default(),
            children: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn at(mut self, top: f64, height: f64) -> Self {
        self.layout = LayoutBox { top, height };
        self
    }

    pub fn child(mut self, child: NodeSpec) -> Self {
        self.children.push(child);
        self
    }
}

/// The document tree
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Document {
    /// Create an empty document with a `body` root
    pub fn new() -> Self {
        let body = Node::new("body");
        Self {
            nodes: vec![body],
            root: NodeId(0),
        }
    }

    /// Build a document from a declarative spec tree
    ///
    /// The spec becomes the sole child of a fresh `body` root, unless it is
    /// itself a `body`, in which case it becomes the root.
    pub fn from_spec(spec: NodeSpec) -> Self {
        let mut doc = Self::new();
        if spec.tag == "body" {
            doc.nodes[0].id = spec.id.clone();
            doc.nodes[0].classes = spec.classes.clone();
            doc.nodes[0].text = spec.text.clone();
            doc.nodes[0].attrs = spec.attrs.clone();
            doc.nodes[0].layout = spec.layout;
            for child in spec.children {
                let id = doc.insert_spec(&child);
                doc.append_child(doc.root, id);
            }
        } else {
            let id = doc.insert_spec(&spec);
            doc.append_child(doc.root, id);
        }
        doc
    }

    fn insert_spec(&mut self, spec: &NodeSpec) -> NodeId {
        let mut node = Node::new(spec.tag.clone());
        node.id = spec.id.clone();
        node.classes = spec.classes.clone();
        node.text = spec.text.clone();
        node.attrs = spec.attrs.clone();
        node.layout = spec.layout;
        let id = self.push(node);
        for child in &spec.children {
            let child_id = self.insert_spec(child);
            self.append_child(id, child_id);
        }
        id
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Root node (the body)
    pub fn body(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Whether the node is still attached to the live tree
    pub fn is_attached(&self, id: NodeId) -> bool {
        !self.nodes[id.0].dead
    }

    /// Create a detached element; attach it with `append_child`
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        let mut node = Node::new(tag);
        // Detached until appended
        node.dead = true;
        self.push(node)
    }

    /// Attach `child` as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.0].parent = Some(parent);
        self.nodes[child.0].dead = false;
        self.nodes[parent.0].children.push(child);
    }

    /// Detach a node and its whole subtree from the live tree
    pub fn remove(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != id);
        }
        let mut stack = vec![id];
        while let Some(n) = stack.pop() {
            self.nodes[n.0].dead = true;
            stack.extend(self.nodes[n.0].children.iter().copied());
        }
        debug!(node = id.0, "removed subtree");
    }

    /// True if `node` is `ancestor` or a descendant of it
    ///
    /// This is the `Element::contains` contract, used by the outside-click
    /// menu close.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(n) = cursor {
            if n == ancestor {
                return true;
            }
            cursor = self.nodes[n.0].parent;
        }
        false
    }

    /// Live nodes in document (preorder) order
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.preorder_from(self.root, &mut out);
        out
    }

    fn preorder_from(&self, id: NodeId, out: &mut Vec<NodeId>) {
        if self.nodes[id.0].dead {
            return;
        }
        out.push(id);
        for child in self.nodes[id.0].children.clone() {
            self.preorder_from(child, out);
        }
    }

    /// First live node with the given element id
    pub fn by_id(&self, element_id: &str) -> Option<NodeId> {
        self.preorder()
            .into_iter()
            .find(|n| self.node(*n).id.as_deref() == Some(element_id))
    }

    /// All live nodes carrying `class`, in document order
    pub fn by_class(&self, class: &str) -> Vec<NodeId> {
        self.preorder()
            .into_iter()
            .filter(|n| self.node(*n).has_class(class))
            .collect()
    }

    /// All live nodes with the given tag, in document order
    pub fn by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.preorder()
            .into_iter()
            .filter(|n| self.node(*n).tag == tag)
            .collect()
    }

    /// Live descendants of `root`, excluding `root`, in document order
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.preorder_from(root, &mut out);
        out.retain(|n| *n != root);
        out
    }

    /// Descendants of `root` (excluding `root`) carrying `class`
    pub fn descendants_by_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        let mut out = self.descendants(root);
        out.retain(|n| self.node(*n).has_class(class));
        out
    }

    /// Descendants of `root` (excluding `root`) with the given tag
    pub fn descendants_by_tag(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        let mut out = self.descendants(root);
        out.retain(|n| self.node(*n).tag == tag);
        out
    }

    fn matches_simple(&self, id: NodeId, part: &str) -> bool {
        if let Some(eid) = part.strip_prefix('#') {
            self.node(id).id.as_deref() == Some(eid)
        } else if let Some(class) = part.strip_prefix('.') {
            self.node(id).has_class(class)
        } else {
            self.node(id).tag == part
        }
    }

    /// Resolve a minimal selector: `#id`, `.class`, or a tag name, with
    /// whitespace as the descendant combinator (`.cta-buttons .btn`).
    /// Returns the first match in document order, or `None`.
    pub fn select_first(&self, selector: &str) -> Option<NodeId> {
        let mut parts = selector.split_whitespace();
        let first = parts.next()?;
        let mut candidates: Vec<NodeId> = self
            .preorder()
            .into_iter()
            .filter(|n| self.matches_simple(*n, first))
            .collect();
        for part in parts {
            let mut next = Vec::new();
            for root in candidates {
                for n in self.descendants(root) {
                    if self.matches_simple(n, part) && !next.contains(&n) {
                        next.push(n);
                    }
                }
            }
            candidates = next;
        }
        candidates.into_iter().next()
    }

    // ─────────────────────────────────────────────────────────────
    // Class and text helpers
    // ─────────────────────────────────────────────────────────────

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node(id).has_class(class)
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if !self.node(id).has_class(class) {
            self.node_mut(id).classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        self.node_mut(id).classes.retain(|c| c != class);
    }

    /// Toggle a class; returns true when the class is now present
    pub fn toggle_class(&mut self, id: NodeId, class: &str) -> bool {
        if self.node(id).has_class(class) {
            self.remove_class(id, class);
            false
        } else {
            self.add_class(id, class);
            true
        }
    }

    pub fn text(&self, id: NodeId) -> &str {
        &self.node(id).text
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        self.node_mut(id).text = text.into();
    }

    pub fn attr<'a>(&'a self, id: NodeId, name: &str) -> Option<&'a str> {
        self.node(id).attrs.get(name).map(|s| s.as_str())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::from_spec(
            NodeSpec::new("body")
                .child(
                    NodeSpec::new("nav").id("navbar").child(
                        NodeSpec::new("ul")
                            .class("nav-links")
                            .child(NodeSpec::new("a").attr("href", "#home").text("Home"))
                            .child(NodeSpec::new("a").attr("href", "#about").text("About")),
                    ),
                )
                .child(NodeSpec::new("section").id("home").at(0.0, 600.0))
                .child(NodeSpec::new("section").id("about").at(600.0, 500.0)),
        )
    }

    #[test]
    fn test_by_id_finds_live_nodes() {
        let doc = sample();
        assert!(doc.by_id("navbar").is_some());
        assert!(doc.by_id("missing").is_none());
    }

    #[test]
    fn test_document_order_queries() {
        let doc = sample();
        let sections = doc.by_tag("section");
        assert_eq!(sections.len(), 2);
        assert_eq!(doc.node(sections[0]).id.as_deref(), Some("home"));
        assert_eq!(doc.node(sections[1]).id.as_deref(), Some("about"));
    }

    #[test]
    fn test_contains_walks_ancestry() {
        let doc = sample();
        let nav = doc.by_id("navbar").unwrap();
        let link = doc.by_class("nav-links")[0];
        let section = doc.by_id("home").unwrap();
        assert!(doc.contains(nav, link));
        assert!(doc.contains(nav, nav));
        assert!(!doc.contains(nav, section));
    }

    #[test]
    fn test_remove_detaches_subtree() {
        let mut doc = sample();
        let nav = doc.by_id("navbar").unwrap();
        doc.remove(nav);
        assert!(doc.by_id("navbar").is_none());
        assert!(doc.by_class("nav-links").is_empty());
        assert!(!doc.is_attached(nav));
        // Sections are untouched
        assert_eq!(doc.by_tag("section").len(), 2);
    }

    #[test]
    fn test_created_element_is_detached_until_appended() {
        let mut doc = sample();
        let div = doc.create_element("div");
        doc.add_class(div, "notification");
        assert!(doc.by_class("notification").is_empty());

        let body = doc.body();
        doc.append_child(body, div);
        assert_eq!(doc.by_class("notification"), vec![div]);
    }

    #[test]
    fn test_toggle_class() {
        let mut doc = sample();
        let nav = doc.by_id("navbar").unwrap();
        assert!(doc.toggle_class(nav, "scrolled"));
        assert!(doc.has_class(nav, "scrolled"));
        assert!(!doc.toggle_class(nav, "scrolled"));
        assert!(!doc.has_class(nav, "scrolled"));
    }

    #[test]
    fn test_select_first() {
        let doc = sample();
        assert_eq!(doc.select_first("#navbar"), doc.by_id("navbar"));
        assert_eq!(doc.select_first(".nav-links"), doc.by_class("nav-links").first().copied());
        assert_eq!(doc.select_first("section"), doc.by_id("home"));
        assert!(doc.select_first(".missing").is_none());

        // Descendant combinator: first anchor inside the nav container
        let link = doc.select_first(".nav-links a").unwrap();
        assert_eq!(doc.attr(link, "href"), Some("#home"));
        assert!(doc.select_first(".nav-links section").is_none());
    }

    #[test]
    fn test_fixture_deserializes() {
        let json = r#"{
            "tag": "body",
            "children": [
                {"tag": "section", "id": "home", "top": 0, "height": 500},
                {"tag": "div", "classes": ["stats"], "top": 500, "height": 300,
                 "children": [{"tag": "h3", "classes": ["stat-number"], "text": "150+"}]}
            ]
        }"#;
        let spec: NodeSpec = serde_json::from_str(json).unwrap();
        let doc = Document::from_spec(spec);
        assert!(doc.by_id("home").is_some());
        let stats = doc.by_class("stats");
        assert_eq!(stats.len(), 1);
        assert_eq!(doc.node(stats[0]).layout.top, 500.0);
    }
}
