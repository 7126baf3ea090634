//! In-memory document implementing [`Platform`].
//!
//! It keeps just enough of a DOM for slideshows: a tree of elements with
//! classes and attributes, text and image state, listeners, and a record of
//! preloads and alerts. Events are dispatched by hand (`click`, `key_down`,
//! ...), which is how the tests and the native preview drive a slideshow.
//!
//! Document order is creation order, so build parents before children.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::config::Markers;
use crate::gesture::Point;
use crate::platform::{Listener, Platform};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Default)]
struct Node {
    parent: Option<NodeId>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    src: String,
    alt: String,
    tab_index: Option<i32>,
    listeners: Vec<Rc<Listener>>,
}

#[derive(Default)]
struct Tree {
    nodes: Vec<Node>,
    loading: bool,
    ready: Vec<Box<dyn FnOnce()>>,
    preloads: Vec<String>,
    alerts: Vec<String>,
}

impl Tree {
    fn is_descendant(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut current = self.nodes[node.0].parent;
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.nodes[parent.0].parent;
        }
        false
    }
}

/// Elements of one slideshow inserted by [`MemoryDocument::insert_slideshow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideshowNodes {
    pub container: NodeId,
    pub image: NodeId,
    pub next: NodeId,
    pub count: NodeId,
    pub total: NodeId,
}

/// Shared handle to an in-memory document. Clones refer to the same tree.
#[derive(Clone, Default)]
pub struct MemoryDocument {
    inner: Rc<RefCell<Tree>>,
}

impl MemoryDocument {
    /// A fully parsed, empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// A document that is still loading; see [`MemoryDocument::finish_loading`].
    pub fn loading() -> Self {
        let doc = Self::default();
        doc.inner.borrow_mut().loading = true;
        doc
    }

    // --- Building ---

    pub fn create_element(&self, parent: Option<NodeId>, classes: &[&str]) -> NodeId {
        let mut tree = self.inner.borrow_mut();
        tree.nodes.push(Node {
            parent,
            classes: classes.iter().map(|c| c.to_string()).collect(),
            ..Default::default()
        });
        NodeId(tree.nodes.len() - 1)
    }

    pub fn set_attribute(&self, node: NodeId, name: &str, value: &str) {
        if let Some(node) = self.inner.borrow_mut().nodes.get_mut(node.0) {
            node.attributes.insert(name.to_string(), value.to_string());
        }
    }

    /// Container with image, next button, counter and total, carrying `attributes`.
    pub fn insert_slideshow(&self, markers: &Markers, attributes: &[(&str, &str)]) -> SlideshowNodes {
        let container = self.create_element(None, &[markers.container.as_str()]);
        for (name, value) in attributes {
            self.set_attribute(container, name, value);
        }
        SlideshowNodes {
            container,
            image: self.create_element(Some(container), &[markers.image.as_str()]),
            next: self.create_element(Some(container), &[markers.next.as_str()]),
            count: self.create_element(Some(container), &[markers.count.as_str()]),
            total: self.create_element(Some(container), &[markers.total.as_str()]),
        }
    }

    /// Mark the document parsed and run deferred ready callbacks.
    pub fn finish_loading(&self) {
        let ready = {
            let mut tree = self.inner.borrow_mut();
            tree.loading = false;
            std::mem::take(&mut tree.ready)
        };
        for callback in ready {
            callback();
        }
    }

    // --- Inspection ---

    pub fn text(&self, node: NodeId) -> String {
        self.with_node(node, |n| n.text.clone()).unwrap_or_default()
    }

    pub fn src(&self, node: NodeId) -> String {
        self.with_node(node, |n| n.src.clone()).unwrap_or_default()
    }

    pub fn alt(&self, node: NodeId) -> String {
        self.with_node(node, |n| n.alt.clone()).unwrap_or_default()
    }

    pub fn tab_index(&self, node: NodeId) -> Option<i32> {
        self.with_node(node, |n| n.tab_index).flatten()
    }

    pub fn listener_count(&self, node: NodeId, event_type: &str) -> usize {
        self.with_node(node, |n| {
            n.listeners.iter().filter(|l| l.event_type() == event_type).count()
        })
        .unwrap_or(0)
    }

    pub fn preloads(&self) -> Vec<String> {
        self.inner.borrow().preloads.clone()
    }

    /// Drain the preload requests made so far.
    pub fn take_preloads(&self) -> Vec<String> {
        std::mem::take(&mut self.inner.borrow_mut().preloads)
    }

    pub fn alerts(&self) -> Vec<String> {
        self.inner.borrow().alerts.clone()
    }

    // --- Dispatch ---

    pub fn click(&self, node: NodeId) {
        for listener in self.listeners(node, "click") {
            if let Listener::Click(handler) = listener.as_ref() {
                handler();
            }
        }
    }

    /// Returns whether any listener suppressed the default action.
    pub fn key_down(&self, node: NodeId, key: &str) -> bool {
        let mut prevented = false;
        for listener in self.listeners(node, "keydown") {
            if let Listener::KeyDown(handler) = listener.as_ref() {
                prevented |= handler(key);
            }
        }
        prevented
    }

    pub fn touch_start(&self, node: NodeId, at: Point) {
        for listener in self.listeners(node, "touchstart") {
            if let Listener::TouchStart(handler) = listener.as_ref() {
                handler(at);
            }
        }
    }

    pub fn touch_end(&self, node: NodeId, at: Point) {
        for listener in self.listeners(node, "touchend") {
            if let Listener::TouchEnd(handler) = listener.as_ref() {
                handler(at);
            }
        }
    }

    pub fn image_error(&self, node: NodeId) {
        for listener in self.listeners(node, "error") {
            if let Listener::ImageError(handler) = listener.as_ref() {
                handler();
            }
        }
    }

    fn with_node<T>(&self, node: NodeId, f: impl FnOnce(&Node) -> T) -> Option<T> {
        self.inner.borrow().nodes.get(node.0).map(f)
    }

    // Cloned out so handlers can call back into the document
    fn listeners(&self, node: NodeId, event_type: &str) -> Vec<Rc<Listener>> {
        self.with_node(node, |n| {
            n.listeners
                .iter()
                .filter(|l| l.event_type() == event_type)
                .cloned()
                .collect()
        })
        .unwrap_or_default()
    }

    fn update(&self, node: NodeId, f: impl FnOnce(&mut Node)) {
        if let Some(node) = self.inner.borrow_mut().nodes.get_mut(node.0) {
            f(node);
        }
    }
}

impl Platform for MemoryDocument {
    type Element = NodeId;

    fn is_loading(&self) -> bool {
        self.inner.borrow().loading
    }

    fn on_ready(&self, callback: Box<dyn FnOnce()>) {
        self.inner.borrow_mut().ready.push(callback);
    }

    fn find_all(&self, class: &str) -> Vec<NodeId> {
        let tree = self.inner.borrow();
        (0..tree.nodes.len())
            .filter(|&idx| tree.nodes[idx].classes.iter().any(|c| c == class))
            .map(NodeId)
            .collect()
    }

    fn find(&self, scope: &NodeId, class: &str) -> Option<NodeId> {
        let tree = self.inner.borrow();
        (scope.0 + 1..tree.nodes.len())
            .map(NodeId)
            .find(|&id| {
                tree.nodes[id.0].classes.iter().any(|c| c == class) && tree.is_descendant(id, *scope)
            })
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.with_node(*element, |n| n.attributes.get(name).cloned()).flatten()
    }

    fn set_text(&self, element: &NodeId, text: &str) {
        self.update(*element, |n| n.text = text.to_string());
    }

    fn set_image(&self, element: &NodeId, src: &str, alt: &str) {
        self.update(*element, |n| {
            n.src = src.to_string();
            n.alt = alt.to_string();
        });
    }

    fn image_src(&self, element: &NodeId) -> String {
        self.src(*element)
    }

    fn make_focusable(&self, element: &NodeId) {
        self.update(*element, |n| n.tab_index = Some(0));
    }

    fn listen(&self, element: &NodeId, listener: Listener) {
        self.update(*element, |n| n.listeners.push(Rc::new(listener)));
    }

    fn preload(&self, src: &str) {
        self.inner.borrow_mut().preloads.push(src.to_string());
    }

    fn alert(&self, message: &str) {
        self.inner.borrow_mut().alerts.push(message.to_string());
    }
}
