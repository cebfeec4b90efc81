//! Convenience wrappers over [`DomHost`]. Each takes a [`Target`] and
//! quietly does nothing when it resolves to no element.

use crate::core::form;
use crate::domain::model::{FormData, NodeId};
use crate::domain::ports::DomHost;

/// A CSS selector (first match in the document) or a node handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    Selector(&'a str),
    Node(NodeId),
}

impl<'a> From<&'a str> for Target<'a> {
    fn from(selector: &'a str) -> Self {
        Target::Selector(selector)
    }
}

impl From<NodeId> for Target<'_> {
    fn from(node: NodeId) -> Self {
        Target::Node(node)
    }
}

impl Target<'_> {
    pub fn resolve<D: DomHost + ?Sized>(self, dom: &D) -> Option<NodeId> {
        match self {
            Target::Selector(selector) => dom.query_selector(None, selector),
            Target::Node(node) => dom.contains(node).then_some(node),
        }
    }
}

pub fn select<D: DomHost + ?Sized>(dom: &D, selector: &str) -> Option<NodeId> {
    dom.query_selector(None, selector)
}

pub fn select_all<D: DomHost + ?Sized>(dom: &D, selector: &str) -> Vec<NodeId> {
    dom.query_selector_all(None, selector)
}

/// Creates a detached element. A `class` attribute replaces the class list;
/// `content` becomes the text content.
pub fn create<D: DomHost + ?Sized>(
    dom: &mut D,
    tag: &str,
    attributes: &[(&str, &str)],
    content: &str,
) -> NodeId {
    let node = dom.create_element(tag);
    for (name, value) in attributes {
        dom.set_attribute(node, name, value);
    }
    if !content.is_empty() {
        dom.set_text(node, content);
    }
    node
}

pub fn show<'a, D: DomHost + ?Sized>(dom: &mut D, target: impl Into<Target<'a>>) {
    if let Some(node) = target.into().resolve(&*dom) {
        dom.set_style(node, "display", "");
    }
}

pub fn hide<'a, D: DomHost + ?Sized>(dom: &mut D, target: impl Into<Target<'a>>) {
    if let Some(node) = target.into().resolve(&*dom) {
        dom.set_style(node, "display", "none");
    }
}

pub fn toggle<'a, D: DomHost + ?Sized>(dom: &mut D, target: impl Into<Target<'a>>) {
    if let Some(node) = target.into().resolve(&*dom) {
        let hidden = dom.style(node, "display").as_deref() == Some("none");
        dom.set_style(node, "display", if hidden { "" } else { "none" });
    }
}

pub fn add_class<'a, D: DomHost + ?Sized>(dom: &mut D, target: impl Into<Target<'a>>, class: &str) {
    if let Some(node) = target.into().resolve(&*dom) {
        dom.add_class(node, class);
    }
}

pub fn remove_class<'a, D: DomHost + ?Sized>(
    dom: &mut D,
    target: impl Into<Target<'a>>,
    class: &str,
) {
    if let Some(node) = target.into().resolve(&*dom) {
        dom.remove_class(node, class);
    }
}

pub fn toggle_class<'a, D: DomHost + ?Sized>(
    dom: &mut D,
    target: impl Into<Target<'a>>,
    class: &str,
) {
    if let Some(node) = target.into().resolve(&*dom) {
        dom.toggle_class(node, class, None);
    }
}

pub fn has_class<'a, D: DomHost + ?Sized>(dom: &D, target: impl Into<Target<'a>>, class: &str) -> bool {
    target
        .into()
        .resolve(&*dom)
        .is_some_and(|node| dom.has_class(node, class))
}

/// Field values of a form; empty when the form is missing.
pub fn form_data<'a, D: DomHost + ?Sized>(dom: &D, target: impl Into<Target<'a>>) -> FormData {
    target
        .into()
        .resolve(&*dom)
        .map(|node| form::get_data(dom, node))
        .unwrap_or_default()
}

/// Maps each item through `template` and concatenates the results.
pub fn render<T>(items: &[T], template: impl Fn(&T) -> String) -> String {
    items.iter().map(template).collect()
}
