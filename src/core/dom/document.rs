use super::event::Delivery;
use super::selector::SelectorList;
use crate::domain::model::{DomEvent, EventKind, ListenTarget, ListenerId, NodeId};
use crate::domain::ports::DomHost;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    style: BTreeMap<String, String>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: BTreeMap::new(),
            classes: Vec::new(),
            style: BTreeMap::new(),
            text: String::new(),
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Arena slot. A removed element frees its slot and bumps the generation.
#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    element: Option<Element>,
}

#[derive(Debug, Clone)]
struct Listener {
    id: ListenerId,
    target: ListenTarget,
    kind: EventKind,
}

/// In-memory element tree, `<html><body></body></html>` when created.
///
/// Nodes live in an arena. Removing a subtree drops its elements and
/// recycles their slots; the old [`NodeId`]s stay stale because each reuse
/// gets a new generation.
#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<usize>,
    root: NodeId,
    body: NodeId,
    listeners: Vec<Listener>,
    next_listener: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let root = NodeId::new(0, 0);
        let body_id = NodeId::new(1, 0);
        let mut html = Element::new("html");
        let mut body = Element::new("body");
        body.parent = Some(root);
        html.children.push(body_id);

        Self {
            slots: vec![
                Slot {
                    generation: 0,
                    element: Some(html),
                },
                Slot {
                    generation: 0,
                    element: Some(body),
                },
            ],
            free: Vec::new(),
            root,
            body: body_id,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    fn get(&self, node: NodeId) -> Option<&Element> {
        self.slots
            .get(node.index)
            .filter(|slot| slot.generation == node.generation)?
            .element
            .as_ref()
    }

    fn get_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.slots
            .get_mut(node.index)
            .filter(|slot| slot.generation == node.generation)?
            .element
            .as_mut()
    }

    /// Number of live elements, attached or not.
    pub fn node_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.element.is_some()).count()
    }

    /// Allocated slots, live or free.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Builds `markup` and appends it under `parent`, returning the new node.
    pub fn append_markup(&mut self, parent: NodeId, markup: Markup) -> NodeId {
        let node = self.create_element(&markup.tag);
        for (name, value) in &markup.attributes {
            self.set_attribute(node, name, value);
        }
        if !markup.text.is_empty() {
            self.set_text(node, &markup.text);
        }
        for child in markup.children {
            self.append_markup(node, child);
        }
        self.append_child(parent, node);
        node
    }

    pub fn has_listener(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|l| l.id == id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn descendants(&self, scope: NodeId, out: &mut Vec<NodeId>) {
        if let Some(element) = self.get(scope) {
            for &child in &element.children {
                out.push(child);
                self.descendants(child, out);
            }
        }
    }

    /// Candidates in document order. A document-wide query includes the root.
    fn candidates(&self, scope: Option<NodeId>) -> Vec<NodeId> {
        let mut out = Vec::new();
        match scope {
            Some(scope) => self.descendants(scope, &mut out),
            None => {
                out.push(self.root);
                self.descendants(self.root, &mut out);
            }
        }
        out
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.get(node).and_then(|e| e.parent) {
            if let Some(p) = self.get_mut(parent) {
                p.children.retain(|&c| c != node);
            }
        }
        if let Some(element) = self.get_mut(node) {
            element.parent = None;
        }
    }

    /// Listener groups in propagation order: the target, each ancestor up
    /// to the root, then the document. Each inner vector is one
    /// `currentTarget`; listeners run in subscription order.
    pub fn propagation_path(&self, event: &DomEvent) -> Vec<Vec<Delivery>> {
        if !self.contains(event.target) {
            return Vec::new();
        }

        let mut targets = Vec::new();
        let mut cursor = Some(event.target);
        while let Some(node) = cursor {
            targets.push(ListenTarget::Node(node));
            cursor = self.parent(node);
        }
        targets.push(ListenTarget::Document);

        targets
            .into_iter()
            .map(|target| {
                self.listeners
                    .iter()
                    .filter(|l| l.target == target && l.kind == event.kind)
                    .map(|l| Delivery {
                        listener: l.id,
                        current_target: target,
                        event: event.clone(),
                    })
                    .collect::<Vec<_>>()
            })
            .filter(|group| !group.is_empty())
            .collect()
    }
}

impl DomHost for Document {
    fn root(&self) -> NodeId {
        self.root
    }

    fn body(&self) -> NodeId {
        self.body
    }

    fn contains(&self, node: NodeId) -> bool {
        self.get(node).is_some() && self.is_ancestor_or_self(self.root, node)
    }

    fn tag(&self, node: NodeId) -> Option<String> {
        self.get(node).map(|e| e.tag.clone())
    }

    fn query_selector(&self, scope: Option<NodeId>, selector: &str) -> Option<NodeId> {
        let list = SelectorList::parse(selector)?;
        self.candidates(scope)
            .into_iter()
            .find(|&node| list.matches(self, node))
    }

    fn query_selector_all(&self, scope: Option<NodeId>, selector: &str) -> Vec<NodeId> {
        match SelectorList::parse(selector) {
            Some(list) => self
                .candidates(scope)
                .into_iter()
                .filter(|&node| list.matches(self, node))
                .collect(),
            None => Vec::new(),
        }
    }

    fn matches(&self, node: NodeId, selector: &str) -> bool {
        self.get(node).is_some()
            && SelectorList::parse(selector).is_some_and(|list| list.matches(self, node))
    }

    fn closest(&self, node: NodeId, selector: &str) -> Option<NodeId> {
        let list = SelectorList::parse(selector)?;
        let mut cursor = self.get(node).map(|_| node);
        while let Some(current) = cursor {
            if list.matches(self, current) {
                return Some(current);
            }
            cursor = self.parent(current);
        }
        None
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(|e| e.parent)
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.get(node).map(|e| e.children.clone()).unwrap_or_default()
    }

    fn next_element_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.parent(node)?;
        let siblings = &self.get(parent)?.children;
        let position = siblings.iter().position(|&c| c == node)?;
        siblings.get(position + 1).copied()
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        let element = self.get(node)?;
        if name == "class" {
            return (!element.classes.is_empty()).then(|| element.classes.join(" "));
        }
        element.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(element) = self.get_mut(node) {
            // class 屬性只存在 classes 裡
            if name == "class" {
                element.classes.clear();
                for class in value.split_whitespace() {
                    if !element.classes.iter().any(|c| c == class) {
                        element.classes.push(class.to_string());
                    }
                }
                return;
            }
            element
                .attributes
                .insert(name.to_string(), value.to_string());
        }
    }

    fn remove_attribute(&mut self, node: NodeId, name: &str) {
        if let Some(element) = self.get_mut(node) {
            if name == "class" {
                element.classes.clear();
            } else {
                element.attributes.remove(name);
            }
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.get(node)
            .is_some_and(|e| e.classes.iter().any(|c| c == class))
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(element) = self.get_mut(node) {
            if !element.classes.iter().any(|c| c == class) {
                element.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(element) = self.get_mut(node) {
            element.classes.retain(|c| c != class);
        }
    }

    fn toggle_class(&mut self, node: NodeId, class: &str, force: Option<bool>) -> bool {
        if self.get(node).is_none() {
            return false;
        }
        let present = force.unwrap_or(!self.has_class(node, class));
        if present {
            self.add_class(node, class);
        } else {
            self.remove_class(node, class);
        }
        present
    }

    fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.get(node)?.style.get(property).cloned()
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(element) = self.get_mut(node) {
            if value.is_empty() {
                element.style.remove(property);
            } else {
                element
                    .style
                    .insert(property.to_string(), value.to_string());
            }
        }
    }

    fn text(&self, node: NodeId) -> String {
        let Some(element) = self.get(node) else {
            return String::new();
        };
        let mut text = element.text.clone();
        for &child in &element.children {
            text.push_str(&self.text(child));
        }
        text
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if self.get(node).is_none() {
            return;
        }
        for child in self.children(node) {
            self.remove(child);
        }
        if let Some(element) = self.get_mut(node) {
            element.text = text.to_string();
        }
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.element = Some(Element::new(tag));
                NodeId::new(index, slot.generation)
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    element: Some(Element::new(tag)),
                });
                NodeId::new(self.slots.len() - 1, 0)
            }
        }
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.get(parent).is_none() || self.get(child).is_none() || child == self.root {
            return;
        }
        // 不能把祖先接到自己底下
        if self.is_ancestor_or_self(child, parent) {
            return;
        }
        self.detach(child);
        if let Some(element) = self.get_mut(child) {
            element.parent = Some(parent);
        }
        if let Some(element) = self.get_mut(parent) {
            element.children.push(child);
        }
    }

    /// Removes `node` and its subtree, dropping listeners attached to them.
    fn remove(&mut self, node: NodeId) {
        if self.get(node).is_none() || node == self.root || node == self.body {
            return;
        }
        self.detach(node);

        let mut subtree = vec![node];
        self.descendants(node, &mut subtree);
        for id in &subtree {
            if let Some(slot) = self.slots.get_mut(id.index) {
                if slot.generation == id.generation && slot.element.take().is_some() {
                    slot.generation = slot.generation.wrapping_add(1);
                    self.free.push(id.index);
                }
            }
        }
        self.listeners.retain(|l| match l.target {
            ListenTarget::Node(n) => !subtree.contains(&n),
            ListenTarget::Document => true,
        });
    }

    fn subscribe(&mut self, target: ListenTarget, kind: EventKind) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push(Listener { id, target, kind });
        id
    }

    fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.retain(|l| l.id != id);
    }
}

/// Declarative element builder used to populate a [`Document`].
///
/// ```ignore
/// let tabs = Markup::new("div").class("tabs")
///     .child(Markup::new("button").class("tab-btn").attr("data-tab", "a"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    tag: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Markup>,
}

impl Markup {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: Vec::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    /// Space separated, like the `class` attribute.
    pub fn class(mut self, class: &str) -> Self {
        match self.attributes.iter_mut().find(|(name, _)| name == "class") {
            Some((_, value)) => {
                value.push(' ');
                value.push_str(class);
            }
            None => self.attributes.push(("class".to_string(), class.to_string())),
        }
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn child(mut self, child: Markup) -> Self {
        self.children.push(child);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, NodeId) {
        let mut doc = Document::new();
        let body = doc.body();
        let list = doc.append_markup(
            body,
            Markup::new("ul")
                .id("menu")
                .class("nav")
                .child(Markup::new("li").class("item active").text("Home"))
                .child(Markup::new("li").class("item").attr("data-x", "2").text("About"))
                .child(
                    Markup::new("li")
                        .class("item")
                        .child(Markup::new("a").attr("href", "/c").text("Contact")),
                ),
        );
        (doc, list)
    }

    #[test]
    fn test_query_selectors() {
        let (doc, list) = sample();
        assert_eq!(doc.query_selector(None, "#menu"), Some(list));
        assert_eq!(doc.query_selector_all(None, "ul .item").len(), 3);
        assert_eq!(doc.query_selector_all(Some(list), "li.active").len(), 1);
        assert_eq!(doc.query_selector_all(None, r#"[data-x="2"]"#).len(), 1);
        assert_eq!(doc.query_selector_all(None, "a, .active").len(), 2);
        assert!(doc.query_selector(None, ".missing").is_none());
        assert!(doc.query_selector(None, "ul > li").is_none());
        assert_eq!(doc.query_selector(None, "html"), Some(doc.root()));
    }

    #[test]
    fn test_closest_and_siblings() {
        let (doc, list) = sample();
        let link = doc.query_selector(None, "a").unwrap();
        assert_eq!(doc.closest(link, "#menu"), Some(list));
        assert_eq!(doc.closest(link, "a"), Some(link));
        assert!(doc.closest(link, ".nope").is_none());

        let items = doc.query_selector_all(Some(list), "li");
        assert_eq!(doc.next_element_sibling(items[0]), Some(items[1]));
        assert!(doc.next_element_sibling(items[2]).is_none());
    }

    #[test]
    fn test_classes_and_class_attribute_agree() {
        let (mut doc, list) = sample();
        assert_eq!(doc.attribute(list, "class").as_deref(), Some("nav"));
        doc.add_class(list, "open");
        assert_eq!(doc.attribute(list, "class").as_deref(), Some("nav open"));
        assert!(!doc.toggle_class(list, "open", None));
        assert!(doc.toggle_class(list, "open", Some(true)));
        assert!(doc.toggle_class(list, "open", Some(true)));
        doc.set_attribute(list, "class", "a  b a");
        assert!(doc.matches(list, ".a.b"));
        assert!(!doc.has_class(list, "nav"));
    }

    #[test]
    fn test_text_and_removal() {
        let (mut doc, list) = sample();
        assert_eq!(doc.text(list), "HomeAboutContact");

        let link = doc.query_selector(None, "a").unwrap();
        let listener = doc.subscribe(ListenTarget::Node(link), EventKind::Click);
        doc.remove(list);
        assert!(!doc.contains(list));
        assert!(!doc.contains(link));
        assert!(!doc.has_listener(listener));
        assert_eq!(doc.text(list), "");
        assert!(doc.query_selector(None, "li").is_none());
    }

    #[test]
    fn test_removed_slots_are_reused_with_new_generation() {
        let (mut doc, list) = sample();
        let before = doc.capacity();
        let link = doc.query_selector(None, "a").unwrap();
        doc.remove(list);
        assert_eq!(doc.node_count(), 2);

        let body = doc.body();
        let fresh = doc.append_markup(body, Markup::new("p").text("again"));
        assert_eq!(doc.capacity(), before);
        // 舊 handle 不會指到重用槽位的新元素
        assert!(!doc.contains(list));
        assert!(!doc.contains(link));
        assert!(doc.contains(fresh));
        assert_eq!(doc.text(list), "");
        doc.add_class(link, "stale");
        assert!(doc.query_selector(None, ".stale").is_none());
    }

    #[test]
    fn test_detached_elements_are_not_contained() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        assert!(!doc.contains(div));
        doc.append_child(doc.body(), div);
        assert!(doc.contains(div));

        // 祖先不能接到後代底下
        let root = doc.root();
        doc.append_child(div, root);
        assert_eq!(doc.parent(div), Some(doc.body()));
    }

    #[test]
    fn test_propagation_path_order() {
        let (mut doc, list) = sample();
        let link = doc.query_selector(None, "a").unwrap();
        let on_doc = doc.subscribe(ListenTarget::Document, EventKind::Click);
        let on_list = doc.subscribe(ListenTarget::Node(list), EventKind::Click);
        let on_link = doc.subscribe(ListenTarget::Node(link), EventKind::Click);
        let _keys = doc.subscribe(ListenTarget::Node(link), EventKind::Keydown);

        let path = doc.propagation_path(&DomEvent::click(link));
        let order: Vec<_> = path.iter().flatten().map(|d| d.listener).collect();
        assert_eq!(order, vec![on_link, on_list, on_doc]);
        assert_eq!(path[2][0].current_target, ListenTarget::Document);
    }
}
