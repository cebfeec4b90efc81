use super::{bind_miss, closest_within, Bind, Widget};
use crate::core::dom::{Delivery, EventContext};
use crate::domain::model::{EventKind, ListenTarget, ListenerId, NodeId};
use crate::domain::ports::DomHost;
use std::any::Any;

/// `.tab-btn[data-tab=X]` activates `[data-content=X]` inside the root.
#[derive(Debug, Clone)]
pub struct Tabs {
    root: NodeId,
    listener: ListenerId,
}

impl Tabs {
    pub fn activate<D: DomHost + ?Sized>(&self, dom: &mut D, button: NodeId) {
        let target = dom.attribute(button, "data-tab").unwrap_or_default();
        for node in dom.query_selector_all(Some(self.root), ".tab-btn, .tab-content") {
            dom.remove_class(node, "active");
        }
        dom.add_class(button, "active");

        let selector = format!(r#"[data-content="{}"]"#, target);
        if let Some(content) = dom.query_selector(Some(self.root), &selector) {
            dom.add_class(content, "active");
        }
    }

    /// `data-tab` of the active button, if any.
    pub fn active<D: DomHost + ?Sized>(&self, dom: &D) -> Option<String> {
        dom.query_selector(Some(self.root), ".tab-btn.active")
            .and_then(|button| dom.attribute(button, "data-tab"))
    }
}

impl Bind for Tabs {
    fn bind(dom: &mut dyn DomHost, selector: &str) -> Option<Self> {
        let Some(root) = dom.query_selector(None, selector) else {
            bind_miss("Tabs", selector);
            return None;
        };
        let listener = dom.subscribe(ListenTarget::Node(root), EventKind::Click);
        Some(Self { root, listener })
    }
}

impl Widget for Tabs {
    fn listeners(&self) -> Vec<ListenerId> {
        vec![self.listener]
    }

    fn handle_event(&mut self, dom: &mut dyn DomHost, delivery: &Delivery, _ctx: &mut EventContext) {
        if let Some(button) = closest_within(dom, delivery.event.target, ".tab-btn", self.root) {
            self.activate(dom, button);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
