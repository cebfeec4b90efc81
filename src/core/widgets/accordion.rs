use super::{bind_miss, closest_within, Bind, Widget};
use crate::core::dom::{Delivery, EventContext};
use crate::domain::model::{EventKind, ListenTarget, ListenerId, NodeId};
use crate::domain::ports::DomHost;
use std::any::Any;

/// At most one `.accordion-content` is open at a time.
#[derive(Debug, Clone)]
pub struct Accordion {
    root: NodeId,
    listener: ListenerId,
}

impl Accordion {
    /// Opens the section after `header`, or closes it if it was open.
    pub fn toggle<D: DomHost + ?Sized>(&self, dom: &mut D, header: NodeId) {
        let Some(content) = dom.next_element_sibling(header) else {
            return;
        };
        let was_open = dom.has_class(content, "active");
        for section in dom.query_selector_all(Some(self.root), ".accordion-content") {
            dom.remove_class(section, "active");
        }
        if !was_open {
            dom.add_class(content, "active");
        }
    }
}

impl Bind for Accordion {
    fn bind(dom: &mut dyn DomHost, selector: &str) -> Option<Self> {
        let Some(root) = dom.query_selector(None, selector) else {
            bind_miss("Accordion", selector);
            return None;
        };
        let listener = dom.subscribe(ListenTarget::Node(root), EventKind::Click);
        Some(Self { root, listener })
    }
}

impl Widget for Accordion {
    fn listeners(&self) -> Vec<ListenerId> {
        vec![self.listener]
    }

    fn handle_event(&mut self, dom: &mut dyn DomHost, delivery: &Delivery, _ctx: &mut EventContext) {
        if let Some(header) =
            closest_within(dom, delivery.event.target, ".accordion-header", self.root)
        {
            self.toggle(dom, header);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
