use super::Widget;
use crate::core::dom::{Delivery, EventContext};
use crate::domain::model::{DomEvent, EventKind, ListenTarget, ListenerId, NodeId};
use crate::domain::ports::DomHost;
use std::any::Any;

type Handler = Box<dyn FnMut(&mut dyn DomHost, NodeId, &DomEvent)>;

/// One listener on a scope that serves every descendant matching a
/// selector, including elements added after it was registered.
pub struct Delegate {
    listener: ListenerId,
    selector: String,
    handler: Handler,
}

impl Delegate {
    pub fn on(
        dom: &mut dyn DomHost,
        scope: ListenTarget,
        selector: &str,
        kind: EventKind,
        handler: impl FnMut(&mut dyn DomHost, NodeId, &DomEvent) + 'static,
    ) -> Self {
        Self {
            listener: dom.subscribe(scope, kind),
            selector: selector.to_string(),
            handler: Box::new(handler),
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }
}

impl Widget for Delegate {
    fn listeners(&self) -> Vec<ListenerId> {
        vec![self.listener]
    }

    fn handle_event(&mut self, dom: &mut dyn DomHost, delivery: &Delivery, _ctx: &mut EventContext) {
        if let Some(matched) = dom.closest(delivery.event.target, &self.selector) {
            (self.handler)(dom, matched, &delivery.event);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
