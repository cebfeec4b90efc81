use super::{bind_miss, Bind, Widget};
use crate::core::dom::{Delivery, EventContext};
use crate::domain::model::{EventKind, ListenTarget, ListenerId, NodeId};
use crate::domain::ports::DomHost;
use std::any::Any;

const OPEN_CLASS: &str = "show";

/// Modal overlay. The root element is the backdrop.
#[derive(Debug, Clone)]
pub struct Popup {
    root: NodeId,
    close_buttons: Vec<ListenerId>,
    backdrop: ListenerId,
    escape: ListenerId,
}

impl Popup {
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Adds `show` and locks body scrolling.
    pub fn show<D: DomHost + ?Sized>(&self, dom: &mut D) {
        dom.add_class(self.root, OPEN_CLASS);
        let body = dom.body();
        dom.set_style(body, "overflow", "hidden");
    }

    pub fn close<D: DomHost + ?Sized>(&self, dom: &mut D) {
        dom.remove_class(self.root, OPEN_CLASS);
        let body = dom.body();
        dom.set_style(body, "overflow", "");
    }

    pub fn is_open<D: DomHost + ?Sized>(&self, dom: &D) -> bool {
        dom.has_class(self.root, OPEN_CLASS)
    }
}

impl Bind for Popup {
    fn bind(dom: &mut dyn DomHost, selector: &str) -> Option<Self> {
        let Some(root) = dom.query_selector(None, selector) else {
            bind_miss("Popup", selector);
            return None;
        };

        let close_buttons = dom
            .query_selector_all(Some(root), "[data-close]")
            .into_iter()
            .map(|button| dom.subscribe(ListenTarget::Node(button), EventKind::Click))
            .collect();
        let backdrop = dom.subscribe(ListenTarget::Node(root), EventKind::Click);
        let escape = dom.subscribe(ListenTarget::Document, EventKind::Keydown);

        Some(Self {
            root,
            close_buttons,
            backdrop,
            escape,
        })
    }
}

impl Widget for Popup {
    fn listeners(&self) -> Vec<ListenerId> {
        let mut ids = self.close_buttons.clone();
        ids.push(self.backdrop);
        ids.push(self.escape);
        ids
    }

    fn handle_event(&mut self, dom: &mut dyn DomHost, delivery: &Delivery, _ctx: &mut EventContext) {
        let event = &delivery.event;
        let close = if self.close_buttons.contains(&delivery.listener) {
            true
        } else if delivery.listener == self.backdrop {
            // 只有點到遮罩本身才關閉，點內容不算
            event.target == self.root
        } else if delivery.listener == self.escape {
            event.key.as_deref() == Some("Escape") && self.is_open(&*dom)
        } else {
            false
        };

        if close {
            self.close(dom);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
