use super::{bind_miss, Bind, Widget};
use crate::core::dom::{Delivery, EventContext};
use crate::domain::model::{EventKind, ListenTarget, ListenerId, NodeId};
use crate::domain::ports::DomHost;
use std::any::Any;

/// `.dropdown-toggle` opens `.dropdown-menu`; any other click closes it.
#[derive(Debug, Clone)]
pub struct Dropdown {
    root: NodeId,
    menu: NodeId,
    toggle: ListenerId,
    outside: ListenerId,
}

impl Dropdown {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn is_open<D: DomHost + ?Sized>(&self, dom: &D) -> bool {
        dom.has_class(self.menu, "show")
    }
}

impl Bind for Dropdown {
    fn bind(dom: &mut dyn DomHost, selector: &str) -> Option<Self> {
        let Some(root) = dom.query_selector(None, selector) else {
            bind_miss("Dropdown", selector);
            return None;
        };
        let (Some(button), Some(menu)) = (
            dom.query_selector(Some(root), ".dropdown-toggle"),
            dom.query_selector(Some(root), ".dropdown-menu"),
        ) else {
            tracing::debug!("Dropdown '{}' has no toggle or menu", selector);
            return None;
        };

        let toggle = dom.subscribe(ListenTarget::Node(button), EventKind::Click);
        let outside = dom.subscribe(ListenTarget::Document, EventKind::Click);
        Some(Self {
            root,
            menu,
            toggle,
            outside,
        })
    }
}

impl Widget for Dropdown {
    fn listeners(&self) -> Vec<ListenerId> {
        vec![self.toggle, self.outside]
    }

    fn handle_event(&mut self, dom: &mut dyn DomHost, delivery: &Delivery, ctx: &mut EventContext) {
        if delivery.listener == self.toggle {
            // 不讓 document 的監聽器立刻把選單關掉
            ctx.stop_propagation();
            dom.toggle_class(self.menu, "show", None);
        } else if delivery.listener == self.outside {
            dom.remove_class(self.menu, "show");
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
