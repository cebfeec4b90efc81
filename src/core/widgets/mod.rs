//! Interactive components over the headless DOM.
//!
//! A widget binds to the first element matching a selector, subscribes its
//! listeners, and reacts to the deliveries a [`Page`] routes to it.

pub mod accordion;
pub mod carousel;
pub mod delegate;
pub mod dropdown;
pub mod filter;
pub mod popup;
pub mod tabs;
pub mod toast;

pub use accordion::Accordion;
pub use carousel::Carousel;
pub use delegate::Delegate;
pub use dropdown::Dropdown;
pub use filter::{Filter, FilterKey, FilterState, Filterable};
pub use popup::Popup;
pub use tabs::Tabs;
pub use toast::ToastKind;

use crate::core::dom::{Delivery, Document, EventContext};
use crate::domain::model::{DomEvent, EventKind, ListenTarget, ListenerId, NodeId};
use crate::domain::ports::DomHost;
use std::any::Any;
use std::time::Duration;

pub trait Widget: Any {
    /// Listener ids this widget owns; the page routes their deliveries here.
    fn listeners(&self) -> Vec<ListenerId>;

    fn handle_event(&mut self, dom: &mut dyn DomHost, delivery: &Delivery, ctx: &mut EventContext);

    fn dispose(&mut self, dom: &mut dyn DomHost) {
        for id in self.listeners() {
            dom.unsubscribe(id);
        }
    }

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Widgets constructed from a root selector.
pub trait Bind: Widget + Sized {
    /// `None` when the selector matches nothing (or a required part is
    /// missing); nothing is subscribed in that case.
    fn bind(dom: &mut dyn DomHost, selector: &str) -> Option<Self>;
}

/// Walks from `node` up to `root` (inclusive) looking for `selector`.
pub(crate) fn closest_within(
    dom: &dyn DomHost,
    node: NodeId,
    selector: &str,
    root: NodeId,
) -> Option<NodeId> {
    let mut cursor = Some(node);
    while let Some(current) = cursor {
        if dom.matches(current, selector) {
            return Some(current);
        }
        if current == root {
            return None;
        }
        cursor = dom.parent(current);
    }
    None
}

pub(crate) fn bind_miss(widget: &str, selector: &str) {
    tracing::debug!("{} not bound: nothing matches '{}'", widget, selector);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(usize);

/// A document plus the widgets mounted on it.
///
/// The page owns a virtual clock; scheduled removals (toasts) happen when
/// [`Page::advance`] moves the clock past their deadline.
pub struct Page {
    document: Document,
    widgets: Vec<Option<Box<dyn Widget>>>,
    clock: Duration,
    removals: Vec<(Duration, NodeId)>,
    toast_duration: Duration,
}

impl Default for Page {
    fn default() -> Self {
        Self::new(Document::new())
    }
}

impl Page {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            widgets: Vec::new(),
            clock: Duration::ZERO,
            removals: Vec::new(),
            toast_duration: toast::DEFAULT_DURATION,
        }
    }

    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    /// Lifetime used by [`toast::notify`].
    pub fn toast_duration(&self) -> Duration {
        self.toast_duration
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn mount<W: Bind>(&mut self, selector: &str) -> Option<WidgetId> {
        let widget = W::bind(&mut self.document, selector)?;
        Some(self.attach(widget))
    }

    pub fn attach<W: Widget>(&mut self, widget: W) -> WidgetId {
        self.widgets.push(Some(Box::new(widget)));
        WidgetId(self.widgets.len() - 1)
    }

    /// Event delegation: `handler` runs with the closest ancestor-or-self of
    /// the event target matching `selector`.
    pub fn on(
        &mut self,
        scope: ListenTarget,
        selector: &str,
        kind: EventKind,
        handler: impl FnMut(&mut dyn DomHost, NodeId, &DomEvent) + 'static,
    ) -> WidgetId {
        let delegate = Delegate::on(&mut self.document, scope, selector, kind, handler);
        self.attach(delegate)
    }

    /// Disposes the widget. Returns `false` if it was already gone.
    pub fn unmount(&mut self, id: WidgetId) -> bool {
        match self.widgets.get_mut(id.0).and_then(Option::take) {
            Some(mut widget) => {
                widget.dispose(&mut self.document);
                true
            }
            None => false,
        }
    }

    pub fn widget<W: Widget>(&self, id: WidgetId) -> Option<&W> {
        self.widgets
            .get(id.0)?
            .as_ref()?
            .as_any()
            .downcast_ref::<W>()
    }

    /// Runs `f` with the widget and the document, e.g. to call `Popup::show`.
    pub fn with_widget<W: Widget, R>(
        &mut self,
        id: WidgetId,
        f: impl FnOnce(&mut W, &mut dyn DomHost) -> R,
    ) -> Option<R> {
        let widget = self
            .widgets
            .get_mut(id.0)?
            .as_mut()?
            .as_any_mut()
            .downcast_mut::<W>()?;
        Some(f(widget, &mut self.document))
    }

    /// Propagates `event` and returns how many handlers ran.
    pub fn dispatch(&mut self, event: DomEvent) -> usize {
        let path = self.document.propagation_path(&event);
        let mut ctx = EventContext::new();
        let mut handled = 0;

        for group in path {
            for delivery in &group {
                // 前一個 handler 可能已經移除這個 listener
                if !self.document.has_listener(delivery.listener) {
                    continue;
                }
                let Some(widget) = self
                    .widgets
                    .iter_mut()
                    .flatten()
                    .find(|w| w.listeners().contains(&delivery.listener))
                else {
                    continue;
                };
                widget.handle_event(&mut self.document, delivery, &mut ctx);
                handled += 1;
            }
            if ctx.is_propagation_stopped() {
                break;
            }
        }
        handled
    }

    pub fn now(&self) -> Duration {
        self.clock
    }

    pub fn schedule_removal(&mut self, node: NodeId, after: Duration) {
        self.removals.push((self.clock + after, node));
    }

    /// Moves the clock forward and removes every node whose deadline passed.
    pub fn advance(&mut self, elapsed: Duration) {
        self.clock += elapsed;
        let now = self.clock;
        let (due, pending): (Vec<_>, Vec<_>) =
            self.removals.drain(..).partition(|(deadline, _)| *deadline <= now);
        self.removals = pending;
        for (_, node) in due {
            self.document.remove(node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dom::Markup;

    struct Counter {
        listener: ListenerId,
        hits: usize,
        stop: bool,
    }

    impl Widget for Counter {
        fn listeners(&self) -> Vec<ListenerId> {
            vec![self.listener]
        }

        fn handle_event(&mut self, _dom: &mut dyn DomHost, _d: &Delivery, ctx: &mut EventContext) {
            self.hits += 1;
            if self.stop {
                ctx.stop_propagation();
            }
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    fn counter(page: &mut Page, target: ListenTarget, stop: bool) -> WidgetId {
        let listener = page.document_mut().subscribe(target, EventKind::Click);
        page.attach(Counter {
            listener,
            hits: 0,
            stop,
        })
    }

    fn hits(page: &Page, id: WidgetId) -> usize {
        page.widget::<Counter>(id).map(|c| c.hits).unwrap_or(0)
    }

    #[test]
    fn test_stop_propagation_finishes_current_node() {
        let mut page = Page::default();
        let body = page.document().body();
        let button = page.document_mut().append_markup(body, Markup::new("button"));

        let first = counter(&mut page, ListenTarget::Node(button), true);
        let second = counter(&mut page, ListenTarget::Node(button), false);
        let on_body = counter(&mut page, ListenTarget::Node(body), false);
        let on_doc = counter(&mut page, ListenTarget::Document, false);

        assert_eq!(page.dispatch(DomEvent::click(button)), 2);
        assert_eq!(hits(&page, first), 1);
        assert_eq!(hits(&page, second), 1);
        assert_eq!(hits(&page, on_body), 0);
        assert_eq!(hits(&page, on_doc), 0);
    }

    #[test]
    fn test_unmount_disposes_listeners() {
        let mut page = Page::default();
        let body = page.document().body();
        let id = counter(&mut page, ListenTarget::Node(body), false);
        assert_eq!(page.document().listener_count(), 1);

        assert!(page.unmount(id));
        assert!(!page.unmount(id));
        assert_eq!(page.document().listener_count(), 0);
        assert_eq!(page.dispatch(DomEvent::click(body)), 0);
    }

    #[test]
    fn test_advance_removes_due_nodes() {
        let mut page = Page::default();
        let body = page.document().body();
        let a = page.document_mut().append_markup(body, Markup::new("div"));
        let b = page.document_mut().append_markup(body, Markup::new("div"));
        page.schedule_removal(a, Duration::from_millis(100));
        page.schedule_removal(b, Duration::from_millis(300));

        page.advance(Duration::from_millis(99));
        assert!(page.document().contains(a));
        page.advance(Duration::from_millis(1));
        assert!(!page.document().contains(a));
        assert!(page.document().contains(b));
        page.advance(Duration::from_secs(1));
        assert!(!page.document().contains(b));
        assert_eq!(page.now(), Duration::from_millis(1100));
    }
}
