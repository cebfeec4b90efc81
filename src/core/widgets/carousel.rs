use super::{bind_miss, Bind, Widget};
use crate::core::dom::{Delivery, EventContext};
use crate::domain::model::{EventKind, ListenTarget, ListenerId, NodeId};
use crate::domain::ports::DomHost;
use std::any::Any;

/// Cycles `active` through the `.slide` elements found at bind time.
#[derive(Debug, Clone)]
pub struct Carousel {
    root: NodeId,
    slides: Vec<NodeId>,
    index: usize,
    next_button: Option<ListenerId>,
    prev_button: Option<ListenerId>,
}

impl Carousel {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// 超出範圍的 index 直接忽略，目前的投影片維持不變
    pub fn show<D: DomHost + ?Sized>(&mut self, dom: &mut D, index: usize) {
        if index >= self.slides.len() {
            return;
        }
        for (i, &slide) in self.slides.iter().enumerate() {
            dom.toggle_class(slide, "active", Some(i == index));
        }
        self.index = index;
    }

    pub fn next<D: DomHost + ?Sized>(&mut self, dom: &mut D) {
        if self.slides.is_empty() {
            return;
        }
        let index = (self.index + 1) % self.slides.len();
        self.show(dom, index);
    }

    pub fn prev<D: DomHost + ?Sized>(&mut self, dom: &mut D) {
        if self.slides.is_empty() {
            return;
        }
        let len = self.slides.len();
        let index = (self.index + len - 1) % len;
        self.show(dom, index);
    }
}

impl Bind for Carousel {
    fn bind(dom: &mut dyn DomHost, selector: &str) -> Option<Self> {
        let Some(root) = dom.query_selector(None, selector) else {
            bind_miss("Carousel", selector);
            return None;
        };

        let slides = dom.query_selector_all(Some(root), ".slide");
        let next_button = dom
            .query_selector(Some(root), ".next")
            .map(|button| dom.subscribe(ListenTarget::Node(button), EventKind::Click));
        let prev_button = dom
            .query_selector(Some(root), ".prev")
            .map(|button| dom.subscribe(ListenTarget::Node(button), EventKind::Click));

        let mut carousel = Self {
            root,
            slides,
            index: 0,
            next_button,
            prev_button,
        };
        carousel.show(dom, 0);
        Some(carousel)
    }
}

impl Widget for Carousel {
    fn listeners(&self) -> Vec<ListenerId> {
        self.next_button.into_iter().chain(self.prev_button).collect()
    }

    fn handle_event(&mut self, dom: &mut dyn DomHost, delivery: &Delivery, _ctx: &mut EventContext) {
        if Some(delivery.listener) == self.next_button {
            self.next(dom);
        } else if Some(delivery.listener) == self.prev_button {
            self.prev(dom);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
