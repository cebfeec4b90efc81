use crate::domain::model::{AjaxRequest, EventKind, ListenTarget, ListenerId, NodeId};
use crate::utils::error::{AjaxError, StorageError};
use async_trait::async_trait;

/// Persistent string key/value backend, the role `localStorage` plays in a browser.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
    fn clear(&mut self) -> Result<(), StorageError>;
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}

/// Element query, mutation and event subscription over a document tree.
///
/// Methods given a stale or unknown [`NodeId`] do nothing and return the
/// empty answer (`None`, `false`, empty string or vector).
pub trait DomHost {
    fn root(&self) -> NodeId;
    fn body(&self) -> NodeId;
    fn contains(&self, node: NodeId) -> bool;
    fn tag(&self, node: NodeId) -> Option<String>;

    fn query_selector(&self, scope: Option<NodeId>, selector: &str) -> Option<NodeId>;
    fn query_selector_all(&self, scope: Option<NodeId>, selector: &str) -> Vec<NodeId>;
    fn matches(&self, node: NodeId, selector: &str) -> bool;
    fn closest(&self, node: NodeId, selector: &str) -> Option<NodeId>;

    fn parent(&self, node: NodeId) -> Option<NodeId>;
    fn children(&self, node: NodeId) -> Vec<NodeId>;
    fn next_element_sibling(&self, node: NodeId) -> Option<NodeId>;

    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);
    fn remove_attribute(&mut self, node: NodeId, name: &str);

    fn has_class(&self, node: NodeId, class: &str) -> bool;
    fn add_class(&mut self, node: NodeId, class: &str);
    fn remove_class(&mut self, node: NodeId, class: &str);
    /// Returns whether the class is present afterwards.
    fn toggle_class(&mut self, node: NodeId, class: &str, force: Option<bool>) -> bool;

    fn style(&self, node: NodeId, property: &str) -> Option<String>;
    /// An empty value removes the property.
    fn set_style(&mut self, node: NodeId, property: &str, value: &str);

    fn text(&self, node: NodeId) -> String;
    fn set_text(&mut self, node: NodeId, text: &str);

    fn create_element(&mut self, tag: &str) -> NodeId;
    fn append_child(&mut self, parent: NodeId, child: NodeId);
    fn remove(&mut self, node: NodeId);

    fn subscribe(&mut self, target: ListenTarget, kind: EventKind) -> ListenerId;
    fn unsubscribe(&mut self, id: ListenerId);
}

/// Sends an [`AjaxRequest`] and returns the raw body of a 2xx response.
/// Non-success statuses must come back as [`AjaxError::Status`].
#[async_trait]
pub trait JsonTransport: Send + Sync {
    async fn send(&self, request: AjaxRequest) -> Result<String, AjaxError>;
}
