//! Headless DOM: an element tree, a selector engine and event propagation.

pub mod document;
pub mod event;
pub mod helpers;
pub mod selector;

pub use document::{Document, Markup};
pub use event::{Delivery, EventContext};
pub use helpers::Target;
pub use selector::SelectorList;
