use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 表單欄位 name -> value。同名欄位以最後一個為準。
pub type FormData = BTreeMap<String, String>;

/// 單一欄位的驗證規則
#[derive(Clone, Default)]
pub struct FieldRule {
    pub required: bool,
    pub email: bool,
    pub custom: Option<fn(&str) -> bool>,
    pub message: Option<String>,
}

impl FieldRule {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    pub fn email() -> Self {
        Self {
            email: true,
            ..Self::default()
        }
    }

    pub fn and_email(mut self) -> Self {
        self.email = true;
        self
    }

    pub fn with_check(mut self, check: fn(&str) -> bool) -> Self {
        self.custom = Some(check);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("required", &self.required)
            .field("email", &self.email)
            .field("custom", &self.custom.is_some())
            .field("message", &self.message)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValidation {
    pub is_valid: bool,
    pub errors: BTreeMap<String, String>,
}

/// Handle to an element inside a [`crate::core::dom::Document`].
///
/// 槽位會重複使用；generation 不同的舊 handle 不會指到新元素。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl NodeId {
    pub(crate) fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

/// Where a listener is attached: a node, or the document itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenTarget {
    Document,
    Node(NodeId),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Keydown,
    Input,
    Change,
    Submit,
    Scroll,
    Custom(String),
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Click => write!(f, "click"),
            EventKind::Keydown => write!(f, "keydown"),
            EventKind::Input => write!(f, "input"),
            EventKind::Change => write!(f, "change"),
            EventKind::Submit => write!(f, "submit"),
            EventKind::Scroll => write!(f, "scroll"),
            EventKind::Custom(name) => write!(f, "{}", name),
        }
    }
}

impl From<&str> for EventKind {
    fn from(name: &str) -> Self {
        match name {
            "click" => EventKind::Click,
            "keydown" => EventKind::Keydown,
            "input" => EventKind::Input,
            "change" => EventKind::Change,
            "submit" => EventKind::Submit,
            "scroll" => EventKind::Scroll,
            other => EventKind::Custom(other.to_string()),
        }
    }
}

/// A user-originated event aimed at one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomEvent {
    pub kind: EventKind,
    pub target: NodeId,
    pub key: Option<String>,
}

impl DomEvent {
    pub fn click(target: NodeId) -> Self {
        Self {
            kind: EventKind::Click,
            target,
            key: None,
        }
    }

    pub fn keydown(target: NodeId, key: impl Into<String>) -> Self {
        Self {
            kind: EventKind::Keydown,
            target,
            key: Some(key.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AjaxMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for AjaxMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AjaxMethod::Get => "GET",
            AjaxMethod::Post => "POST",
            AjaxMethod::Put => "PUT",
            AjaxMethod::Delete => "DELETE",
        };
        write!(f, "{}", name)
    }
}

/// One part of a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        filename: String,
        mime: Option<String>,
        bytes: Vec<u8>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadForm {
    pub parts: Vec<UploadPart>,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(UploadPart::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn file(
        mut self,
        name: impl Into<String>,
        filename: impl Into<String>,
        mime: Option<&str>,
        bytes: Vec<u8>,
    ) -> Self {
        self.parts.push(UploadPart::File {
            name: name.into(),
            filename: filename.into(),
            mime: mime.map(str::to_string),
            bytes,
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AjaxBody {
    Empty,
    Json(serde_json::Value),
    Multipart(UploadForm),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AjaxRequest {
    pub method: AjaxMethod,
    pub url: String,
    pub body: AjaxBody,
    /// 是否帶上 cookie (same-origin credentials)
    pub with_credentials: bool,
}
