//! Transient notifications appended to `<body>` and removed by the page clock.

use super::Page;
use crate::domain::model::NodeId;
use crate::domain::ports::DomHost;
use std::time::Duration;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);
pub const ALERT_DURATION: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
    /// Unrecognised kinds fall back to a neutral colour.
    Other,
}

impl From<&str> for ToastKind {
    fn from(kind: &str) -> Self {
        match kind {
            "success" => ToastKind::Success,
            "error" => ToastKind::Error,
            "warning" => ToastKind::Warning,
            "info" => ToastKind::Info,
            _ => ToastKind::Other,
        }
    }
}

impl ToastKind {
    pub fn color(self) -> &'static str {
        match self {
            ToastKind::Success => "#198754",
            ToastKind::Error => "#dc3545",
            ToastKind::Warning => "#ffc107",
            ToastKind::Info => "#0dcaf0",
            ToastKind::Other => "#333",
        }
    }
}

fn spawn(
    page: &mut Page,
    message: &str,
    kind: ToastKind,
    duration: Duration,
    extra: &[(&str, &str)],
) -> NodeId {
    let dom = page.document_mut();
    let toast = dom.create_element("div");
    dom.set_text(toast, message);

    let background = kind.color();
    let base = [
        ("position", "fixed"),
        ("top", "20px"),
        ("right", "20px"),
        ("background", background),
        ("color", "#fff"),
        ("z-index", "9999"),
    ];
    for (property, value) in base.iter().chain(extra) {
        dom.set_style(toast, property, value);
    }

    let body = dom.body();
    dom.append_child(body, toast);
    page.schedule_removal(toast, duration);
    tracing::debug!("Toast {:?} shown for {:?}", kind, duration);
    toast
}

/// Card-style toast with a drop shadow.
pub fn show(page: &mut Page, message: &str, kind: impl Into<ToastKind>, duration: Duration) -> NodeId {
    spawn(
        page,
        message,
        kind.into(),
        duration,
        &[
            ("padding", "12px 20px"),
            ("border-radius", "8px"),
            ("box-shadow", "0 4px 12px rgba(0,0,0,0.15)"),
            ("animation", "slideIn 0.3s"),
        ],
    )
}

/// [`show`] with the page's configured toast duration.
pub fn notify(page: &mut Page, message: &str, kind: impl Into<ToastKind>) -> NodeId {
    let duration = page.toast_duration();
    show(page, message, kind, duration)
}

/// Compact toast removed after [`ALERT_DURATION`].
pub fn alert(page: &mut Page, message: &str, kind: impl Into<ToastKind>) -> NodeId {
    spawn(
        page,
        message,
        kind.into(),
        ALERT_DURATION,
        &[("padding", "10px 14px"), ("border-radius", "6px")],
    )
}
