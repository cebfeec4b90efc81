pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::KitConfig;

pub use crate::adapters::{FileStore, MemoryStore, ReqwestTransport};
pub use crate::core::dom::{Document, Markup};
pub use crate::core::widgets::{Page, Widget};
pub use crate::core::{AjaxClient, Debouncer, Formatter, NumberLocale, Storage, Throttle, ValidatorKind};
pub use domain::model::{FieldRule, FormData, FormValidation};
pub use domain::ports::{DomHost, JsonTransport, KeyValueStore};
pub use utils::error::{AjaxError, KitError, Result, StorageError};
