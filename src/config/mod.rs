#[cfg(feature = "cli")]
pub mod cli;

use crate::adapters::{FileStore, ReqwestTransport};
use crate::core::validators::{AgeOptions, BookingWindow, PasswordPolicy};
use crate::core::dom::Document;
use crate::core::widgets::Page;
use crate::core::{AjaxClient, Debouncer, Formatter, NumberLocale, Throttle};
use crate::utils::error::{KitError, Result};
use crate::utils::validation::{
    validate_distinct, validate_non_empty_string, validate_ordered_bounds, validate_path,
    validate_positive_number, validate_range, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// 所有區段皆可省略，省略時使用預設值
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitConfig {
    pub locale: NumberLocale,
    pub storage: StorageConfig,
    pub ajax: AjaxConfig,
    pub password: PasswordPolicy,
    pub age: AgeOptions,
    pub booking: BookingConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub path: String,
    pub quota_bytes: Option<usize>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: "./formkit-store.json".to_string(),
            quota_bytes: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AjaxConfig {
    pub base_url: Option<String>,
}

/// 營業時段，以整點小時表示 (含上下限)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    pub start_from: i64,
    pub start_to: i64,
    pub end_from: i64,
    pub end_to: i64,
}

impl Default for BookingConfig {
    fn default() -> Self {
        let window = BookingWindow::default();
        Self {
            start_from: *window.start_hours.start(),
            start_to: *window.start_hours.end(),
            end_from: *window.end_hours.start(),
            end_to: *window.end_hours.end(),
        }
    }
}

impl BookingConfig {
    pub fn window(&self) -> BookingWindow {
        BookingWindow {
            start_hours: self.start_from..=self.start_to,
            end_hours: self.end_from..=self.end_to,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub toast_duration_ms: u64,
    pub debounce_ms: u64,
    pub throttle_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 3000,
            debounce_ms: 300,
            throttle_ms: 300,
        }
    }
}

impl UiConfig {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn throttle_window(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }
}

impl KitConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(KitError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;

        toml::from_str(&processed).map_err(|e| KitError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_BASE})，未設定的變數原樣保留
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| KitError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn formatter(&self) -> Formatter {
        Formatter::new(self.locale.clone())
    }

    pub fn file_store(&self) -> FileStore {
        let store = FileStore::new(&self.storage.path);
        match self.storage.quota_bytes {
            Some(quota) => store.with_quota(quota),
            None => store,
        }
    }

    /// 依 `[ui] debounce_ms` 建立 debouncer
    pub fn debouncer<A, F>(&self, action: F) -> Debouncer<A>
    where
        A: Send + 'static,
        F: Fn(A) + Send + Sync + 'static,
    {
        Debouncer::new(self.ui.debounce_delay(), action)
    }

    pub fn throttle(&self) -> Throttle {
        Throttle::new(self.ui.throttle_window())
    }

    /// Page whose toasts default to `[ui] toast_duration_ms`.
    pub fn page(&self, document: Document) -> Page {
        Page::new(document).with_toast_duration(self.ui.toast_duration())
    }

    pub fn ajax_client(&self) -> Result<AjaxClient<ReqwestTransport>> {
        let client = AjaxClient::new(ReqwestTransport::new()?);
        match &self.ajax.base_url {
            Some(base) => Ok(client.with_base_url(base)?),
            None => Ok(client),
        }
    }
}

impl Validate for KitConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("locale.thousands_separator", &self.locale.thousands_separator)?;
        validate_non_empty_string("locale.decimal_separator", &self.locale.decimal_separator)?;
        validate_distinct(
            "locale",
            &self.locale.thousands_separator,
            &self.locale.decimal_separator,
        )?;

        validate_path("storage.path", &self.storage.path)?;
        if let Some(quota) = self.storage.quota_bytes {
            validate_positive_number("storage.quota_bytes", quota as u64, 1)?;
        }

        if let Some(base) = &self.ajax.base_url {
            validate_url("ajax.base_url", base)?;
        }

        validate_positive_number("password.min_length", self.password.min_length as u64, 1)?;
        validate_ordered_bounds("age", self.age.min, self.age.max)?;
        validate_ordered_bounds("booking.start", self.booking.start_from, self.booking.start_to)?;
        validate_ordered_bounds("booking.end", self.booking.end_from, self.booking.end_to)?;
        validate_range("booking.start_from", self.booking.start_from, 0, 23)?;
        validate_range("booking.end_to", self.booking.end_to, 0, 23)?;

        validate_positive_number("ui.toast_duration_ms", self.ui.toast_duration_ms, 1)?;
        Ok(())
    }
}
