use crate::config::cli::{Command, FormatCommand, StoreCommand};
use crate::config::KitConfig;
use crate::core::validators::{is_strong_password_with, is_valid_age, ValidatorKind};
use crate::core::Storage;
use crate::domain::ports::KeyValueStore;
use crate::utils::error::{KitError, Result};
use serde_json::Value;

/// What a command printed and whether it succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub success: bool,
}

impl Outcome {
    fn ok(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: true,
        }
    }
}

/// 驗證器會套用設定檔裡的年齡與密碼政策
fn check(kind: ValidatorKind, value: &str, config: &KitConfig) -> bool {
    match kind {
        ValidatorKind::Age => is_valid_age(value, config.age),
        ValidatorKind::StrongPassword => is_strong_password_with(value, &config.password),
        other => other.check(value),
    }
}

pub async fn execute(command: &Command, config: &KitConfig) -> Result<Outcome> {
    match command {
        Command::Validate { kind, value } => {
            let valid = check(*kind, value, config);
            tracing::debug!("{:?}({:?}) = {}", kind, value, valid);
            Ok(Outcome {
                output: valid.to_string(),
                success: valid,
            })
        }
        Command::Format { what } => {
            let formatter = config.formatter();
            let output = match what {
                FormatCommand::Number { value, decimals } => formatter.number(*value, *decimals),
                FormatCommand::Currency { value } => formatter.currency(*value),
                FormatCommand::Date { value } => formatter.date(value),
            };
            Ok(Outcome::ok(output))
        }
        Command::Store { path, action } => {
            let mut settings = config.clone();
            if let Some(path) = path {
                settings.storage.path = path.clone();
            }
            let mut storage = Storage::new(settings.file_store());
            store(&mut storage, action)
        }
        Command::Fetch { url } => {
            // 相對路徑需要設定 ajax.base_url
            if config.ajax.base_url.is_none()
                && matches!(url::Url::parse(url), Err(url::ParseError::RelativeUrlWithoutBase))
            {
                return Err(KitError::MissingConfigError {
                    field: "ajax.base_url".to_string(),
                });
            }
            let client = config.ajax_client()?;
            let body: Value = client.get(url).await?;
            Ok(Outcome::ok(serde_json::to_string_pretty(&body)?))
        }
    }
}

fn store<S: KeyValueStore>(
    storage: &mut Storage<S>,
    action: &StoreCommand,
) -> Result<Outcome> {
    let key = match action {
        StoreCommand::Set { key, .. } | StoreCommand::Get { key } | StoreCommand::Remove { key } => {
            Some(key)
        }
        StoreCommand::Clear | StoreCommand::Keys => None,
    };
    if key.is_some_and(|key| key.trim().is_empty()) {
        return Err(KitError::ValidationError {
            message: "store key cannot be empty".to_string(),
        });
    }

    match action {
        StoreCommand::Set { key, value } => {
            let parsed =
                serde_json::from_str::<Value>(value).unwrap_or_else(|_| Value::String(value.clone()));
            storage.set(key, &parsed)?;
            Ok(Outcome::ok(format!("stored '{}'", key)))
        }
        StoreCommand::Get { key } => match storage.try_get::<Value>(key)? {
            Some(value) => Ok(Outcome::ok(serde_json::to_string_pretty(&value)?)),
            None => Ok(Outcome {
                output: "null".to_string(),
                success: false,
            }),
        },
        StoreCommand::Remove { key } => {
            storage.remove(key)?;
            Ok(Outcome::ok(format!("removed '{}'", key)))
        }
        StoreCommand::Clear => {
            storage.clear()?;
            Ok(Outcome::ok("cleared"))
        }
        StoreCommand::Keys => Ok(Outcome::ok(storage.keys()?.join("\n"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_command(dir: &TempDir, action: StoreCommand) -> Command {
        Command::Store {
            path: Some(dir.path().join("store.json").to_string_lossy().into_owned()),
            action,
        }
    }

    #[tokio::test]
    async fn test_validate_uses_configured_policies() {
        let mut config = KitConfig::default();
        let weak = Command::Validate {
            kind: ValidatorKind::StrongPassword,
            value: "abcdefgh".to_string(),
        };
        assert!(!execute(&weak, &config).await.unwrap().success);

        config.password.min_uppercase = 0;
        config.password.min_numbers = 0;
        config.password.min_symbols = 0;
        let outcome = execute(&weak, &config).await.unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.output, "true");
    }

    #[tokio::test]
    async fn test_format_uses_locale() {
        let config = KitConfig::default();
        let command = Command::Format {
            what: FormatCommand::Number {
                value: 1234.5,
                decimals: 2,
            },
        };
        assert_eq!(execute(&command, &config).await.unwrap().output, "1.234,50");

        let command = Command::Format {
            what: FormatCommand::Date {
                value: "not a date".to_string(),
            },
        };
        assert_eq!(execute(&command, &config).await.unwrap().output, "");
    }

    #[tokio::test]
    async fn test_store_round_trip_through_file() {
        let dir = TempDir::new().unwrap();
        let config = KitConfig::default();

        let set = store_command(
            &dir,
            StoreCommand::Set {
                key: "user".to_string(),
                value: r#"{"name":"John"}"#.to_string(),
            },
        );
        assert!(execute(&set, &config).await.unwrap().success);

        let plain = store_command(
            &dir,
            StoreCommand::Set {
                key: "note".to_string(),
                value: "hello".to_string(),
            },
        );
        execute(&plain, &config).await.unwrap();

        let get = store_command(
            &dir,
            StoreCommand::Get {
                key: "note".to_string(),
            },
        );
        assert_eq!(execute(&get, &config).await.unwrap().output, "\"hello\"");

        let keys = store_command(&dir, StoreCommand::Keys);
        assert_eq!(execute(&keys, &config).await.unwrap().output, "note\nuser");

        execute(&store_command(&dir, StoreCommand::Clear), &config)
            .await
            .unwrap();
        let missing = execute(&get, &config).await.unwrap();
        assert!(!missing.success);
        assert_eq!(missing.output, "null");
    }

    #[tokio::test]
    async fn test_store_rejects_blank_key() {
        let dir = TempDir::new().unwrap();
        let command = store_command(
            &dir,
            StoreCommand::Set {
                key: "  ".to_string(),
                value: "1".to_string(),
            },
        );
        let err = execute(&command, &KitConfig::default()).await.unwrap_err();
        assert!(matches!(err, KitError::ValidationError { .. }));
        assert_eq!(err.severity(), crate::utils::error::ErrorSeverity::Low);
        assert!(!dir.path().join("store.json").exists());
    }

    #[tokio::test]
    async fn test_relative_fetch_needs_base_url() {
        let command = Command::Fetch {
            url: "/users/1".to_string(),
        };
        let err = execute(&command, &KitConfig::default()).await.unwrap_err();
        match err {
            KitError::MissingConfigError { field } => assert_eq!(field, "ajax.base_url"),
            other => panic!("unexpected error: {}", other),
        }
    }
}
