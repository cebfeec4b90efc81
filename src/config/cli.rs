use crate::config::KitConfig;
use crate::core::ValidatorKind;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "formkit")]
#[command(about = "Validate, format and store form values from the command line")]
pub struct CliConfig {
    #[arg(long, global = true, help = "TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run one validator against a value; exits 1 when it fails
    Validate {
        #[arg(value_enum)]
        kind: ValidatorKind,
        value: String,
    },
    /// Format a value with the configured locale
    Format {
        #[command(subcommand)]
        what: FormatCommand,
    },
    /// Read and write the JSON key/value store
    Store {
        #[arg(long, help = "Store file, overriding storage.path")]
        path: Option<String>,
        #[command(subcommand)]
        action: StoreCommand,
    },
    /// GET a URL and print the JSON response
    Fetch { url: String },
}

#[derive(Debug, Clone, Subcommand)]
pub enum FormatCommand {
    Number {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        #[arg(long, default_value_t = 0)]
        decimals: u32,
    },
    Currency {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    Date {
        value: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum StoreCommand {
    /// Values that are not valid JSON are stored as strings
    Set { key: String, value: String },
    Get { key: String },
    Remove { key: String },
    Clear,
    Keys,
}

impl CliConfig {
    /// 沒有指定設定檔時使用預設值
    pub fn load_config(&self) -> Result<KitConfig> {
        match &self.config {
            Some(path) => KitConfig::from_file(path),
            None => Ok(KitConfig::default()),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", &path.to_string_lossy())?;
        }
        if let Command::Store {
            path: Some(path), ..
        } = &self.command
        {
            validate_path("store.path", path)?;
        }
        Ok(())
    }
}
