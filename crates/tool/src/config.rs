//! # Tool Configuration
//!
//! Settings for the `bag-normalize` and `bag-codegen` binaries, read from
//! environment variables (a `.env` file is loaded by the binaries first).
//!
//! - `BAG_ABSENT_POLICY`: `omit` (default) or `null`
//! - `BAG_STRICT_FIELDS`: reject unknown keys when `true` or `1` (default: false)
//! - `BAG_CODEGEN_OUT`: file the TypeScript declaration is written to (default: stdout)
//! - `LOG_LEVEL`: logging level (default: "info")

use eyre::{Result, eyre};
use schedule_bag_core::codec::{AbsentPolicy, CodecOptions};
use std::{env, path::PathBuf};
use tracing::Level;

#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// How absent fields are written back out
    pub absent_policy: AbsentPolicy,

    /// Whether unknown keys fail decoding
    pub strict_fields: bool,

    /// Destination for generated declarations; `None` means stdout
    pub codegen_out: Option<PathBuf>,

    /// Log level for the application
    pub log_level: Level,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            absent_policy: AbsentPolicy::Omit,
            strict_fields: false,
            codegen_out: None,
            log_level: Level::INFO,
        }
    }
}

impl ToolConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns an error if `BAG_ABSENT_POLICY` or `BAG_STRICT_FIELDS` hold an
    /// unrecognised value.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let absent_policy = match lookup("BAG_ABSENT_POLICY").as_deref() {
            None | Some("omit") => AbsentPolicy::Omit,
            Some("null") => AbsentPolicy::EmitNull,
            Some(other) => {
                return Err(eyre!(
                    "BAG_ABSENT_POLICY must be \"omit\" or \"null\", got {:?}",
                    other
                ));
            }
        };

        let strict_fields = match lookup("BAG_STRICT_FIELDS").as_deref() {
            None | Some("false") | Some("0") => false,
            Some("true") | Some("1") => true,
            Some(other) => {
                return Err(eyre!("BAG_STRICT_FIELDS must be a boolean, got {:?}", other));
            }
        };

        let codegen_out = lookup("BAG_CODEGEN_OUT")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        Ok(Self {
            absent_policy,
            strict_fields,
            codegen_out,
            log_level,
        })
    }

    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions {
            absent_policy: self.absent_policy,
            strict_fields: self.strict_fields,
        }
    }
}
