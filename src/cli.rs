//! Clap adapter for cascfig.
//!
//! This module is the optional command-line layer in front of the loader. It is
//! compiled only when the `clap` Cargo feature is enabled (on by default).
//!
//! [`ConfigArgs`] is a clap derive struct you flatten into your own parser to get
//! `-c/--config <FILE>`, `--dump-json` and `--dump-yaml`. Hand it to
//! [`CascfigBuilder::load_from_args()`](crate::CascfigBuilder::load_from_args)
//! together with your default file name.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::types::Format;

/// Clap-derived config flags.
///
/// ```ignore
/// #[derive(Parser)]
/// struct Cli {
///     #[command(flatten)]
///     config: ConfigArgs,
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct ConfigArgs {
    /// Config file.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the resolved configuration as JSON.
    #[arg(long)]
    pub dump_json: bool,

    /// Print the resolved configuration as YAML.
    #[arg(long)]
    pub dump_yaml: bool,
}

impl ConfigArgs {
    /// The file to load: `--config` when given, `default_file` otherwise.
    pub fn config_path(&self, default_file: &Path) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| default_file.to_path_buf())
    }

    /// Requested dumps, JSON first.
    pub fn dump_formats(&self) -> Vec<Format> {
        let mut formats = Vec::new();
        if self.dump_json {
            formats.push(Format::Json);
        }
        if self.dump_yaml {
            formats.push(Format::Yaml);
        }
        formats
    }
}
