//! Typed configuration files with environment placeholders and cascading custom
//! overrides. Define a serde struct, point at a file, and go.
//!
//! ```ignore
//! let mut config = AppConfig::default();
//! let source = cascfig::load_from_file(&mut config, "config.yaml", Some(&AppConfig::default()))?;
//! ```
//!
//! That call reads `config.yaml`, expands `${NAME}` placeholders from the
//! environment, decodes it onto `config`, then layers `config.custom.yaml`,
//! `config.custom.01.yaml`, `config.custom.02.yaml`, ... on top for as long as
//! the next file exists. `source` is the last file applied, or `None` if the
//! base file was unusable and the default was copied in.
//!
//! # The cascade
//!
//! ```text
//! config.yaml              base, required unless a default is given
//!        ↑ overridden by
//! config.custom.yaml       first override
//!        ↑ overridden by
//! config.custom.01.yaml    numbered overrides, 01 through 99,
//! config.custom.02.yaml    contiguous: a missing number ends the run
//! ...
//! ```
//!
//! Every layer is **sparse**. A document only changes the fields it mentions;
//! everything else keeps the value from the layer below (or the value the
//! destination held before loading). Nested mappings merge key by key;
//! sequences and scalars are replaced whole.
//!
//! Each pass starts from what the destination serializes, so a field that
//! never serializes (`#[serde(skip)]`, `skip_serializing`) comes back as its
//! default after every layer. Keep runtime-only state outside the config type.
//!
//! The run is strictly contiguous. If `config.custom.02.yaml` exists but
//! `config.custom.01.yaml` doesn't, the `02` file is never read. Index 100 and
//! beyond are never probed. See [`file`] for the naming rules.
//!
//! # Defaults and failures
//!
//! The default value is a full replacement, never merged. It is used only when
//! the **base** file is missing or malformed. Without a default those cases
//! return [`CascfigError::MissingBaseFile`] and
//! [`CascfigError::MalformedBaseDocument`].
//!
//! Custom files have no fallback. A custom file that fails to decode returns
//! [`CascfigError::MalformedOverrideDocument`] and one that exists but can't be
//! read returns [`CascfigError::UnreadableOverride`]. In both cases the
//! destination keeps whatever layers were already applied.
//!
//! # Environment placeholders
//!
//! Before each document is parsed, `${NAME}` becomes the variable's value (or
//! an empty string) and `${NAME=fallback}` becomes the value or `fallback`.
//! Substitution is plain text replacement, so placeholders work anywhere in the
//! file, including inside keys or inline lists. The lookup is pluggable through
//! the [`Env`] trait:
//!
//! ```ignore
//! let env = HashMap::from([("PORT".to_string(), "9000".to_string())]);
//! Cascfig::builder().env(env).load(&mut config, "config.yaml", None)?;
//! ```
//!
//! # Formats
//!
//! The base file's extension picks the syntax for the whole cascade: `.toml`
//! is TOML, `.json` is JSON, anything else is YAML. Force one with
//! [`format()`](CascfigBuilder::format).
//!
//! # Strict mode
//!
//! Unknown keys are logged at `warn` and ignored by default. With
//! [`.strict(true)`](CascfigBuilder::strict) they make the document malformed,
//! which follows the same default/no-default rules as any other decode failure.
//!
//! # Clap adapter
//!
//! The `cli` module (behind the `clap` feature, on by default) provides
//! [`ConfigArgs`] with `-c/--config`, `--dump-json` and `--dump-yaml`, wired up
//! by [`load_from_args()`](CascfigBuilder::load_from_args).
//!
//! # Logging
//!
//! Loading emits `tracing` events: `debug` for each file read or probed and
//! `warn` for default fallbacks and ignored keys. Install any subscriber to see
//! them.

pub mod error;
pub mod file;
pub mod types;

mod builder;
#[cfg(feature = "clap")]
mod cli;
mod env;
pub(crate) mod merge;
mod ops;
mod resolve;

#[cfg(test)]
mod fixtures;

pub use builder::{Cascfig, CascfigBuilder, load_from_file};
#[cfg(feature = "clap")]
pub use cli::ConfigArgs;
pub use env::{Env, ProcessEnv, substitute};
pub use error::{CascfigError, DecodeError, DumpError};
pub use ops::{dump, dump_json, dump_toml, dump_yaml};
pub use types::Format;
