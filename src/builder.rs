use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

#[cfg(feature = "clap")]
use crate::cli::ConfigArgs;
use crate::env::{self, Env, ProcessEnv};
use crate::error::{CascfigError, DecodeError};
use crate::file;
#[cfg(feature = "clap")]
use crate::ops;
use crate::resolve;
use crate::types::Format;

/// Entry point for building a cascfig loader.
pub struct Cascfig;

impl Cascfig {
    pub fn builder() -> CascfigBuilder {
        CascfigBuilder::new()
    }
}

/// Builder for loading a base config file and its custom overrides.
///
/// The defaults read placeholders from the process environment, pick the
/// format from the base file's extension, and ignore unknown keys (with a
/// warning).
#[derive(Debug, Clone)]
pub struct CascfigBuilder<E = ProcessEnv> {
    env: E,
    format: Option<Format>,
    strict: bool,
}

impl CascfigBuilder {
    fn new() -> Self {
        Self {
            env: ProcessEnv,
            format: None,
            strict: false,
        }
    }
}

impl Default for CascfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Env> CascfigBuilder<E> {
    /// Replace the variable lookup used for `${NAME}` placeholders.
    pub fn env<F: Env>(self, env: F) -> CascfigBuilder<F> {
        CascfigBuilder {
            env,
            format: self.format,
            strict: self.strict,
        }
    }

    /// Force a document format instead of inferring it from the base extension.
    pub fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// Enable or disable strict mode (default: `false`).
    /// In strict mode, unknown keys make the document malformed.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    fn effective_format(&self, base: &Path) -> Format {
        self.format.unwrap_or_else(|| Format::from_path(base))
    }

    /// Load `base` and every contiguous custom override onto `dest`.
    ///
    /// Returns the path of the last file applied, or `None` when the base file
    /// was missing or malformed and `default` was copied into `dest` instead.
    /// Without a default those two cases are errors. A broken custom file is
    /// always an error; by then `dest` holds the base and any earlier overrides.
    pub fn load<T>(
        &self,
        dest: &mut T,
        base: impl AsRef<Path>,
        default: Option<&T>,
    ) -> Result<Option<PathBuf>, CascfigError>
    where
        T: Serialize + DeserializeOwned + Clone,
    {
        let base = base.as_ref();
        let format = self.effective_format(base);
        debug!(path = %base.display(), %format, "reading configuration");

        if let Err(err) = self.apply_base(dest, base, format) {
            return match default {
                Some(fallback) => {
                    warn!(error = %err, "configuration unusable, using default value");
                    *dest = fallback.clone();
                    Ok(None)
                }
                None => Err(err),
            };
        }

        let mut effective = base.to_path_buf();
        for path in file::override_paths(base) {
            debug!(path = %path.display(), "probing custom configuration");
            let content = match file::read_optional(&path) {
                Ok(Some(content)) => content,
                Ok(None) => break,
                Err(source) => return Err(CascfigError::UnreadableOverride { path, source }),
            };

            if let Err(source) = self.apply_text(dest, &content, format, &path) {
                return Err(CascfigError::MalformedOverrideDocument { path, source });
            }
            debug!(path = %path.display(), "applied custom configuration");
            effective = path;
        }

        debug!(effective = %effective.display(), "configuration loaded");
        Ok(Some(effective))
    }

    /// Resolve the file from `args`, load it, then print any requested dumps.
    #[cfg(feature = "clap")]
    pub fn load_from_args<T>(
        &self,
        dest: &mut T,
        args: &ConfigArgs,
        default_file: impl AsRef<Path>,
        default: Option<&T>,
    ) -> Result<Option<PathBuf>, CascfigError>
    where
        T: Serialize + DeserializeOwned + Clone,
    {
        let path = args.config_path(default_file.as_ref());
        let effective = self.load(dest, &path, default)?;
        for format in args.dump_formats() {
            println!("{}", ops::dump(&*dest, format)?);
        }
        Ok(effective)
    }

    fn apply_base<T>(&self, dest: &mut T, base: &Path, format: Format) -> Result<(), CascfigError>
    where
        T: Serialize + DeserializeOwned,
    {
        let content = std::fs::read(base).map_err(|source| CascfigError::MissingBaseFile {
            path: base.to_path_buf(),
            source,
        })?;
        self.apply_text(dest, &content, format, base)
            .map_err(|source| CascfigError::MalformedBaseDocument {
                path: base.to_path_buf(),
                source,
            })
    }

    /// Substitute, parse and overlay one document.
    fn apply_text<T>(
        &self,
        dest: &mut T,
        content: &[u8],
        format: Format,
        path: &Path,
    ) -> Result<(), DecodeError>
    where
        T: Serialize + DeserializeOwned,
    {
        let text = std::str::from_utf8(content)?;
        let expanded = env::substitute(text, &self.env);
        let document = resolve::parse_document(&expanded, format)?;
        for key in resolve::apply_document(dest, document, self.strict)? {
            warn!(%key, path = %path.display(), "ignoring unknown config key");
        }
        Ok(())
    }
}

/// Load with default settings: process environment, format by extension,
/// unknown keys ignored. See [`CascfigBuilder::load`].
pub fn load_from_file<T>(
    dest: &mut T,
    base: impl AsRef<Path>,
    default: Option<&T>,
) -> Result<Option<PathBuf>, CascfigError>
where
    T: Serialize + DeserializeOwned + Clone,
{
    Cascfig::builder().load(dest, base, default)
}
