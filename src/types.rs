use std::fmt;
use std::path::Path;

/// Serialization syntax of a configuration document.
///
/// The loader picks one per cascade from the base path's extension (see
/// [`Format::from_path`]) unless the builder forces one with
/// [`format()`](crate::CascfigBuilder::format). Overrides share the base extension
/// by construction, so one format covers the whole cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// YAML. Also the fallback for unknown or missing extensions.
    #[default]
    Yaml,
    Toml,
    Json,
}

impl Format {
    /// Choose a format from a file extension, case-insensitively.
    ///
    /// `.toml` and `.json` map to their formats; `.yaml`, `.yml` and anything else
    /// (including no extension) map to [`Format::Yaml`].
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("toml") => Format::Toml,
            Some("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Yaml => "YAML",
            Format::Toml => "TOML",
            Format::Json => "JSON",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        assert_eq!(Format::from_path(Path::new("app.toml")), Format::Toml);
        assert_eq!(Format::from_path(Path::new("app.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("app.yaml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("app.yml")), Format::Yaml);
    }

    #[test]
    fn extension_is_case_insensitive() {
        assert_eq!(Format::from_path(Path::new("APP.TOML")), Format::Toml);
    }

    #[test]
    fn unknown_or_missing_extension_falls_back_to_yaml() {
        assert_eq!(Format::from_path(Path::new("app.conf")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("/etc/app/config")), Format::Yaml);
    }

    #[test]
    fn overrides_share_the_base_format() {
        assert_eq!(
            Format::from_path(Path::new("conf/app.custom.07.toml")),
            Format::Toml
        );
    }
}
