//! Dump a loaded configuration back to text for diagnostics.

use serde::Serialize;

use crate::error::{CascfigError, DumpError};
use crate::types::Format;

/// Serialize `value` in the given format.
///
/// JSON output is compact (one line); YAML and TOML use their serializers'
/// default layout.
pub fn dump<T: Serialize + ?Sized>(value: &T, format: Format) -> Result<String, CascfigError> {
    let text = match format {
        Format::Json => serde_json::to_string(value).map_err(DumpError::from),
        Format::Yaml => serde_yaml::to_string(value).map_err(DumpError::from),
        Format::Toml => toml::to_string(value).map_err(DumpError::from),
    };
    text.map_err(|source| CascfigError::Dump { format, source })
}

pub fn dump_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CascfigError> {
    dump(value, Format::Json)
}

pub fn dump_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String, CascfigError> {
    dump(value, Format::Yaml)
}

pub fn dump_toml<T: Serialize + ?Sized>(value: &T) -> Result<String, CascfigError> {
    dump(value, Format::Toml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Single {
        z: String,
    }

    fn single() -> Single {
        Single { z: "ZZ".into() }
    }

    #[test]
    fn yaml_dump() {
        assert_eq!(dump_yaml(&single()).unwrap(), "z: ZZ\n");
    }

    #[test]
    fn json_dump_is_compact() {
        assert_eq!(dump_json(&single()).unwrap(), r#"{"z":"ZZ"}"#);
    }

    #[test]
    fn toml_dump() {
        assert_eq!(dump_toml(&single()).unwrap(), "z = \"ZZ\"\n");
    }

    #[test]
    fn unserializable_value_reports_format() {
        let mut bad = BTreeMap::new();
        bad.insert((1u8, 2u8), 3u8);
        let err = dump_json(&bad).unwrap_err();
        assert!(matches!(
            err,
            CascfigError::Dump {
                format: Format::Json,
                ..
            }
        ));
        assert!(err.to_string().contains("JSON"));
    }
}
