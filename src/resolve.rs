//! Decode one document onto an existing value.
//!
//! Operates on already-substituted text with no I/O, so every step is testable
//! with synthetic inputs:
//!
//! 1. Parse the text into a generic mapping (`serde_yaml::Mapping`), whatever
//!    the source format. YAML numbers keep non-finite floats (`.inf`, `.nan`),
//!    which a JSON tree would turn into `null`.
//! 2. Snapshot the destination by serializing it into the same tree shape.
//! 3. Deep-merge the document on top of the snapshot.
//! 4. Deserialize the merged tree back into `T`, collecting unknown keys.
//!
//! Because the snapshot supplies every field the document leaves out, decoding
//! is sparse: a document only changes the fields it mentions. A failed pass
//! leaves the destination untouched.
//!
//! The snapshot only sees what `T` serializes. Fields marked
//! `#[serde(skip)]` (or `skip_serializing` with a deserialize default) are
//! rebuilt from their default on every pass, so keep runtime-only state out of
//! the config struct.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};

use crate::error::DecodeError;
use crate::merge::deep_merge;
use crate::types::Format;

/// Parse substituted text into a top-level mapping.
///
/// An empty YAML document and a YAML `null` root are treated as an empty
/// mapping. Any other non-mapping root is [`DecodeError::NotAMapping`].
pub fn parse_document(text: &str, format: Format) -> Result<Mapping, DecodeError> {
    let root = match format {
        Format::Yaml if text.trim().is_empty() => return Ok(Mapping::new()),
        Format::Yaml => serde_yaml::from_str::<Value>(text)?,
        Format::Json => serde_json::from_str::<Value>(text).map_err(DecodeError::Json)?,
        Format::Toml => {
            let table: toml::Table = toml::from_str(text)?;
            toml_to_yaml(toml::Value::Table(table))
        }
    };

    match root {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(DecodeError::NotAMapping),
    }
}

/// TOML datetimes have no YAML counterpart here; they become RFC 3339 strings.
fn toml_to_yaml(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => Value::Number(f.into()),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Sequence(items.into_iter().map(toml_to_yaml).collect()),
        toml::Value::Table(table) => Value::Mapping(
            table
                .into_iter()
                .map(|(k, v)| (Value::String(k), toml_to_yaml(v)))
                .collect(),
        ),
    }
}

/// Overlay `document` onto `dest`.
///
/// Returns the dotted paths of keys that `T` did not consume. In strict mode
/// any such key fails the pass with [`DecodeError::UnknownKeys`] instead.
pub fn apply_document<T>(
    dest: &mut T,
    document: Mapping,
    strict: bool,
) -> Result<Vec<String>, DecodeError>
where
    T: Serialize + DeserializeOwned,
{
    let merged = match serde_yaml::to_value(&*dest).map_err(DecodeError::Snapshot)? {
        Value::Mapping(current) => deep_merge(current, document),
        _ => document,
    };

    let mut unknown: Vec<String> = Vec::new();
    let decoded: T = serde_ignored::deserialize(Value::Mapping(merged), |path| {
        unknown.push(path.to_string());
    })
    .map_err(DecodeError::Deserialize)?;

    if strict && !unknown.is_empty() {
        return Err(DecodeError::UnknownKeys(unknown));
    }

    *dest = decoded;
    Ok(unknown)
}
