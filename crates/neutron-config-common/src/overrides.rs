//! Parameter overrides read from YAML.
//!
//! Parameter structs use `#[serde(default)]`, so any key missing from the
//! YAML keeps its documented default. List parameters may be written as a
//! YAML sequence or as one comma-separated string, and integers may be
//! quoted.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::entry::LIST_SEPARATOR;
use crate::error::{ConfigError, ConfigResult};

/// Origin label used for YAML that did not come from a file.
pub const INLINE_ORIGIN: &str = "<inline>";

/// Parses overrides from a YAML string. Blank input yields the defaults.
pub fn from_yaml_str<T>(yaml: &str, origin: &str) -> ConfigResult<T>
where
    T: DeserializeOwned + Default,
{
    if yaml.trim().is_empty() {
        return Ok(T::default());
    }
    serde_yaml::from_str(yaml).map_err(|e| ConfigError::yaml(origin, e))
}

/// Reads overrides from a YAML file.
pub fn load_yaml_file<T>(path: impl AsRef<Path>) -> ConfigResult<T>
where
    T: DeserializeOwned + Default,
{
    let path = path.as_ref();
    let yaml = fs::read_to_string(path).map_err(|e| ConfigError::read(path, e))?;
    debug!("loaded parameter overrides from {}", path.display());
    from_yaml_str(&yaml, &path.display().to_string())
}

/// Splits a comma-separated string into trimmed, non-empty items.
pub fn split_list(s: &str) -> Vec<String> {
    s.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<OneOrMany> for Vec<String> {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(s) => split_list(&s),
            OneOrMany::Many(items) => items,
        }
    }
}

/// Deserializes a list given either as a sequence or as a comma-separated string.
pub fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    OneOrMany::deserialize(deserializer).map(Vec::from)
}

/// Like [`one_or_many`], with `null` meaning unset.
pub fn optional_one_or_many<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    Ok(Option::<OneOrMany>::deserialize(deserializer)?.map(Vec::from))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<T> {
    Number(T),
    Text(String),
}

/// Deserializes an optional integer written either as a number or as a
/// numeric string (`9000`, `'9000'`). `null` and a blank string mean unset.
pub fn optional_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: fmt::Display,
{
    match Option::<NumberOrString<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse()
                .map(Some)
                .map_err(|e| de::Error::custom(format!("invalid number '{}': {}", text, e)))
        }
    }
}
