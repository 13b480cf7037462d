//! Section/key configuration entries.
//!
//! An entry either sets a value or marks the key absent. Absent keys are the
//! "use the platform default" case: the writer omits the line entirely
//! instead of writing an empty value.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator used when rendering list values.
pub const LIST_SEPARATOR: &str = ",";

/// Returns true if `value` can be written as part of a single INI line.
///
/// Control characters (newlines included) would let a value start a new
/// key or section in the rendered file.
pub fn is_single_line(value: &str) -> bool {
    !value.chars().any(char::is_control)
}

/// A rendered configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<String>),
}

impl ConfigValue {
    /// Builds a list value from anything displayable, keeping order.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        ConfigValue::List(items.into_iter().map(|item| item.to_string()).collect())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ConfigValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns list items; a scalar string is treated as a one-item list.
    pub fn to_list(&self) -> Vec<String> {
        match self {
            ConfigValue::List(items) => items.clone(),
            other => vec![other.to_string()],
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Int(i) => write!(f, "{}", i),
            ConfigValue::Str(s) => f.write_str(s),
            ConfigValue::List(items) => f.write_str(&items.iter().join(LIST_SEPARATOR)),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<u32> for ConfigValue {
    fn from(i: u32) -> Self {
        ConfigValue::Int(i64::from(i))
    }
}

impl From<u8> for ConfigValue {
    fn from(i: u8) -> Self {
        ConfigValue::Int(i64::from(i))
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Str(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Str(s.to_string())
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(items: Vec<String>) -> Self {
        ConfigValue::List(items)
    }
}

/// Whether an entry writes a line or removes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "presence", content = "value", rename_all = "lowercase")]
pub enum Presence {
    Set(ConfigValue),
    Absent,
}

/// A single `section/key` configuration entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub section: String,
    pub key: String,
    #[serde(flatten)]
    pub presence: Presence,
}

impl ConfigEntry {
    /// Creates an entry that sets `value`.
    pub fn set(section: &str, key: &str, value: impl Into<ConfigValue>) -> Self {
        Self {
            section: section.to_string(),
            key: key.to_string(),
            presence: Presence::Set(value.into()),
        }
    }

    /// Creates an entry that removes the key.
    pub fn absent(section: &str, key: &str) -> Self {
        Self {
            section: section.to_string(),
            key: key.to_string(),
            presence: Presence::Absent,
        }
    }

    /// Sets the value when present, otherwise marks the key absent.
    pub fn optional<V: Into<ConfigValue>>(section: &str, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => Self::set(section, key, value),
            None => Self::absent(section, key),
        }
    }

    /// Sets a list value, or marks the key absent when the list is empty.
    pub fn list<I>(section: &str, key: &str, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        match ConfigValue::list(items) {
            ConfigValue::List(items) if items.is_empty() => Self::absent(section, key),
            value => Self::set(section, key, value),
        }
    }

    /// Returns the `section/key` path, as used by the orchestration layer.
    pub fn path(&self) -> String {
        format!("{}/{}", self.section, self.key)
    }

    pub fn value(&self) -> Option<&ConfigValue> {
        match &self.presence {
            Presence::Set(value) => Some(value),
            Presence::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self.presence, Presence::Absent)
    }
}

impl fmt::Display for ConfigEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.presence {
            Presence::Set(value) => write!(f, "{} = {}", self.path(), value),
            Presence::Absent => write!(f, "{} (absent)", self.path()),
        }
    }
}

/// Helper trait for looking up entries in an emitted sequence.
pub trait ConfigEntriesExt {
    /// Gets the entry for `section/key`, if emitted.
    fn get_entry(&self, section: &str, key: &str) -> Option<&ConfigEntry>;

    /// Gets the value for `section/key` if it was emitted and set.
    fn get_value(&self, section: &str, key: &str) -> Option<&ConfigValue>;

    /// Checks if any entry exists for the section.
    fn has_section(&self, section: &str) -> bool;

    /// Section names in emission order, without repeats.
    fn sections(&self) -> Vec<&str>;
}

impl ConfigEntriesExt for [ConfigEntry] {
    fn get_entry(&self, section: &str, key: &str) -> Option<&ConfigEntry> {
        self.iter().find(|e| e.section == section && e.key == key)
    }

    fn get_value(&self, section: &str, key: &str) -> Option<&ConfigValue> {
        self.get_entry(section, key).and_then(ConfigEntry::value)
    }

    fn has_section(&self, section: &str) -> bool {
        self.iter().any(|e| e.section == section)
    }

    fn sections(&self) -> Vec<&str> {
        self.iter().map(|e| e.section.as_str()).unique().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_single_line() {
        assert!(is_single_line("neutron.agent.firewall.NoopFirewallDriver"));
        assert!(is_single_line(""));
        assert!(!is_single_line("noop\n[DEFAULT]\ncore_plugin = evil"));
        assert!(!is_single_line("odl_v2\r"));
        assert!(!is_single_line("tab\tseparated"));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(ConfigValue::from(true).to_string(), "true");
        assert_eq!(ConfigValue::from(9000u32).to_string(), "9000");
        assert_eq!(ConfigValue::from("odl_v2").to_string(), "odl_v2");
        assert_eq!(
            ConfigValue::list(["local", "flat", "vlan"]).to_string(),
            "local,flat,vlan"
        );
    }

    #[test]
    fn test_list_entry_empty_is_absent() {
        let entry = ConfigEntry::list("ml2", "physical_network_mtus", Vec::<String>::new());
        assert!(entry.is_absent());

        let entry = ConfigEntry::list("ml2", "physical_network_mtus", ["physnet1:9000"]);
        assert_eq!(
            entry.value(),
            Some(&ConfigValue::List(vec!["physnet1:9000".to_string()]))
        );
    }

    #[test]
    fn test_optional_entry() {
        assert!(ConfigEntry::optional::<u8>("ml2", "overlay_ip_version", None).is_absent());
        assert_eq!(
            ConfigEntry::optional("ml2", "overlay_ip_version", Some(4u8)).to_string(),
            "ml2/overlay_ip_version = 4"
        );
    }

    #[test]
    fn test_entries_ext() {
        let entries = vec![
            ConfigEntry::set("ml2", "type_drivers", ConfigValue::list(["vlan"])),
            ConfigEntry::absent("ml2", "extension_drivers"),
            ConfigEntry::set("securitygroup", "enable_security_group", true),
        ];

        assert_eq!(
            entries.get_value("ml2", "type_drivers").map(ToString::to_string),
            Some("vlan".to_string())
        );
        assert!(entries.get_entry("ml2", "extension_drivers").unwrap().is_absent());
        assert_eq!(entries.get_value("ml2", "extension_drivers"), None);
        assert!(entries.get_entry("ml2", "nonexistent").is_none());
        assert!(entries.has_section("securitygroup"));
        assert!(!entries.has_section("ml2_sriov"));
        assert_eq!(entries.sections(), vec!["ml2", "securitygroup"]);
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(ConfigValue::from(6u8).as_int(), Some(6));
        assert_eq!(ConfigValue::from(false).as_bool(), Some(false));
        assert_eq!(ConfigValue::from("x").as_str(), Some("x"));
        assert_eq!(ConfigValue::from("x").to_list(), vec!["x".to_string()]);
        assert_eq!(ConfigValue::from(true).as_int(), None);
    }
}
