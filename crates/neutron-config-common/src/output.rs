//! Rendering emitted entries into INI text.
//!
//! Sections are written in the order they first appear in the entry list.
//! Absent entries produce no line; a section whose entries are all absent
//! produces no header either.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::entry::{ConfigEntriesExt, ConfigEntry, Presence};
use crate::error::{ConfigError, ConfigResult};

/// Renders entries as an INI document.
pub fn render_ini(entries: &[ConfigEntry]) -> String {
    let mut out = String::new();

    for section in entries.sections() {
        let lines: Vec<String> = entries
            .iter()
            .filter(|e| e.section == section)
            .filter_map(|e| match &e.presence {
                Presence::Set(value) => Some(format!("{} = {}", e.key, value)),
                Presence::Absent => None,
            })
            .collect();

        if lines.is_empty() {
            continue;
        }

        if !out.is_empty() {
            out.push('\n');
        }
        // Writing into a String cannot fail
        let _ = writeln!(out, "[{}]", section);
        for line in lines {
            let _ = writeln!(out, "{}", line);
        }
    }

    out
}

/// Renders entries as pretty-printed JSON, absent entries included.
pub fn render_json(entries: &[ConfigEntry]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entries)
}

/// Writes entries to `path` as INI text, replacing any existing file.
pub fn write_ini(path: impl AsRef<Path>, entries: &[ConfigEntry]) -> ConfigResult<()> {
    let path = path.as_ref();
    let text = render_ini(entries);
    fs::write(path, text).map_err(|e| ConfigError::write(path, e))?;
    debug!("wrote {} entries to {}", entries.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::ConfigValue;
    use pretty_assertions::assert_eq;

    fn sample_entries() -> Vec<ConfigEntry> {
        vec![
            ConfigEntry::set("ml2", "type_drivers", ConfigValue::list(["vlan", "vxlan"])),
            ConfigEntry::absent("ml2", "extension_drivers"),
            ConfigEntry::set("ml2", "path_mtu", 0u32),
            ConfigEntry::absent("securitygroup", "firewall_driver"),
            ConfigEntry::set("ml2_type_vlan", "network_vlan_ranges", ConfigValue::list(["10:50"])),
        ]
    }

    #[test]
    fn test_render_ini() {
        let text = render_ini(&sample_entries());
        assert_eq!(
            text,
            "[ml2]\n\
             type_drivers = vlan,vxlan\n\
             path_mtu = 0\n\
             \n\
             [ml2_type_vlan]\n\
             network_vlan_ranges = 10:50\n"
        );
    }

    #[test]
    fn test_render_ini_empty() {
        assert_eq!(render_ini(&[]), "");
    }

    #[test]
    fn test_render_json_includes_absent() {
        let json = render_json(&sample_entries()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[1]["key"], "extension_drivers");
        assert_eq!(value[1]["presence"], "absent");
        assert_eq!(value[2]["presence"], "set");
        assert_eq!(value[2]["value"], 0);
    }

    #[test]
    fn test_write_ini() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ml2_conf.ini");
        write_ini(&path, &sample_entries()).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[ml2]\n"));
    }

    #[test]
    fn test_write_ini_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("ml2_conf.ini");
        let err = write_ini(&path, &sample_entries()).unwrap_err();
        assert!(matches!(err, ConfigError::Write { .. }));
    }
}
