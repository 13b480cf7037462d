//! Output handling shared by the generator binaries.

use std::io::{self, Write};
use std::path::Path;

use clap::ValueEnum;
use tracing::info;

use crate::entry::ConfigEntry;
use crate::error::{ConfigError, ConfigResult};
use crate::output::{render_ini, render_json, write_ini};

/// Format of the generated configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// INI text, absent keys omitted.
    #[default]
    Ini,
    /// JSON array of entries, absent keys included.
    Json,
}

/// Writes entries to `output`, or to stdout when no path is given.
pub fn write_entries(
    entries: &[ConfigEntry],
    format: OutputFormat,
    output: Option<&Path>,
) -> ConfigResult<()> {
    match (format, output) {
        (OutputFormat::Ini, Some(path)) => write_ini(path, entries)?,
        (OutputFormat::Json, Some(path)) => {
            let text = render_json(entries).map_err(|e| {
                ConfigError::write(path, io::Error::new(io::ErrorKind::InvalidData, e))
            })?;
            std::fs::write(path, text).map_err(|e| ConfigError::write(path, e))?;
        }
        (format, None) => {
            let text = match format {
                OutputFormat::Ini => render_ini(entries),
                OutputFormat::Json => render_json(entries).map_err(|e| {
                    ConfigError::write("<stdout>", io::Error::new(io::ErrorKind::InvalidData, e))
                })?,
            };
            io::stdout()
                .lock()
                .write_all(text.as_bytes())
                .map_err(|e| ConfigError::write("<stdout>", e))?;
        }
    }

    if let Some(path) = output {
        info!("Configuration written to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::ConfigValue;

    #[test]
    fn test_write_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        let entries = vec![ConfigEntry::set("sfc", "drivers", ConfigValue::list(["odl_v2"]))];

        write_entries(&entries, OutputFormat::Json, Some(&path)).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"odl_v2\""));
    }

    #[test]
    fn test_write_ini_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("networking_sfc.conf");
        let entries = vec![ConfigEntry::set("sfc", "drivers", ConfigValue::list(["odl_v2"]))];

        write_entries(&entries, OutputFormat::Ini, Some(&path)).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[sfc]\ndrivers = odl_v2\n"
        );
    }
}
