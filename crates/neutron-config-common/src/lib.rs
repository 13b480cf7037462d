//! Common infrastructure for Neutron configuration generators.
//!
//! This crate provides the pieces shared by the ML2 and SFC generators:
//!
//! - [`entry`]: `section/key -> value` entries with explicit absence
//! - [`registry`]: static table of known driver names per backend
//! - [`report`]: two-tier validation result (error or model, plus warnings)
//! - [`ConfigGenerator`]: validate-then-emit trait implemented per service
//! - [`output`]: INI rendering and file output for the emitted entries
//! - [`overrides`]: YAML parameter overrides merged onto defaults
//! - [`cli`] and [`logging`]: output and tracing setup for the binaries
//!
//! # Example
//!
//! ```ignore
//! use neutron_config_common::{ConfigGenerator, output};
//!
//! let generated = generator.generate(&params)?;
//! output::write_ini(generator.config_path(), &generated.entries)?;
//! ```

pub mod cli;
pub mod entry;
pub mod error;
pub mod generator;
pub mod logging;
pub mod output;
pub mod overrides;
pub mod registry;
pub mod report;

// Re-export commonly used items at crate root
pub use entry::{is_single_line, ConfigEntry, ConfigEntriesExt, ConfigValue, Presence};
pub use error::{ConfigError, ConfigResult};
pub use generator::{ConfigGenerator, Generated};
pub use logging::init_logging;
pub use registry::{DriverKind, DriverRegistry, DRIVER_REGISTRY};
pub use report::{ReportBuilder, ValidationReport, ValidationWarning};
