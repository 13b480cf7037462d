//! networking-sfc configuration generator
//!
//! Validates the port chain and flow classifier driver selections and
//! renders them as `networking_sfc.conf` entries:
//! - `sfc_driver` → `[sfc] drivers`
//! - `fc_driver` → `[flowclassifier] drivers`
//!
//! Unknown driver names only produce warnings; unset lists leave the
//! platform default in place.

mod error;
mod params;
mod service;
pub mod tables;

pub use error::{SfcError, SfcResult};
pub use params::{SfcModel, SfcParameters};
pub use service::SfcService;
