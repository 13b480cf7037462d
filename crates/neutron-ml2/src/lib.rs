//! neutron-ml2 - ML2 plugin configuration generator
//!
//! Validates ML2 networking parameters (driver lists, id ranges, multicast
//! group, MTUs) and turns them into ordered `ml2_conf.ini` entries.

mod bounds;
mod emitter;
mod error;
mod model;
mod params;
mod plugin;
mod tables;
mod validator;

pub use bounds::*;
pub use emitter::emit;
pub use error::*;
pub use model::*;
pub use params::*;
pub use plugin::Ml2Plugin;
pub use tables::*;
pub use validator::{validate, Validator};
