//! Typed primitives for Neutron ML2 configuration.
//!
//! This crate provides parsed, type-safe forms of the string tokens that
//! appear in ML2 plugin parameters:
//!
//! - [`NumericRange`]: `low:high` id ranges (tunnel ids, VNIs, VLAN ids)
//! - [`VlanRangeSpec`]: VLAN ranges with an optional physical network prefix
//! - [`MulticastGroup`]: IPv4 multicast group used by VXLAN
//! - [`IpVersion`]: overlay IP version (4 or 6)
//! - [`PhysnetMtu`]: `physnet:mtu` pairs
//!
//! Parsing here is purely syntactic. Bound checks depend on the network
//! type and live with the validator.

mod ip;
mod mtu;
mod range;

pub use ip::{IpVersion, MulticastGroup};
pub use mtu::PhysnetMtu;
pub use range::{parse_range, parse_vlan_range, NumericRange, VlanRangeSpec, RANGE_SEPARATOR};

/// Common error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty range token")]
    EmptyToken,

    #[error("missing ':' separator in range token: {0}")]
    MissingSeparator(String),

    #[error("too many ':' separators in range token: {0}")]
    TooManySeparators(String),

    #[error("non-numeric range component '{component}' in token: {token}")]
    NonNumeric { token: String, component: String },

    #[error("invalid multicast group: {0}")]
    InvalidMulticastGroup(String),

    #[error("invalid IP version: {0} (must be 4 or 6)")]
    InvalidIpVersion(u8),

    #[error("invalid physical network MTU entry: {0}")]
    InvalidPhysnetMtu(String),
}
