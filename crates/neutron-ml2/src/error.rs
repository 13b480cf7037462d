//! Hard validation failures for ML2 parameters.
//!
//! Messages keep the wording operators already grep for, e.g.
//! "vlan id are invalid." or "tunnel id ranges are to large.".

use neutron_types::ParseError;
use thiserror::Error;

use crate::bounds::{Bounds, NetworkType, RangeKind};

/// Result type alias for ML2 validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Errors that abort ML2 validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `overlay_ip_version` is neither 4 nor 6.
    #[error("overlay_ip_version {version} is invalid, it must be 4 or 6.")]
    InvalidOverlayIpVersion {
        /// The rejected version.
        version: i64,
    },

    /// A value would not fit on a single config line.
    #[error("{option} value {value:?} contains control characters.")]
    InvalidCharacters {
        /// The parameter holding the value.
        option: &'static str,
        /// The rejected value.
        value: String,
    },

    /// A range token does not match `int:int`.
    #[error("{} ('{token}': {source})", .kind.invalid_message())]
    InvalidRangeSyntax {
        /// Which range parameter the token belongs to.
        kind: RangeKind,
        /// The offending token.
        token: String,
        /// Why the token could not be parsed.
        #[source]
        source: ParseError,
    },

    /// The low end of a range is above its high end.
    #[error("{} ('{token}' starts above its end)", .kind.invalid_message())]
    InvertedRange {
        /// Which range parameter the token belongs to.
        kind: RangeKind,
        /// The offending token.
        token: String,
    },

    /// A range lies outside the id space of its network type.
    #[error("{} ('{token}' is outside {bounds} for {network_type})", .kind.out_of_bounds_message())]
    RangeOutOfBounds {
        /// Which range parameter the token belongs to.
        kind: RangeKind,
        /// Network type whose bounds were violated.
        network_type: NetworkType,
        /// The violated bounds.
        bounds: Bounds,
        /// The offending token.
        token: String,
    },

    /// `vxlan_group` is not an IPv4 multicast address.
    #[error("{value} is not valid for vxlan_group.")]
    InvalidMulticastAddress {
        /// The rejected value.
        value: String,
    },

    /// A `physical_network_mtus` entry is not `name:positive-integer`.
    #[error("physical_network_mtus entry '{entry}' is invalid.")]
    InvalidMtuEntry {
        /// The offending entry.
        entry: String,
        /// Why the entry could not be parsed.
        #[source]
        source: ParseError,
    },
}

impl ValidationError {
    /// Creates a range syntax error.
    pub fn range_syntax(kind: RangeKind, token: impl Into<String>, source: ParseError) -> Self {
        Self::InvalidRangeSyntax {
            kind,
            token: token.into(),
            source,
        }
    }

    /// Creates an inverted range error.
    pub fn inverted_range(kind: RangeKind, token: impl Into<String>) -> Self {
        Self::InvertedRange {
            kind,
            token: token.into(),
        }
    }

    /// Creates an out of bounds error for a range used by `network_type`.
    pub fn out_of_bounds(
        kind: RangeKind,
        network_type: NetworkType,
        bounds: Bounds,
        token: impl Into<String>,
    ) -> Self {
        Self::RangeOutOfBounds {
            kind,
            network_type,
            bounds,
            token: token.into(),
        }
    }

    /// Returns the range parameter the error is about, if any.
    pub fn range_kind(&self) -> Option<RangeKind> {
        match self {
            ValidationError::InvalidRangeSyntax { kind, .. }
            | ValidationError::InvertedRange { kind, .. }
            | ValidationError::RangeOutOfBounds { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::BOUNDS;

    #[test]
    fn test_out_of_bounds_display() {
        let err = ValidationError::out_of_bounds(
            RangeKind::VlanId,
            NetworkType::Vlan,
            BOUNDS.vlan_id,
            "400:4099",
        );
        assert_eq!(
            err.to_string(),
            "vlan id are invalid. ('400:4099' is outside 1..=4094 for vlan)"
        );
    }

    #[test]
    fn test_tunnel_too_large_display() {
        let err = ValidationError::out_of_bounds(
            RangeKind::TunnelId,
            NetworkType::Gre,
            BOUNDS.tunnel_id,
            "40:100000000",
        );
        assert!(err.to_string().contains("tunnel id ranges are to large."));
        assert!(err.to_string().contains("for gre"));
    }

    #[test]
    fn test_inverted_display() {
        let err = ValidationError::inverted_range(RangeKind::VlanId, "2938:1");
        assert!(err.to_string().contains("vlan ranges are invalid."));
        assert_eq!(err.range_kind(), Some(RangeKind::VlanId));
    }

    #[test]
    fn test_multicast_display() {
        let err = ValidationError::InvalidMulticastAddress {
            value: "192.1.1.1".to_string(),
        };
        assert_eq!(err.to_string(), "192.1.1.1 is not valid for vxlan_group.");
        assert_eq!(err.range_kind(), None);
    }

    #[test]
    fn test_invalid_characters_display() {
        let err = ValidationError::InvalidCharacters {
            option: "firewall_driver",
            value: "noop\n[DEFAULT]".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "firewall_driver value \"noop\\n[DEFAULT]\" contains control characters."
        );
    }

    #[test]
    fn test_range_syntax_has_source() {
        use std::error::Error;

        let err = ValidationError::range_syntax(RangeKind::Vni, "abc", ParseError::EmptyToken);
        assert!(err.to_string().starts_with("vni ranges are invalid."));
        assert!(err.source().is_some());
    }
}
