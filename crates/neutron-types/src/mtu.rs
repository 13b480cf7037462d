//! Per physical network MTU entries.

use crate::range::RANGE_SEPARATOR;
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A `physnet:mtu` pair from `physical_network_mtus`.
///
/// The MTU must be a positive integer and the physnet name non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhysnetMtu {
    physnet: String,
    mtu: u32,
}

impl PhysnetMtu {
    pub fn new(physnet: impl Into<String>, mtu: u32) -> Result<Self, ParseError> {
        let physnet = physnet.into();
        if physnet.is_empty() || mtu == 0 {
            return Err(ParseError::InvalidPhysnetMtu(format!(
                "{}{}{}",
                physnet, RANGE_SEPARATOR, mtu
            )));
        }
        Ok(Self { physnet, mtu })
    }

    pub fn physnet(&self) -> &str {
        &self.physnet
    }

    pub fn mtu(&self) -> u32 {
        self.mtu
    }
}

impl fmt::Display for PhysnetMtu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.physnet, RANGE_SEPARATOR, self.mtu)
    }
}

impl FromStr for PhysnetMtu {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidPhysnetMtu(s.to_string());

        let (physnet, mtu) = s.trim().split_once(RANGE_SEPARATOR).ok_or_else(invalid)?;
        if physnet.is_empty() || mtu.is_empty() || !mtu.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let mtu: u32 = mtu.parse().map_err(|_| invalid())?;

        PhysnetMtu::new(physnet, mtu).map_err(|_| invalid())
    }
}

impl TryFrom<String> for PhysnetMtu {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PhysnetMtu> for String {
    fn from(entry: PhysnetMtu) -> String {
        entry.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_physnet_mtu() {
        let entry: PhysnetMtu = "physnet1:9000".parse().unwrap();
        assert_eq!(entry.physnet(), "physnet1");
        assert_eq!(entry.mtu(), 9000);
        assert_eq!(entry.to_string(), "physnet1:9000");
    }

    #[test]
    fn test_invalid_physnet_mtu() {
        for bad in ["physnet1", "physnet1:", ":9000", "physnet1:0", "physnet1:-1", "a:b:1", "physnet1:9k"] {
            assert!(bad.parse::<PhysnetMtu>().is_err(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_new_rejects_zero_mtu() {
        assert!(PhysnetMtu::new("physnet1", 0).is_err());
        assert!(PhysnetMtu::new("", 1500).is_err());
    }
}
