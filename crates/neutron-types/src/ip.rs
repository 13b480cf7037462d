//! Overlay IP version and VXLAN multicast group types.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// IP version used for overlay (tunnel endpoint) addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum IpVersion {
    V4,
    V6,
}

impl IpVersion {
    pub const fn as_u8(&self) -> u8 {
        match self {
            IpVersion::V4 => 4,
            IpVersion::V6 => 6,
        }
    }
}

impl TryFrom<u8> for IpVersion {
    type Error = ParseError;

    fn try_from(version: u8) -> Result<Self, Self::Error> {
        match version {
            4 => Ok(IpVersion::V4),
            6 => Ok(IpVersion::V6),
            other => Err(ParseError::InvalidIpVersion(other)),
        }
    }
}

impl From<IpVersion> for u8 {
    fn from(version: IpVersion) -> u8 {
        version.as_u8()
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// IPv4 multicast group (224.0.0.0/4) for VXLAN broadcast emulation.
///
/// A plain address (`224.0.0.1`) or a CIDR block inside the multicast
/// range (`239.1.0.0/16`) is accepted.
///
/// # Examples
///
/// ```
/// use neutron_types::MulticastGroup;
///
/// let group: MulticastGroup = "224.1.1.1".parse().unwrap();
/// assert_eq!(group.to_string(), "224.1.1.1");
///
/// assert!("239.1.0.0/16".parse::<MulticastGroup>().is_ok());
/// assert!("192.1.1.1".parse::<MulticastGroup>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MulticastGroup {
    addr: Ipv4Addr,
    prefix_len: Option<u8>,
}

impl MulticastGroup {
    /// Shortest prefix that still stays inside 224.0.0.0/4.
    pub const MIN_PREFIX_LEN: u8 = 4;

    pub const fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub const fn prefix_len(&self) -> Option<u8> {
        self.prefix_len
    }
}

impl fmt::Display for MulticastGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.prefix_len {
            Some(len) => write!(f, "{}/{}", self.addr, len),
            None => write!(f, "{}", self.addr),
        }
    }
}

impl FromStr for MulticastGroup {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidMulticastGroup(s.to_string());

        let (addr_str, prefix_len) = match s.trim().split_once('/') {
            Some((addr, len)) => {
                let len: u8 = len.parse().map_err(|_| invalid())?;
                if !(Self::MIN_PREFIX_LEN..=32).contains(&len) {
                    return Err(invalid());
                }
                (addr, Some(len))
            }
            None => (s.trim(), None),
        };

        let addr: Ipv4Addr = addr_str.parse().map_err(|_| invalid())?;
        if !addr.is_multicast() {
            return Err(invalid());
        }

        Ok(MulticastGroup { addr, prefix_len })
    }
}

impl TryFrom<String> for MulticastGroup {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<MulticastGroup> for String {
    fn from(group: MulticastGroup) -> String {
        group.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ip_version() {
        assert_eq!(IpVersion::try_from(4).unwrap(), IpVersion::V4);
        assert_eq!(IpVersion::try_from(6).unwrap(), IpVersion::V6);
        assert_eq!(
            IpVersion::try_from(10),
            Err(ParseError::InvalidIpVersion(10))
        );
        assert_eq!(IpVersion::V6.to_string(), "6");
    }

    #[test]
    fn test_multicast_block_edges() {
        assert!("224.0.0.0".parse::<MulticastGroup>().is_ok());
        assert!("239.255.255.255".parse::<MulticastGroup>().is_ok());
        assert!("223.255.255.255".parse::<MulticastGroup>().is_err());
        assert!("240.0.0.0".parse::<MulticastGroup>().is_err());
    }

    #[test]
    fn test_multicast_rejects_unicast_and_garbage() {
        assert_eq!(
            "192.1.1.1".parse::<MulticastGroup>(),
            Err(ParseError::InvalidMulticastGroup("192.1.1.1".to_string()))
        );
        assert!("".parse::<MulticastGroup>().is_err());
        assert!("ff02::1".parse::<MulticastGroup>().is_err());
        assert!("224.0.0.1/3".parse::<MulticastGroup>().is_err());
        assert!("224.0.0.1/33".parse::<MulticastGroup>().is_err());
    }

    #[test]
    fn test_multicast_cidr() {
        let group: MulticastGroup = "239.1.0.0/16".parse().unwrap();
        assert_eq!(group.prefix_len(), Some(16));
        assert_eq!(group.addr(), Ipv4Addr::new(239, 1, 0, 0));
        assert_eq!(group.to_string(), "239.1.0.0/16");
    }
}
