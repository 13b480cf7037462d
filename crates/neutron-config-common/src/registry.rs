//! Known driver identifiers per driver kind.
//!
//! The registry is built once on first use and only read afterwards, so it
//! can be shared between validations running on different threads.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Global driver registry.
pub static DRIVER_REGISTRY: Lazy<DriverRegistry> = Lazy::new(DriverRegistry::builtin);

/// ML2 type drivers (network encapsulations).
const TYPE_DRIVERS: &[&str] = &["local", "flat", "vlan", "gre", "vxlan", "geneve"];

/// ML2 mechanism drivers.
const MECHANISM_DRIVERS: &[&str] = &[
    "openvswitch",
    "linuxbridge",
    "sriovnicswitch",
    "macvtap",
    "l2population",
    "ovn",
    "opendaylight",
    "opendaylight_v2",
    "baremetal",
    "arista",
    "cisco_nexus",
    "fake_agent",
];

/// ML2 extension drivers.
const EXTENSION_DRIVERS: &[&str] = &[
    "port_security",
    "qos",
    "dns",
    "dns_domain_ports",
    "data_plane_status",
    "uplink_status_propagation",
    "subnet_dns_publish_fixed_ip",
];

/// networking-sfc port chain drivers.
const SFC_DRIVERS: &[&str] = &["ovs", "odl", "odl_v2", "dummy"];

/// networking-sfc flow classifier drivers.
const FLOW_CLASSIFIER_DRIVERS: &[&str] = &["ovs", "odl", "odl_v2", "dummy"];

/// Category of driver name being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverKind {
    TypeDriver,
    MechanismDriver,
    ExtensionDriver,
    SfcDriver,
    FlowClassifierDriver,
}

impl DriverKind {
    pub const ALL: [DriverKind; 5] = [
        DriverKind::TypeDriver,
        DriverKind::MechanismDriver,
        DriverKind::ExtensionDriver,
        DriverKind::SfcDriver,
        DriverKind::FlowClassifierDriver,
    ];

    /// Parameter-style name, as used in warning messages.
    pub const fn as_str(&self) -> &'static str {
        match self {
            DriverKind::TypeDriver => "type_driver",
            DriverKind::MechanismDriver => "mechanism_driver",
            DriverKind::ExtensionDriver => "extension_driver",
            DriverKind::SfcDriver => "sfc_driver",
            DriverKind::FlowClassifierDriver => "fc_driver",
        }
    }

    /// Driver names shipped with Neutron and networking-sfc for this kind.
    const fn builtin_names(&self) -> &'static [&'static str] {
        match self {
            DriverKind::TypeDriver => TYPE_DRIVERS,
            DriverKind::MechanismDriver => MECHANISM_DRIVERS,
            DriverKind::ExtensionDriver => EXTENSION_DRIVERS,
            DriverKind::SfcDriver => SFC_DRIVERS,
            DriverKind::FlowClassifierDriver => FLOW_CLASSIFIER_DRIVERS,
        }
    }
}

impl fmt::Display for DriverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of valid driver names for each [`DriverKind`].
#[derive(Debug, Clone)]
pub struct DriverRegistry {
    known: HashMap<DriverKind, HashSet<&'static str>>,
}

impl DriverRegistry {
    /// Builds the registry of drivers shipped with Neutron and networking-sfc.
    pub fn builtin() -> Self {
        Self {
            known: DriverKind::ALL
                .into_iter()
                .map(|kind| (kind, kind.builtin_names().iter().copied().collect()))
                .collect(),
        }
    }

    /// Returns true if `name` is a known driver of `kind`.
    pub fn is_known(&self, kind: DriverKind, name: &str) -> bool {
        self.known
            .get(&kind)
            .is_some_and(|names| names.contains(name))
    }

    /// Returns the names in `names` that are not known drivers of `kind`,
    /// in input order.
    pub fn unknown<'a>(&self, kind: DriverKind, names: &'a [String]) -> Vec<&'a str> {
        names
            .iter()
            .map(String::as_str)
            .filter(|name| !self.is_known(kind, name))
            .collect()
    }

    /// Known names for `kind`, sorted.
    pub fn names(&self, kind: DriverKind) -> Vec<&'static str> {
        let mut names: Vec<_> = self
            .known
            .get(&kind)
            .map(|names| names.iter().copied().collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_type_drivers() {
        for name in ["local", "flat", "vlan", "gre", "vxlan", "geneve"] {
            assert!(DRIVER_REGISTRY.is_known(DriverKind::TypeDriver, name));
        }
        assert!(!DRIVER_REGISTRY.is_known(DriverKind::TypeDriver, "foobar"));
        assert!(!DRIVER_REGISTRY.is_known(DriverKind::TypeDriver, "VLAN"));
    }

    #[test]
    fn test_kinds_are_separate() {
        assert!(DRIVER_REGISTRY.is_known(DriverKind::MechanismDriver, "openvswitch"));
        assert!(!DRIVER_REGISTRY.is_known(DriverKind::TypeDriver, "openvswitch"));
        assert!(DRIVER_REGISTRY.is_known(DriverKind::SfcDriver, "odl_v2"));
        assert!(DRIVER_REGISTRY.is_known(DriverKind::ExtensionDriver, "qos"));
    }

    #[test]
    fn test_unknown_keeps_input_order() {
        let names = vec![
            "zeta".to_string(),
            "vlan".to_string(),
            "alpha".to_string(),
        ];
        assert_eq!(
            DRIVER_REGISTRY.unknown(DriverKind::TypeDriver, &names),
            vec!["zeta", "alpha"]
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(DriverKind::TypeDriver.to_string(), "type_driver");
        assert_eq!(DriverKind::FlowClassifierDriver.as_str(), "fc_driver");
        for kind in DriverKind::ALL {
            assert!(!DRIVER_REGISTRY.names(kind).is_empty());
        }
    }

    #[test]
    fn test_names_sorted() {
        assert_eq!(
            DRIVER_REGISTRY.names(DriverKind::SfcDriver),
            vec!["dummy", "odl", "odl_v2", "ovs"]
        );
    }
}
