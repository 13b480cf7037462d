//! ML2 plugin parameters as supplied by the caller.
//!
//! `ParameterSet::default()` carries the documented defaults; deserializing
//! a partial YAML document merges its keys onto them. List parameters accept
//! either a sequence or a single comma-separated string (`"10:50"`, `""`);
//! integer parameters accept quoted numbers (`'9000'`).

use serde::{Deserialize, Serialize};

use neutron_config_common::overrides::{one_or_many, optional_number, optional_one_or_many};
use neutron_config_common::{ConfigEntry, ConfigValue};

use crate::tables::{keys, SECTION_ML2, SECTION_SECURITYGROUP, SECTION_SRIOV};
use crate::tables::{
    SECTION_TYPE_FLAT, SECTION_TYPE_GENEVE, SECTION_TYPE_GRE, SECTION_TYPE_VLAN,
    SECTION_TYPE_VXLAN,
};

/// Default type drivers and tenant network types
pub const DEFAULT_TYPE_DRIVERS: [&str; 5] = ["local", "flat", "vlan", "gre", "vxlan"];

/// Default mechanism drivers
pub const DEFAULT_MECHANISM_DRIVERS: [&str; 2] = ["openvswitch", "linuxbridge"];

/// Wildcard that allows flat networks on any physnet
pub const FLAT_NETWORKS_WILDCARD: &str = "*";

pub const DEFAULT_NETWORK_VLAN_RANGES: &str = "10:50";
pub const DEFAULT_TUNNEL_ID_RANGES: &str = "20:100";
pub const DEFAULT_VNI_RANGES: &str = "10:100";
pub const DEFAULT_VXLAN_GROUP: &str = "224.0.0.1";
pub const DEFAULT_PATH_MTU: u32 = 0;

/// Default SR-IOV NICs (Mellanox ConnectX-3, Intel 82599 VF)
pub const DEFAULT_PCI_VENDOR_DEVS: [&str; 2] = ["15b3:1004", "8086:10ca"];

/// User-supplied ML2 parameters, merged with defaults.
///
/// `None` means "not set": the platform default applies and no line is
/// written for the option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    /// Core plugin class, only logged.
    pub core_plugin: Option<String>,

    #[serde(deserialize_with = "one_or_many")]
    pub type_drivers: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub tenant_network_types: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub mechanism_drivers: Vec<String>,
    #[serde(deserialize_with = "optional_one_or_many")]
    pub extension_drivers: Option<Vec<String>>,

    #[serde(deserialize_with = "one_or_many")]
    pub flat_networks: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub network_vlan_ranges: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub tunnel_id_ranges: Vec<String>,
    /// Shared by VXLAN and GENEVE.
    #[serde(deserialize_with = "one_or_many")]
    pub vni_ranges: Vec<String>,
    pub vxlan_group: Option<String>,
    /// GENEVE only.
    #[serde(deserialize_with = "optional_number")]
    pub max_header_size: Option<u32>,

    #[serde(deserialize_with = "optional_number")]
    pub path_mtu: Option<u32>,
    #[serde(deserialize_with = "one_or_many")]
    pub physical_network_mtus: Vec<String>,
    /// Any integer is accepted here; only 4 and 6 pass validation.
    #[serde(deserialize_with = "optional_number")]
    pub overlay_ip_version: Option<i64>,

    pub enable_security_group: Option<bool>,
    pub firewall_driver: Option<String>,

    /// SR-IOV mechanism driver only.
    #[serde(deserialize_with = "optional_one_or_many")]
    pub supported_pci_vendor_devs: Option<Vec<String>>,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            core_plugin: None,
            type_drivers: to_strings(&DEFAULT_TYPE_DRIVERS),
            tenant_network_types: to_strings(&DEFAULT_TYPE_DRIVERS),
            mechanism_drivers: to_strings(&DEFAULT_MECHANISM_DRIVERS),
            extension_drivers: None,
            flat_networks: vec![FLAT_NETWORKS_WILDCARD.to_string()],
            network_vlan_ranges: vec![DEFAULT_NETWORK_VLAN_RANGES.to_string()],
            tunnel_id_ranges: vec![DEFAULT_TUNNEL_ID_RANGES.to_string()],
            vni_ranges: vec![DEFAULT_VNI_RANGES.to_string()],
            vxlan_group: Some(DEFAULT_VXLAN_GROUP.to_string()),
            max_header_size: None,
            path_mtu: Some(DEFAULT_PATH_MTU),
            physical_network_mtus: Vec::new(),
            overlay_ip_version: None,
            enable_security_group: None,
            firewall_driver: None,
            supported_pci_vendor_devs: Some(to_strings(&DEFAULT_PCI_VENDOR_DEVS)),
        }
    }
}

impl ParameterSet {
    /// A parameter set with every option unset and every list empty.
    pub fn empty() -> Self {
        Self {
            core_plugin: None,
            type_drivers: Vec::new(),
            tenant_network_types: Vec::new(),
            mechanism_drivers: Vec::new(),
            extension_drivers: None,
            flat_networks: Vec::new(),
            network_vlan_ranges: Vec::new(),
            tunnel_id_ranges: Vec::new(),
            vni_ranges: Vec::new(),
            vxlan_group: None,
            max_header_size: None,
            path_mtu: None,
            physical_network_mtus: Vec::new(),
            overlay_ip_version: None,
            enable_security_group: None,
            firewall_driver: None,
            supported_pci_vendor_devs: None,
        }
    }

    /// Rebuilds parameters from emitted entries.
    ///
    /// Keys that are absent or missing stay unset. When VXLAN and GENEVE both
    /// carry `vni_ranges` the VXLAN value is used; the emitter writes the
    /// same list to both sections.
    pub fn from_entries(entries: &[ConfigEntry]) -> Self {
        let mut params = Self::empty();

        for entry in entries {
            let Some(value) = entry.value() else {
                continue;
            };

            match (entry.section.as_str(), entry.key.as_str()) {
                (SECTION_ML2, keys::TYPE_DRIVERS) => params.type_drivers = value.to_list(),
                (SECTION_ML2, keys::TENANT_NETWORK_TYPES) => {
                    params.tenant_network_types = value.to_list()
                }
                (SECTION_ML2, keys::MECHANISM_DRIVERS) => {
                    params.mechanism_drivers = value.to_list()
                }
                (SECTION_ML2, keys::EXTENSION_DRIVERS) => {
                    params.extension_drivers = Some(value.to_list())
                }
                (SECTION_ML2, keys::PATH_MTU) => params.path_mtu = int_value(value),
                (SECTION_ML2, keys::PHYSICAL_NETWORK_MTUS) => {
                    params.physical_network_mtus = value.to_list()
                }
                (SECTION_ML2, keys::OVERLAY_IP_VERSION) => {
                    params.overlay_ip_version = int_value(value)
                }
                (SECTION_TYPE_FLAT, keys::FLAT_NETWORKS) => params.flat_networks = value.to_list(),
                (SECTION_TYPE_VLAN, keys::NETWORK_VLAN_RANGES) => {
                    params.network_vlan_ranges = value.to_list()
                }
                (SECTION_TYPE_GRE, keys::TUNNEL_ID_RANGES) => {
                    params.tunnel_id_ranges = value.to_list()
                }
                (SECTION_TYPE_VXLAN, keys::VNI_RANGES) => params.vni_ranges = value.to_list(),
                (SECTION_TYPE_GENEVE, keys::VNI_RANGES) if params.vni_ranges.is_empty() => {
                    params.vni_ranges = value.to_list()
                }
                (SECTION_TYPE_VXLAN, keys::VXLAN_GROUP) => params.vxlan_group = Some(value.to_string()),
                (SECTION_TYPE_GENEVE, keys::MAX_HEADER_SIZE) => {
                    params.max_header_size = int_value(value)
                }
                (SECTION_SRIOV, keys::SUPPORTED_PCI_VENDOR_DEVS) => {
                    params.supported_pci_vendor_devs = Some(value.to_list())
                }
                (SECTION_SECURITYGROUP, keys::ENABLE_SECURITY_GROUP) => {
                    params.enable_security_group = value.as_bool()
                }
                (SECTION_SECURITYGROUP, keys::FIREWALL_DRIVER) => {
                    params.firewall_driver = Some(value.to_string())
                }
                _ => {}
            }
        }

        params
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn int_value<T: TryFrom<i64>>(value: &ConfigValue) -> Option<T> {
    value.as_int().and_then(|i| T::try_from(i).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use neutron_config_common::overrides::{from_yaml_str, INLINE_ORIGIN};
    use pretty_assertions::assert_eq;

    fn parse(yaml: &str) -> ParameterSet {
        from_yaml_str(yaml, INLINE_ORIGIN).unwrap()
    }

    #[test]
    fn test_defaults() {
        let params = ParameterSet::default();
        assert_eq!(params.type_drivers, vec!["local", "flat", "vlan", "gre", "vxlan"]);
        assert_eq!(params.tenant_network_types, params.type_drivers);
        assert_eq!(params.mechanism_drivers, vec!["openvswitch", "linuxbridge"]);
        assert_eq!(params.flat_networks, vec!["*"]);
        assert_eq!(params.network_vlan_ranges, vec!["10:50"]);
        assert_eq!(params.tunnel_id_ranges, vec!["20:100"]);
        assert_eq!(params.vni_ranges, vec!["10:100"]);
        assert_eq!(params.vxlan_group.as_deref(), Some("224.0.0.1"));
        assert_eq!(params.path_mtu, Some(0));
        assert!(params.physical_network_mtus.is_empty());
        assert_eq!(params.extension_drivers, None);
        assert_eq!(params.overlay_ip_version, None);
    }

    #[test]
    fn test_yaml_overrides_merge() {
        let params = parse(
            "type_drivers: [vlan, geneve]\n\
             max_header_size: 50\n\
             overlay_ip_version: 6\n",
        );
        assert_eq!(params.type_drivers, vec!["vlan", "geneve"]);
        assert_eq!(params.max_header_size, Some(50));
        assert_eq!(params.overlay_ip_version, Some(6));
        assert_eq!(params.mechanism_drivers, vec!["openvswitch", "linuxbridge"]);
    }

    #[test]
    fn test_yaml_single_string_lists() {
        let params = parse(
            "network_vlan_ranges: '1:20,400:4094'\n\
             physical_network_mtus: ''\n\
             extension_drivers: port_security\n",
        );
        assert_eq!(params.network_vlan_ranges, vec!["1:20", "400:4094"]);
        assert!(params.physical_network_mtus.is_empty());
        assert_eq!(
            params.extension_drivers,
            Some(vec!["port_security".to_string()])
        );
    }

    #[test]
    fn test_yaml_quoted_numbers() {
        let params = parse(
            "path_mtu: '9000'\n\
             max_header_size: '50'\n\
             overlay_ip_version: 300\n",
        );
        assert_eq!(params.path_mtu, Some(9000));
        assert_eq!(params.max_header_size, Some(50));
        assert_eq!(params.overlay_ip_version, Some(300));

        assert_eq!(parse("overlay_ip_version: -1\n").overlay_ip_version, Some(-1));
        assert_eq!(parse("path_mtu: ''\n").path_mtu, None);
    }

    #[test]
    fn test_yaml_explicit_null_unsets() {
        let params = parse("vxlan_group: ~\npath_mtu: ~\n");
        assert_eq!(params.vxlan_group, None);
        assert_eq!(params.path_mtu, None);
    }

    #[test]
    fn test_from_entries() {
        let entries = vec![
            ConfigEntry::set(SECTION_ML2, keys::TYPE_DRIVERS, ConfigValue::list(["vlan"])),
            ConfigEntry::absent(SECTION_ML2, keys::EXTENSION_DRIVERS),
            ConfigEntry::set(SECTION_ML2, keys::PATH_MTU, 9000u32),
            ConfigEntry::set(SECTION_ML2, keys::OVERLAY_IP_VERSION, 4u8),
            ConfigEntry::set(
                SECTION_TYPE_VLAN,
                keys::NETWORK_VLAN_RANGES,
                ConfigValue::list(["physnet1:1:20"]),
            ),
            ConfigEntry::set(SECTION_SECURITYGROUP, keys::ENABLE_SECURITY_GROUP, true),
        ];

        let params = ParameterSet::from_entries(&entries);
        assert_eq!(params.type_drivers, vec!["vlan"]);
        assert_eq!(params.extension_drivers, None);
        assert_eq!(params.path_mtu, Some(9000));
        assert_eq!(params.overlay_ip_version, Some(4));
        assert_eq!(params.network_vlan_ranges, vec!["physnet1:1:20"]);
        assert_eq!(params.enable_security_group, Some(true));
        assert_eq!(params.vxlan_group, None);
        assert!(params.tunnel_id_ranges.is_empty());
    }
}
