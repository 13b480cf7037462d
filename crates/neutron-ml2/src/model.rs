//! Validated ML2 configuration model

use neutron_types::{IpVersion, MulticastGroup, NumericRange, PhysnetMtu, VlanRangeSpec};
use serde::Serialize;

use crate::bounds::NetworkType;

/// ML2 parameters after validation.
///
/// Driver lists keep their input order without repeats. Per type driver
/// sections are only present when that driver is enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedModel {
    pub type_drivers: Vec<String>,
    pub tenant_network_types: Vec<String>,
    pub mechanism_drivers: Vec<String>,
    pub extension_drivers: Option<Vec<String>>,
    pub path_mtu: Option<u32>,
    pub physical_network_mtus: Vec<PhysnetMtu>,
    pub overlay_ip_version: Option<IpVersion>,

    pub flat: Option<FlatSection>,
    pub vlan: Option<VlanSection>,
    pub gre: Option<GreSection>,
    pub vxlan: Option<VxlanSection>,
    pub geneve: Option<GeneveSection>,
    pub sriov: Option<SriovSection>,
    pub security_group: SecurityGroupSection,
}

impl ValidatedModel {
    /// Returns true if `network_type` is among the type drivers.
    pub fn has_type_driver(&self, network_type: NetworkType) -> bool {
        self.type_drivers
            .iter()
            .any(|name| name == network_type.as_str())
    }

    /// Returns true if the mechanism driver is enabled.
    pub fn has_mechanism_driver(&self, name: &str) -> bool {
        self.mechanism_drivers.iter().any(|m| m == name)
    }
}

/// `[ml2_type_flat]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatSection {
    /// Physnet names, or `*` for any.
    pub flat_networks: Vec<String>,
}

/// `[ml2_type_vlan]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VlanSection {
    pub network_vlan_ranges: Vec<VlanRangeSpec>,
}

/// `[ml2_type_gre]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GreSection {
    pub tunnel_id_ranges: Vec<NumericRange>,
}

/// `[ml2_type_vxlan]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VxlanSection {
    pub vni_ranges: Vec<NumericRange>,
    pub vxlan_group: Option<MulticastGroup>,
}

/// `[ml2_type_geneve]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneveSection {
    pub vni_ranges: Vec<NumericRange>,
    pub max_header_size: Option<u32>,
}

/// `[ml2_sriov]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SriovSection {
    /// `vendor_id:product_id` pairs, passed through as given.
    pub supported_pci_vendor_devs: Vec<String>,
}

/// `[securitygroup]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SecurityGroupSection {
    pub enable_security_group: Option<bool>,
    pub firewall_driver: Option<String>,
}
