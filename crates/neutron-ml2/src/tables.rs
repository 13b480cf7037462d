//! Section and key names for ml2_conf.ini

/// ML2 plugin configuration file
pub const ML2_CONF_PATH: &str = "/etc/neutron/plugins/ml2/ml2_conf.ini";

/// Core plugin class the ML2 configuration applies to
pub const ML2_CORE_PLUGIN: &str = "neutron.plugins.ml2.plugin.Ml2Plugin";

/// Core ML2 options
pub const SECTION_ML2: &str = "ml2";

/// Flat type driver options
pub const SECTION_TYPE_FLAT: &str = "ml2_type_flat";

/// VLAN type driver options
pub const SECTION_TYPE_VLAN: &str = "ml2_type_vlan";

/// GRE type driver options
pub const SECTION_TYPE_GRE: &str = "ml2_type_gre";

/// VXLAN type driver options
pub const SECTION_TYPE_VXLAN: &str = "ml2_type_vxlan";

/// GENEVE type driver options
pub const SECTION_TYPE_GENEVE: &str = "ml2_type_geneve";

/// SR-IOV mechanism driver options
pub const SECTION_SRIOV: &str = "ml2_sriov";

/// Security group options
pub const SECTION_SECURITYGROUP: &str = "securitygroup";

/// Emission order of the sections
pub const SECTION_ORDER: [&str; 8] = [
    SECTION_ML2,
    SECTION_TYPE_FLAT,
    SECTION_TYPE_VLAN,
    SECTION_TYPE_GRE,
    SECTION_TYPE_VXLAN,
    SECTION_TYPE_GENEVE,
    SECTION_SRIOV,
    SECTION_SECURITYGROUP,
];

/// Mechanism driver that enables the SR-IOV section
pub const SRIOV_MECHANISM_DRIVER: &str = "sriovnicswitch";

/// Key names
pub mod keys {
    pub const TYPE_DRIVERS: &str = "type_drivers";
    pub const TENANT_NETWORK_TYPES: &str = "tenant_network_types";
    pub const MECHANISM_DRIVERS: &str = "mechanism_drivers";
    pub const EXTENSION_DRIVERS: &str = "extension_drivers";
    pub const PATH_MTU: &str = "path_mtu";
    pub const PHYSICAL_NETWORK_MTUS: &str = "physical_network_mtus";
    pub const OVERLAY_IP_VERSION: &str = "overlay_ip_version";

    pub const FLAT_NETWORKS: &str = "flat_networks";
    pub const NETWORK_VLAN_RANGES: &str = "network_vlan_ranges";
    pub const TUNNEL_ID_RANGES: &str = "tunnel_id_ranges";
    pub const VNI_RANGES: &str = "vni_ranges";
    pub const VXLAN_GROUP: &str = "vxlan_group";
    pub const MAX_HEADER_SIZE: &str = "max_header_size";

    pub const SUPPORTED_PCI_VENDOR_DEVS: &str = "supported_pci_vendor_devs";

    pub const ENABLE_SECURITY_GROUP: &str = "enable_security_group";
    pub const FIREWALL_DRIVER: &str = "firewall_driver";
}
