//! Section and key name constants for networking_sfc.conf

/// Target configuration file
pub const SFC_CONF_PATH: &str = "/etc/neutron/networking_sfc.conf";

// Sections
pub const SECTION_SFC: &str = "sfc";
pub const SECTION_FLOW_CLASSIFIER: &str = "flowclassifier";

/// Fixed emission order
pub const SECTION_ORDER: [&str; 2] = [SECTION_SFC, SECTION_FLOW_CLASSIFIER];

/// Keys within both sections
pub mod keys {
    pub const DRIVERS: &str = "drivers";
}

/// Parameter names, as used in warnings and YAML overrides
pub mod params {
    pub const SFC_DRIVER: &str = "sfc_driver";
    pub const FC_DRIVER: &str = "fc_driver";
}
