//! Rendering a validated model into ml2_conf.ini entries.
//!
//! Output is a pure function of the model. Sections follow
//! [`SECTION_ORDER`](crate::tables::SECTION_ORDER) and lists keep the
//! order they were supplied in.

use neutron_config_common::ConfigEntry;

use crate::model::ValidatedModel;
use crate::tables::{
    keys, SECTION_ML2, SECTION_SECURITYGROUP, SECTION_SRIOV, SECTION_TYPE_FLAT,
    SECTION_TYPE_GENEVE, SECTION_TYPE_GRE, SECTION_TYPE_VLAN, SECTION_TYPE_VXLAN,
};

/// Emits the entries for `model`.
pub fn emit(model: &ValidatedModel) -> Vec<ConfigEntry> {
    let mut entries = vec![
        ConfigEntry::list(SECTION_ML2, keys::TYPE_DRIVERS, &model.type_drivers),
        ConfigEntry::list(
            SECTION_ML2,
            keys::TENANT_NETWORK_TYPES,
            &model.tenant_network_types,
        ),
        ConfigEntry::list(SECTION_ML2, keys::MECHANISM_DRIVERS, &model.mechanism_drivers),
        match &model.extension_drivers {
            Some(drivers) => ConfigEntry::list(SECTION_ML2, keys::EXTENSION_DRIVERS, drivers),
            None => ConfigEntry::absent(SECTION_ML2, keys::EXTENSION_DRIVERS),
        },
        ConfigEntry::optional(SECTION_ML2, keys::PATH_MTU, model.path_mtu),
        ConfigEntry::list(
            SECTION_ML2,
            keys::PHYSICAL_NETWORK_MTUS,
            &model.physical_network_mtus,
        ),
        ConfigEntry::optional(
            SECTION_ML2,
            keys::OVERLAY_IP_VERSION,
            model.overlay_ip_version.map(u8::from),
        ),
    ];

    if let Some(flat) = &model.flat {
        entries.push(ConfigEntry::list(
            SECTION_TYPE_FLAT,
            keys::FLAT_NETWORKS,
            &flat.flat_networks,
        ));
    }

    if let Some(vlan) = &model.vlan {
        entries.push(ConfigEntry::list(
            SECTION_TYPE_VLAN,
            keys::NETWORK_VLAN_RANGES,
            &vlan.network_vlan_ranges,
        ));
    }

    if let Some(gre) = &model.gre {
        entries.push(ConfigEntry::list(
            SECTION_TYPE_GRE,
            keys::TUNNEL_ID_RANGES,
            &gre.tunnel_id_ranges,
        ));
    }

    if let Some(vxlan) = &model.vxlan {
        entries.push(ConfigEntry::list(
            SECTION_TYPE_VXLAN,
            keys::VNI_RANGES,
            &vxlan.vni_ranges,
        ));
        entries.push(ConfigEntry::optional(
            SECTION_TYPE_VXLAN,
            keys::VXLAN_GROUP,
            vxlan.vxlan_group.map(String::from),
        ));
    }

    if let Some(geneve) = &model.geneve {
        entries.push(ConfigEntry::list(
            SECTION_TYPE_GENEVE,
            keys::VNI_RANGES,
            &geneve.vni_ranges,
        ));
        entries.push(ConfigEntry::optional(
            SECTION_TYPE_GENEVE,
            keys::MAX_HEADER_SIZE,
            geneve.max_header_size,
        ));
    }

    if let Some(sriov) = &model.sriov {
        entries.push(ConfigEntry::list(
            SECTION_SRIOV,
            keys::SUPPORTED_PCI_VENDOR_DEVS,
            &sriov.supported_pci_vendor_devs,
        ));
    }

    entries.push(ConfigEntry::optional(
        SECTION_SECURITYGROUP,
        keys::ENABLE_SECURITY_GROUP,
        model.security_group.enable_security_group,
    ));
    entries.push(ConfigEntry::optional(
        SECTION_SECURITYGROUP,
        keys::FIREWALL_DRIVER,
        model.security_group.firewall_driver.clone(),
    ));

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParameterSet;
    use crate::tables::SECTION_ORDER;
    use crate::validator::validate;
    use neutron_config_common::{ConfigEntriesExt, ConfigValue};
    use pretty_assertions::assert_eq;

    fn emit_params(params: &ParameterSet) -> Vec<ConfigEntry> {
        emit(validate(params).model().expect("parameters should be valid"))
    }

    fn value(entries: &[ConfigEntry], section: &str, key: &str) -> String {
        entries
            .get_value(section, key)
            .unwrap_or_else(|| panic!("{}/{} should be set", section, key))
            .to_string()
    }

    #[test]
    fn test_default_entries() {
        let entries = emit_params(&ParameterSet::default());

        assert_eq!(
            value(&entries, "ml2", "type_drivers"),
            "local,flat,vlan,gre,vxlan"
        );
        assert_eq!(
            value(&entries, "ml2", "tenant_network_types"),
            "local,flat,vlan,gre,vxlan"
        );
        assert_eq!(
            value(&entries, "ml2", "mechanism_drivers"),
            "openvswitch,linuxbridge"
        );
        assert!(entries.get_entry("ml2", "extension_drivers").unwrap().is_absent());
        assert_eq!(value(&entries, "ml2", "path_mtu"), "0");
        assert!(entries
            .get_entry("ml2", "physical_network_mtus")
            .unwrap()
            .is_absent());
        assert!(entries.get_entry("ml2", "overlay_ip_version").unwrap().is_absent());
        assert_eq!(value(&entries, "ml2_type_flat", "flat_networks"), "*");
        assert_eq!(value(&entries, "ml2_type_vlan", "network_vlan_ranges"), "10:50");
        assert_eq!(value(&entries, "ml2_type_gre", "tunnel_id_ranges"), "20:100");
        assert_eq!(value(&entries, "ml2_type_vxlan", "vni_ranges"), "10:100");
        assert_eq!(value(&entries, "ml2_type_vxlan", "vxlan_group"), "224.0.0.1");
        assert!(!entries.has_section("ml2_type_geneve"));
        assert!(!entries.has_section("ml2_sriov"));
        assert!(entries
            .get_entry("securitygroup", "firewall_driver")
            .unwrap()
            .is_absent());
        assert!(entries
            .get_entry("securitygroup", "enable_security_group")
            .unwrap()
            .is_absent());
    }

    #[test]
    fn test_sections_follow_fixed_order() {
        let mut params = ParameterSet::default();
        params.type_drivers.push("geneve".to_string());
        params.mechanism_drivers.push("sriovnicswitch".to_string());
        params.max_header_size = Some(50);

        let entries = emit_params(&params);
        assert_eq!(entries.sections(), SECTION_ORDER.to_vec());
    }

    #[test]
    fn test_list_order_is_insertion_order() {
        let mut params = ParameterSet::default();
        params.type_drivers = vec!["vxlan".to_string(), "flat".to_string()];
        let entries = emit_params(&params);
        assert_eq!(value(&entries, "ml2", "type_drivers"), "vxlan,flat");
        assert_eq!(
            entries.sections(),
            vec!["ml2", "ml2_type_flat", "ml2_type_vxlan", "securitygroup"]
        );
    }

    #[test]
    fn test_typed_values() {
        let mut params = ParameterSet::default();
        params.overlay_ip_version = Some(4);
        params.enable_security_group = Some(true);
        let entries = emit_params(&params);

        assert_eq!(
            entries.get_value("ml2", "overlay_ip_version"),
            Some(&ConfigValue::Int(4))
        );
        assert_eq!(
            entries.get_value("securitygroup", "enable_security_group"),
            Some(&ConfigValue::Bool(true))
        );
    }

    #[test]
    fn test_emit_is_deterministic() {
        let model = validate(&ParameterSet::default()).model().cloned().unwrap();
        assert_eq!(emit(&model), emit(&model));
    }
}
