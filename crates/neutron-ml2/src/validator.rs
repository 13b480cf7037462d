//! ML2 parameter validation.
//!
//! Checks run in a fixed order and the first hard failure aborts:
//!
//! 1. string values must fit on one config line
//! 2. driver lists (unknown names only warn)
//! 3. `overlay_ip_version`
//! 4. `network_vlan_ranges`, `tunnel_id_ranges`, `vni_ranges`
//! 5. `vxlan_group`
//! 6. `physical_network_mtus`
//! 7. per driver sections (GENEVE header size, SR-IOV devices)

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, instrument};

use neutron_config_common::{
    is_single_line, DriverKind, DriverRegistry, ReportBuilder, ValidationReport, ValidationWarning,
    DRIVER_REGISTRY,
};
use neutron_types::{
    parse_range, parse_vlan_range, IpVersion, MulticastGroup, NumericRange, PhysnetMtu,
    VlanRangeSpec,
};

use crate::bounds::{BoundsTable, NetworkType, RangeKind, BOUNDS};
use crate::error::{ValidationError, ValidationResult};
use crate::model::{
    FlatSection, GeneveSection, GreSection, SecurityGroupSection, SriovSection, ValidatedModel,
    VlanSection, VxlanSection,
};
use crate::params::ParameterSet;
use crate::tables::{keys, ML2_CORE_PLUGIN, SRIOV_MECHANISM_DRIVER};

/// `vendor_id:product_id`, four hex digits each
static PCI_VENDOR_DEV_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-fA-F]{4}:[0-9a-fA-F]{4}$").expect("Invalid regex pattern"));

/// Validates ML2 parameter sets against a driver registry and bounds table.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    registry: &'a DriverRegistry,
    bounds: &'a BoundsTable,
}

impl Validator<'static> {
    /// Creates a validator over the global registry and bounds.
    pub fn new() -> Self {
        Self {
            registry: &DRIVER_REGISTRY,
            bounds: &BOUNDS,
        }
    }
}

impl Default for Validator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Validator<'a> {
    /// Creates a validator over custom tables.
    pub fn with_tables(registry: &'a DriverRegistry, bounds: &'a BoundsTable) -> Self {
        Self { registry, bounds }
    }

    /// Validates a parameter set.
    ///
    /// Always returns exactly one of a model or an error. Warnings raised
    /// before a failure are kept in the report.
    #[instrument(skip_all)]
    pub fn validate(&self, params: &ParameterSet) -> ValidationReport<ValidatedModel, ValidationError> {
        let mut report = ReportBuilder::new();
        let outcome = self.run(params, &mut report);
        report.finish(outcome)
    }

    fn run(
        &self,
        params: &ParameterSet,
        report: &mut ReportBuilder,
    ) -> ValidationResult<ValidatedModel> {
        let core_plugin = params.core_plugin.as_deref().unwrap_or(ML2_CORE_PLUGIN);
        debug!("Validating ML2 parameters for core plugin {}", core_plugin);

        check_text_values(params)?;

        let type_drivers = self.check_drivers(
            DriverKind::TypeDriver,
            keys::TYPE_DRIVERS,
            &params.type_drivers,
            report,
        );
        let tenant_network_types = ordered_set(
            keys::TENANT_NETWORK_TYPES,
            &params.tenant_network_types,
            report,
        );
        let mechanism_drivers = self.check_drivers(
            DriverKind::MechanismDriver,
            keys::MECHANISM_DRIVERS,
            &params.mechanism_drivers,
            report,
        );
        let extension_drivers = params
            .extension_drivers
            .as_ref()
            .map(|names| {
                self.check_drivers(
                    DriverKind::ExtensionDriver,
                    keys::EXTENSION_DRIVERS,
                    names,
                    report,
                )
            })
            .filter(|names| !names.is_empty());

        let overlay_ip_version = params
            .overlay_ip_version
            .map(|version| {
                u8::try_from(version)
                    .ok()
                    .and_then(|v| IpVersion::try_from(v).ok())
                    .ok_or(ValidationError::InvalidOverlayIpVersion { version })
            })
            .transpose()?;

        let has_type = |network_type: NetworkType| {
            type_drivers
                .iter()
                .any(|name| name == network_type.as_str())
        };
        // VNI ranges are shared; name the overlay that actually uses them
        let vni_network_type = if has_type(NetworkType::Geneve) && !has_type(NetworkType::Vxlan) {
            NetworkType::Geneve
        } else {
            NetworkType::Vxlan
        };

        let network_vlan_ranges = params
            .network_vlan_ranges
            .iter()
            .map(|token| self.check_vlan_range(token))
            .collect::<ValidationResult<Vec<_>>>()?;
        let tunnel_id_ranges = self.check_ranges(
            RangeKind::TunnelId,
            NetworkType::Gre,
            &params.tunnel_id_ranges,
        )?;
        let vni_ranges = self.check_ranges(RangeKind::Vni, vni_network_type, &params.vni_ranges)?;

        let vxlan_group = non_empty(&params.vxlan_group)
            .map(check_vxlan_group)
            .transpose()?;

        let physical_network_mtus = params
            .physical_network_mtus
            .iter()
            .map(|entry| {
                entry
                    .parse::<PhysnetMtu>()
                    .map_err(|source| ValidationError::InvalidMtuEntry {
                        entry: entry.clone(),
                        source,
                    })
            })
            .collect::<ValidationResult<Vec<_>>>()?;

        let flat = has_type(NetworkType::Flat).then(|| FlatSection {
            flat_networks: params.flat_networks.clone(),
        });
        let vlan = has_type(NetworkType::Vlan).then(|| VlanSection {
            network_vlan_ranges,
        });
        let gre = has_type(NetworkType::Gre).then(|| GreSection { tunnel_id_ranges });
        let vxlan = has_type(NetworkType::Vxlan).then(|| VxlanSection {
            vni_ranges: vni_ranges.clone(),
            vxlan_group,
        });

        let geneve = if has_type(NetworkType::Geneve) {
            if params.max_header_size.is_none() {
                report.warn(ValidationWarning::unset_option(
                    keys::MAX_HEADER_SIZE,
                    NetworkType::Geneve.as_str(),
                ));
            }
            Some(GeneveSection {
                vni_ranges,
                max_header_size: params.max_header_size,
            })
        } else {
            None
        };

        let sriov = if mechanism_drivers.iter().any(|m| m == SRIOV_MECHANISM_DRIVER) {
            Some(check_sriov(params, report))
        } else {
            None
        };

        let security_group = SecurityGroupSection {
            enable_security_group: params.enable_security_group,
            firewall_driver: non_empty(&params.firewall_driver).map(str::to_string),
        };

        debug!(
            "ML2 parameters valid: {} type drivers, {} mechanism drivers, {} warnings",
            type_drivers.len(),
            mechanism_drivers.len(),
            report.warnings().len()
        );

        Ok(ValidatedModel {
            type_drivers,
            tenant_network_types,
            mechanism_drivers,
            extension_drivers,
            path_mtu: params.path_mtu,
            physical_network_mtus,
            overlay_ip_version,
            flat,
            vlan,
            gre,
            vxlan,
            geneve,
            sriov,
            security_group,
        })
    }

    /// De-duplicates a driver list and warns about unknown names.
    fn check_drivers(
        &self,
        kind: DriverKind,
        option: &str,
        names: &[String],
        report: &mut ReportBuilder,
    ) -> Vec<String> {
        let drivers = ordered_set(option, names, report);
        for name in self.registry.unknown(kind, &drivers) {
            report.warn(ValidationWarning::unknown_driver(kind, name));
        }
        drivers
    }

    fn check_ranges(
        &self,
        kind: RangeKind,
        network_type: NetworkType,
        tokens: &[String],
    ) -> ValidationResult<Vec<NumericRange>> {
        tokens
            .iter()
            .map(|token| {
                let range = parse_range(token)
                    .map_err(|e| ValidationError::range_syntax(kind, token.as_str(), e))?;
                self.check_range(kind, network_type, token, range)?;
                Ok(range)
            })
            .collect()
    }

    fn check_vlan_range(&self, token: &str) -> ValidationResult<VlanRangeSpec> {
        let spec = parse_vlan_range(token)
            .map_err(|e| ValidationError::range_syntax(RangeKind::VlanId, token, e))?;
        if let Some(range) = spec.range() {
            self.check_range(RangeKind::VlanId, NetworkType::Vlan, token, range)?;
        }
        Ok(spec)
    }

    fn check_range(
        &self,
        kind: RangeKind,
        network_type: NetworkType,
        token: &str,
        range: NumericRange,
    ) -> ValidationResult<()> {
        if range.is_inverted() {
            return Err(ValidationError::inverted_range(kind, token));
        }
        let bounds = self.bounds.for_kind(kind);
        if !bounds.contains(range.low(), range.high()) {
            return Err(ValidationError::out_of_bounds(kind, network_type, bounds, token));
        }
        Ok(())
    }
}

/// Validates with the global tables.
pub fn validate(params: &ParameterSet) -> ValidationReport<ValidatedModel, ValidationError> {
    Validator::new().validate(params)
}

/// Keeps the first occurrence of each name, warning about repeats.
fn ordered_set(option: &str, names: &[String], report: &mut ReportBuilder) -> Vec<String> {
    for name in names.iter().duplicates() {
        report.warn(ValidationWarning::DuplicateEntry {
            option: option.to_string(),
            name: name.clone(),
        });
    }
    names.iter().unique().cloned().collect()
}

/// Rejects string values that would break out of their config line.
fn check_text_values(params: &ParameterSet) -> ValidationResult<()> {
    let lists: [(&'static str, &[String]); 10] = [
        (keys::TYPE_DRIVERS, &params.type_drivers),
        (keys::TENANT_NETWORK_TYPES, &params.tenant_network_types),
        (keys::MECHANISM_DRIVERS, &params.mechanism_drivers),
        (
            keys::EXTENSION_DRIVERS,
            params.extension_drivers.as_deref().unwrap_or_default(),
        ),
        (keys::FLAT_NETWORKS, &params.flat_networks),
        (keys::NETWORK_VLAN_RANGES, &params.network_vlan_ranges),
        (keys::TUNNEL_ID_RANGES, &params.tunnel_id_ranges),
        (keys::VNI_RANGES, &params.vni_ranges),
        (keys::PHYSICAL_NETWORK_MTUS, &params.physical_network_mtus),
        (
            keys::SUPPORTED_PCI_VENDOR_DEVS,
            params.supported_pci_vendor_devs.as_deref().unwrap_or_default(),
        ),
    ];
    let scalars = [
        (keys::VXLAN_GROUP, params.vxlan_group.as_ref()),
        (keys::FIREWALL_DRIVER, params.firewall_driver.as_ref()),
    ];

    let values = lists
        .into_iter()
        .flat_map(|(option, items)| items.iter().map(move |value| (option, value)))
        .chain(
            scalars
                .into_iter()
                .filter_map(|(option, value)| value.map(|value| (option, value))),
        );

    for (option, value) in values {
        if !is_single_line(value) {
            return Err(ValidationError::InvalidCharacters {
                option,
                value: value.clone(),
            });
        }
    }
    Ok(())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn check_vxlan_group(value: &str) -> ValidationResult<MulticastGroup> {
    value
        .parse()
        .map_err(|_| ValidationError::InvalidMulticastAddress {
            value: value.to_string(),
        })
}

fn check_sriov(params: &ParameterSet, report: &mut ReportBuilder) -> SriovSection {
    let supported_pci_vendor_devs = match &params.supported_pci_vendor_devs {
        Some(devs) => devs.clone(),
        None => {
            report.warn(ValidationWarning::unset_option(
                keys::SUPPORTED_PCI_VENDOR_DEVS,
                SRIOV_MECHANISM_DRIVER,
            ));
            Vec::new()
        }
    };

    for dev in &supported_pci_vendor_devs {
        if !PCI_VENDOR_DEV_RE.is_match(dev) {
            report.warn(ValidationWarning::malformed_entry(
                keys::SUPPORTED_PCI_VENDOR_DEVS,
                dev.as_str(),
            ));
        }
    }

    SriovSection {
        supported_pci_vendor_devs,
    }
}
