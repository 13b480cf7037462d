//! SfcService - networking_sfc.conf generator

use tracing::{debug, instrument};

use neutron_config_common::{
    is_single_line, ConfigEntry, ConfigGenerator, DriverKind, DriverRegistry, ReportBuilder,
    ValidationReport, ValidationWarning, DRIVER_REGISTRY,
};

use crate::error::{SfcError, SfcResult};
use crate::params::{SfcModel, SfcParameters};
use crate::tables::{keys, params, SECTION_FLOW_CLASSIFIER, SECTION_ORDER, SECTION_SFC, SFC_CONF_PATH};

/// Generates `networking_sfc.conf` from SFC parameters.
#[derive(Debug, Clone, Copy)]
pub struct SfcService {
    registry: &'static DriverRegistry,
}

impl SfcService {
    /// Creates a generator over the global driver registry.
    pub fn new() -> Self {
        Self::with_registry(&DRIVER_REGISTRY)
    }

    pub fn with_registry(registry: &'static DriverRegistry) -> Self {
        Self { registry }
    }

    fn check_drivers(
        &self,
        kind: DriverKind,
        option: &'static str,
        names: Option<&Vec<String>>,
        report: &mut ReportBuilder,
    ) -> SfcResult<Option<Vec<String>>> {
        let Some(names) = names else {
            debug!("{} not set, leaving platform default", option);
            return Ok(None);
        };

        if names.is_empty() {
            debug!("{} is empty, leaving platform default", option);
            return Ok(None);
        }
        if let Some(value) = names.iter().find(|n| !is_single_line(n)) {
            return Err(SfcError::InvalidCharacters {
                option,
                value: value.clone(),
            });
        }

        let names: Vec<String> = names.iter().map(|n| n.trim().to_string()).collect();
        if names.iter().any(String::is_empty) {
            return Err(SfcError::EmptyDriverName { option });
        }
        for name in self.registry.unknown(kind, &names) {
            report.warn(ValidationWarning::unknown_driver(kind, name));
        }
        Ok(Some(names))
    }
}

impl Default for SfcService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigGenerator for SfcService {
    type Params = SfcParameters;
    type Model = SfcModel;
    type Error = SfcError;

    fn service_name(&self) -> &str {
        "sfc"
    }

    fn config_path(&self) -> &str {
        SFC_CONF_PATH
    }

    fn section_order(&self) -> &[&'static str] {
        &SECTION_ORDER
    }

    #[instrument(skip_all)]
    fn validate(&self, input: &SfcParameters) -> ValidationReport<SfcModel, SfcError> {
        let mut report = ReportBuilder::new();
        let outcome = self
            .check_drivers(
                DriverKind::SfcDriver,
                params::SFC_DRIVER,
                input.sfc_drivers.as_ref(),
                &mut report,
            )
            .and_then(|sfc_drivers| {
                let fc_drivers = self.check_drivers(
                    DriverKind::FlowClassifierDriver,
                    params::FC_DRIVER,
                    input.fc_drivers.as_ref(),
                    &mut report,
                )?;
                Ok(SfcModel {
                    sfc_drivers,
                    fc_drivers,
                })
            });
        report.finish(outcome)
    }

    fn emit(&self, model: &SfcModel) -> Vec<ConfigEntry> {
        let drivers = |section: &str, names: &Option<Vec<String>>| match names {
            Some(names) => ConfigEntry::list(section, keys::DRIVERS, names),
            None => ConfigEntry::absent(section, keys::DRIVERS),
        };
        vec![
            drivers(SECTION_SFC, &model.sfc_drivers),
            drivers(SECTION_FLOW_CLASSIFIER, &model.fc_drivers),
        ]
    }
}
