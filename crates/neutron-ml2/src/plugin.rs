//! Ml2Plugin - ML2 configuration generator

use neutron_config_common::{ConfigEntry, ConfigGenerator, ValidationReport};

use crate::emitter;
use crate::error::ValidationError;
use crate::model::ValidatedModel;
use crate::params::ParameterSet;
use crate::tables::{ML2_CONF_PATH, SECTION_ORDER};
use crate::validator::Validator;

/// Generates `ml2_conf.ini` from ML2 parameters.
///
/// Configuration flow:
/// 1. ParameterSet → Validator → ValidatedModel (+ warnings)
/// 2. ValidatedModel → emitter → ordered ConfigEntry list
#[derive(Debug, Clone, Copy, Default)]
pub struct Ml2Plugin {
    validator: Validator<'static>,
}

impl Ml2Plugin {
    /// Creates a generator over the global driver registry and bounds.
    pub fn new() -> Self {
        Self {
            validator: Validator::new(),
        }
    }
}

impl ConfigGenerator for Ml2Plugin {
    type Params = ParameterSet;
    type Model = ValidatedModel;
    type Error = ValidationError;

    fn service_name(&self) -> &str {
        "ml2"
    }

    fn config_path(&self) -> &str {
        ML2_CONF_PATH
    }

    fn section_order(&self) -> &[&'static str] {
        &SECTION_ORDER
    }

    fn validate(&self, params: &ParameterSet) -> ValidationReport<ValidatedModel, ValidationError> {
        self.validator.validate(params)
    }

    fn emit(&self, model: &ValidatedModel) -> Vec<ConfigEntry> {
        emitter::emit(model)
    }
}
