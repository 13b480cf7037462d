//! Validate-then-emit trait shared by the Neutron config generators.

use tracing::{error, info};

use crate::entry::ConfigEntry;
use crate::report::{ValidationReport, ValidationWarning};

/// Everything produced by a successful generation run.
#[derive(Debug, Clone)]
pub struct Generated<M> {
    /// The validated model the entries were derived from.
    pub model: M,
    /// Ordered entries, ready for the config writer.
    pub entries: Vec<ConfigEntry>,
    /// Warnings raised during validation.
    pub warnings: Vec<ValidationWarning>,
}

/// A service whose configuration file is generated from a parameter set.
///
/// Implementations are stateless: `validate` and `emit` are pure, so a
/// generator can be shared between threads and called repeatedly with the
/// same result.
///
/// # Example
///
/// ```ignore
/// use neutron_config_common::ConfigGenerator;
///
/// let generated = Ml2Plugin::new().generate(&ParameterSet::default())?;
/// for entry in &generated.entries {
///     println!("{}", entry);
/// }
/// ```
pub trait ConfigGenerator {
    /// User-facing parameters, already merged with defaults.
    type Params;

    /// Validated, normalized form of the parameters.
    type Model;

    /// Hard validation failure.
    type Error: std::error::Error;

    /// Returns the service name (e.g., "ml2", "sfc"), used for logging.
    fn service_name(&self) -> &str;

    /// Returns the path of the file the entries belong in.
    fn config_path(&self) -> &str;

    /// Returns the fixed section order of the emitted entries.
    fn section_order(&self) -> &[&'static str];

    /// Checks the parameters and builds the model.
    fn validate(&self, params: &Self::Params) -> ValidationReport<Self::Model, Self::Error>;

    /// Renders a model into ordered entries.
    fn emit(&self, model: &Self::Model) -> Vec<ConfigEntry>;

    /// Validates and emits in one step.
    fn generate(&self, params: &Self::Params) -> Result<Generated<Self::Model>, Self::Error> {
        let (model, warnings) = self.validate(params).into_result().map_err(|e| {
            error!("{} validation failed: {}", self.service_name(), e);
            e
        })?;

        let entries = self.emit(&model);
        info!(
            "{}: generated {} entries for {} ({} warnings)",
            self.service_name(),
            entries.len(),
            self.config_path(),
            warnings.len()
        );

        Ok(Generated {
            model,
            entries,
            warnings,
        })
    }
}
