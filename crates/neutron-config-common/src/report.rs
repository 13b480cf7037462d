//! Two-tier validation results.
//!
//! Validation either fails with one hard error or succeeds with a model;
//! in both cases it may also produce non-fatal warnings. Warnings are
//! logged when recorded and handed back to the caller with the outcome.

use thiserror::Error;
use tracing::warn;

use crate::registry::DriverKind;

/// Non-fatal findings collected during validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationWarning {
    /// Driver name is not in the registry. The entry is kept as-is.
    #[error("{kind} unknown.")]
    UnknownDriver {
        /// Which driver list the name came from.
        kind: DriverKind,
        /// The unrecognized name.
        name: String,
    },

    /// A name was listed twice in an ordered set.
    #[error("{option} lists '{name}' more than once, keeping the first occurrence.")]
    DuplicateEntry {
        /// The parameter holding the list.
        option: String,
        /// The repeated name.
        name: String,
    },

    /// An option that the enabled feature relies on was left unset.
    #[error("{option} is not set while {feature} is enabled, using the platform default.")]
    UnsetOption {
        /// The unset parameter.
        option: String,
        /// The driver that uses it.
        feature: String,
    },

    /// A list entry has an unexpected shape but is passed through.
    #[error("{option} entry '{entry}' is malformed.")]
    MalformedEntry {
        /// The parameter holding the list.
        option: String,
        /// The offending entry.
        entry: String,
    },
}

impl ValidationWarning {
    /// Creates an unknown driver warning.
    pub fn unknown_driver(kind: DriverKind, name: impl Into<String>) -> Self {
        Self::UnknownDriver {
            kind,
            name: name.into(),
        }
    }

    /// Creates an unset option warning.
    pub fn unset_option(option: impl Into<String>, feature: impl Into<String>) -> Self {
        Self::UnsetOption {
            option: option.into(),
            feature: feature.into(),
        }
    }

    /// Creates a malformed entry warning.
    pub fn malformed_entry(option: impl Into<String>, entry: impl Into<String>) -> Self {
        Self::MalformedEntry {
            option: option.into(),
            entry: entry.into(),
        }
    }
}

/// Outcome of validating a parameter set: exactly one of model or error,
/// plus the warnings raised on the way.
#[derive(Debug, Clone)]
#[must_use]
pub struct ValidationReport<T, E> {
    outcome: Result<T, E>,
    warnings: Vec<ValidationWarning>,
}

impl<T, E> ValidationReport<T, E> {
    pub fn new(outcome: Result<T, E>, warnings: Vec<ValidationWarning>) -> Self {
        Self { outcome, warnings }
    }

    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn outcome(&self) -> Result<&T, &E> {
        self.outcome.as_ref()
    }

    pub fn model(&self) -> Option<&T> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&E> {
        self.outcome.as_ref().err()
    }

    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    /// Splits the report into `(model_or_none, warnings, error_or_none)`.
    pub fn into_parts(self) -> (Option<T>, Vec<ValidationWarning>, Option<E>) {
        match self.outcome {
            Ok(model) => (Some(model), self.warnings, None),
            Err(err) => (None, self.warnings, Some(err)),
        }
    }

    /// Drops warnings from the error path and keeps them on success.
    pub fn into_result(self) -> Result<(T, Vec<ValidationWarning>), E> {
        self.outcome.map(|model| (model, self.warnings))
    }
}

/// Accumulates warnings while a validator runs.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    warnings: Vec<ValidationWarning>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs and records a warning.
    pub fn warn(&mut self, warning: ValidationWarning) {
        match &warning {
            ValidationWarning::UnknownDriver { kind, name } => {
                warn!(kind = %kind, name = %name, "{}", warning)
            }
            _ => warn!("{}", warning),
        }
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    /// Closes the builder with the validator's outcome.
    pub fn finish<T, E>(self, outcome: Result<T, E>) -> ValidationReport<T, E> {
        ValidationReport::new(outcome, self.warnings)
    }
}
