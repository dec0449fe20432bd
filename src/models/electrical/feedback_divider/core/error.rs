use thiserror::Error;
use uom::si::f64::ElectricalResistance;

use crate::support::constraint::ConstraintError;

/// Errors that prevent a candidate set from being built.
///
/// Every variant is fatal: no rows are computed for an invalid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigurationError {
    /// Neither an explicit resistance list nor a series was supplied.
    #[error("no resistance values specified")]
    NoResistanceValues,

    /// A voltage, bound, or explicit resistance violated its numeric constraint.
    #[error("invalid configuration value")]
    Constraint(#[from] ConstraintError),

    /// The resistance range is empty or reversed.
    #[error("minimum resistance must be below maximum: min={min:?}, max={max:?}")]
    InvertedRange {
        min: ElectricalResistance,
        max: ElectricalResistance,
    },

    /// Every candidate fell outside the resistance range.
    #[error("no candidate resistance within range: min={min:?}, max={max:?}")]
    EmptyCandidateSet {
        min: ElectricalResistance,
        max: ElectricalResistance,
    },
}
