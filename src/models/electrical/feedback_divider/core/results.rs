//! Result types for feedback divider searches.

use std::fmt;

use uom::si::{
    electric_potential::volt,
    f64::{ElectricPotential, ElectricalResistance},
};

use super::{DividerVoltages, TopArmMode};

/// Resistor(s) forming the top arm of the divider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TopArm {
    /// A single top resistor.
    Single(ElectricalResistance),

    /// Two top resistors in series.
    ///
    /// Values built with [`TopArm::series`] hold the smaller resistor first,
    /// so mirrored pairs compare equal.
    Series(ElectricalResistance, ElectricalResistance),
}

impl TopArm {
    /// Two series resistors in canonical (ascending) order.
    #[must_use]
    pub fn series(a: ElectricalResistance, b: ElectricalResistance) -> Self {
        if b < a {
            Self::Series(b, a)
        } else {
            Self::Series(a, b)
        }
    }

    /// Total resistance of the arm.
    #[must_use]
    pub fn total(&self) -> ElectricalResistance {
        match *self {
            Self::Single(r) => r,
            Self::Series(a, b) => a + b,
        }
    }

    /// Number of physical resistors in the arm.
    #[must_use]
    pub fn mode(&self) -> TopArmMode {
        match self {
            Self::Single(_) => TopArmMode::Single,
            Self::Series(..) => TopArmMode::Series,
        }
    }
}

/// One candidate divider: top arm, bottom resistor and the voltage they produce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultRow {
    /// Top arm resistor(s).
    pub top: TopArm,

    /// Bottom resistor.
    pub bottom: ElectricalResistance,

    /// Output voltage, rounded to the nearest millivolt.
    pub output_voltage: ElectricPotential,

    /// Signed deviation from the target (`output - target`), rounded to the
    /// nearest millivolt.
    pub error: ElectricPotential,
}

impl ResultRow {
    /// Absolute output-voltage error, in volts.
    pub(crate) fn abs_error_volts(&self) -> f64 {
        self.error.get::<volt>().abs()
    }
}

/// Non-fatal conditions detected while solving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Warning {
    /// The target does not exceed the reference, so no positive top arm can
    /// reach it. Rows are still produced by clamping to the smallest candidate.
    DegenerateDivider {
        target: ElectricPotential,
        reference: ElectricPotential,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateDivider { target, reference } => write!(
                f,
                "target voltage {} V does not exceed reference voltage {} V",
                target.get::<volt>(),
                reference.get::<volt>()
            ),
        }
    }
}

/// Ranked divider candidates for one target voltage.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Voltages the rows were computed for.
    pub voltages: DividerVoltages,

    /// Shape of the top arm in every row.
    pub top_arm: TopArmMode,

    /// Rows ordered by ascending absolute error.
    pub rows: Vec<ResultRow>,

    /// Advisory conditions found while solving.
    pub warnings: Vec<Warning>,
}

impl Solution {
    /// Row with the smallest absolute error, if any survived filtering.
    #[must_use]
    pub fn best(&self) -> Option<&ResultRow> {
        self.rows.first()
    }
}
