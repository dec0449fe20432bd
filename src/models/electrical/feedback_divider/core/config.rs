use uom::si::{
    electric_potential::volt,
    electrical_resistance::ohm,
    f64::{ElectricPotential, ElectricalResistance},
};

use crate::support::{
    constraint::{Constrained, ConstraintResult, NonNegative, StrictlyPositive},
    series,
};

/// Complete input for a one-shot divider calculation.
#[derive(Debug, Clone, Default)]
pub struct DividerConfig {
    /// Target output voltage and regulator reference voltage.
    pub voltages: DividerVoltages,

    /// Where candidate resistances come from and the range they are clipped to.
    pub candidates: CandidateConfig,

    /// How the top arm is searched and how rows are post-processed.
    pub search: SearchConfig,
}

/// Target output voltage and feedback reference voltage.
///
/// Both voltages are guaranteed to be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerVoltages {
    target: ElectricPotential,
    reference: ElectricPotential,
}

impl DividerVoltages {
    /// Constructs validated divider voltages.
    ///
    /// # Errors
    ///
    /// Returns an error if either voltage is not strictly positive.
    pub fn new(target: ElectricPotential, reference: ElectricPotential) -> ConstraintResult<Self> {
        let target = StrictlyPositive::new(target)?;
        let reference = StrictlyPositive::new(reference)?;
        Ok(Self::from_constrained(target, reference))
    }

    /// Constructs divider voltages from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        target: Constrained<ElectricPotential, StrictlyPositive>,
        reference: Constrained<ElectricPotential, StrictlyPositive>,
    ) -> Self {
        Self {
            target: target.into_inner(),
            reference: reference.into_inner(),
        }
    }

    /// Returns the required output voltage.
    #[must_use]
    pub fn target(&self) -> ElectricPotential {
        self.target
    }

    /// Returns the regulator's feedback reference voltage.
    #[must_use]
    pub fn reference(&self) -> ElectricPotential {
        self.reference
    }

    /// Whether the target cannot be reached with a positive top arm.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.target <= self.reference
    }
}

/// 3.3 V output from a 1.0 V reference.
impl Default for DividerVoltages {
    fn default() -> Self {
        Self {
            target: ElectricPotential::new::<volt>(3.3),
            reference: ElectricPotential::new::<volt>(1.0),
        }
    }
}

/// Source and range of candidate resistances.
///
/// A non-empty `explicit` list takes precedence over `series`.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateConfig {
    /// Preferred-value mantissas expanded across decades.
    pub series: Vec<u16>,

    /// Exact resistances available, used as given instead of a series.
    pub explicit: Vec<ElectricalResistance>,

    /// Smallest resistance allowed in the candidate set (inclusive).
    pub min: ElectricalResistance,

    /// Largest resistance allowed in the candidate set (inclusive).
    pub max: ElectricalResistance,
}

/// Mixed E24/E96 stock between 1 kΩ and 100 kΩ.
impl Default for CandidateConfig {
    fn default() -> Self {
        Self {
            series: series::e24_e96(),
            explicit: Vec::new(),
            min: ElectricalResistance::new::<ohm>(1_000.0),
            max: ElectricalResistance::new::<ohm>(100_000.0),
        }
    }
}

impl CandidateConfig {
    /// Candidates expanded from a mantissa table within `[min, max]`.
    #[must_use]
    pub fn from_series(
        series: &[u16],
        min: ElectricalResistance,
        max: ElectricalResistance,
    ) -> Self {
        Self {
            series: series.to_vec(),
            explicit: Vec::new(),
            min,
            max,
        }
    }

    /// Candidates taken from an explicit list of resistances within `[min, max]`.
    #[must_use]
    pub fn from_values(
        values: impl IntoIterator<Item = ElectricalResistance>,
        min: ElectricalResistance,
        max: ElectricalResistance,
    ) -> Self {
        Self {
            series: Vec::new(),
            explicit: values.into_iter().collect(),
            min,
            max,
        }
    }
}

/// Number of resistors that make up the top arm of the divider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TopArmMode {
    /// One top resistor.
    #[default]
    Single,

    /// Two top resistors connected in series.
    Series,
}

/// Search and post-processing options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Number of resistors in the top arm.
    pub top_arm: TopArmMode,

    /// Drop rows that describe the same physical solution more than once.
    pub remove_duplicates: bool,

    /// Largest accepted absolute output-voltage error.
    ///
    /// `None` keeps every row regardless of its error.
    pub accepted_error: Option<Constrained<ElectricPotential, NonNegative>>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            top_arm: TopArmMode::Single,
            remove_duplicates: true,
            accepted_error: None,
        }
    }
}
