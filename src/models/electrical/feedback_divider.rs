//! Feedback divider resistor selection.
//!
//! Picks standard-value resistors for the divider that sets a regulator's
//! output voltage from its feedback reference:
//!
//! ```text
//! V_out = V_ref * (R_top + R_bot) / R_bot
//! ```
//!
//! [`FeedbackDivider`] is the [`twine_core::Model`] adapter. It builds the
//! candidate set once and can then be called for any pair of voltages.
//! [`solve`] runs a single configuration end to end.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use uom::si::{electric_potential::volt, f64::ElectricPotential};
//! use voltdiv_models::models::electrical::feedback_divider::{
//!     CandidateConfig, DividerVoltages, FeedbackDivider, SearchConfig, TopArm,
//! };
//!
//! let divider = FeedbackDivider::new(&CandidateConfig::default(), SearchConfig::default())?;
//!
//! let voltages = DividerVoltages::new(
//!     ElectricPotential::new::<volt>(5.0),
//!     ElectricPotential::new::<volt>(1.25),
//! )?;
//! let solution = divider.call(&voltages)?;
//!
//! let best = solution.best().expect("at least one row");
//! assert_eq!(best.error.get::<volt>(), 0.0);
//! assert!(matches!(best.top, TopArm::Single(_)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod core;
pub mod report;

pub use self::core::{
    CandidateConfig, CandidateSet, ConfigurationError, DividerConfig, DividerVoltages, ResultRow,
    SearchConfig, Solution, TopArm, TopArmMode, Warning, solve,
};

use std::convert::Infallible;

use twine_core::Model;

/// Divider search over a fixed set of candidate resistances.
#[derive(Debug, Clone)]
pub struct FeedbackDivider {
    candidates: CandidateSet,
    search: SearchConfig,
}

impl FeedbackDivider {
    /// Builds the candidate set and stores the search options.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the candidate set cannot be built.
    pub fn new(
        candidates: &CandidateConfig,
        search: SearchConfig,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            candidates: CandidateSet::build(candidates)?,
            search,
        })
    }

    /// Candidate resistances used for both arms.
    #[must_use]
    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Search and post-processing options.
    #[must_use]
    pub fn search(&self) -> &SearchConfig {
        &self.search
    }
}

impl Model for FeedbackDivider {
    type Input = DividerVoltages;
    type Output = Solution;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self::core::evaluate(&self.candidates, *input, &self.search))
    }
}
