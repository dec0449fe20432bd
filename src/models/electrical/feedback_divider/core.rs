//! Standard-value search for resistive feedback dividers.
//!
//! The pipeline runs in fixed stages, each a pure function of the previous
//! stage's output:
//!
//! 1. Build the [`CandidateSet`] from a series or an explicit list.
//! 2. For each bottom resistor, compute the ideal top-arm resistance.
//! 3. Bracket that ideal value with real candidates (one or two resistors).
//! 4. Assemble rows with rounded output voltage and error.
//! 5. Optionally drop duplicate rows, then rows above the accepted error.
//! 6. Rank the survivors by ascending absolute error.

mod assemble;
mod candidates;
mod config;
mod dedup;
mod error;
mod ideal;
mod rank;
mod results;
mod search;

pub use candidates::CandidateSet;
pub use config::{CandidateConfig, DividerConfig, DividerVoltages, SearchConfig, TopArmMode};
pub use error::ConfigurationError;
pub use results::{ResultRow, Solution, TopArm, Warning};

use uom::si::electric_potential::volt;

use ideal::IdealTop;

/// Runs the full calculation for one configuration.
///
/// # Errors
///
/// Returns a [`ConfigurationError`] if the candidate set cannot be built.
pub fn solve(config: &DividerConfig) -> Result<Solution, ConfigurationError> {
    let candidates = CandidateSet::build(&config.candidates)?;
    Ok(evaluate(&candidates, config.voltages, &config.search))
}

/// Searches `candidates` for dividers producing the target voltage.
///
/// Every candidate is used once as the bottom resistor.
pub(crate) fn evaluate(
    candidates: &CandidateSet,
    voltages: DividerVoltages,
    search: &SearchConfig,
) -> Solution {
    let target = voltages.target().get::<volt>();
    let reference = voltages.reference().get::<volt>();

    let mut warnings = Vec::new();
    if voltages.is_degenerate() {
        let warning = Warning::DegenerateDivider {
            target: voltages.target(),
            reference: voltages.reference(),
        };
        log::warn!("{warning}; top arm clamps to the smallest candidate");
        warnings.push(warning);
    }

    let ideal = IdealTop::new(target, reference);
    let mut rows: Vec<ResultRow> = candidates
        .as_ohms()
        .iter()
        .flat_map(|&bottom| {
            search::top_arms(candidates, ideal.for_bottom(bottom), search.top_arm)
                .into_iter()
                .map(move |top| assemble::assemble(top, bottom, target, reference))
        })
        .collect();
    log::debug!("assembled {} rows", rows.len());

    if search.remove_duplicates {
        rows = dedup::remove_duplicates(rows);
        log::debug!("{} rows after removing duplicates", rows.len());
    }

    if let Some(accepted) = search.accepted_error {
        rows = rank::filter_by_error(rows, accepted.into_inner().get::<volt>());
        log::debug!("{} rows within accepted error", rows.len());
    }

    rank::rank(&mut rows);

    Solution {
        voltages,
        top_arm: search.top_arm,
        rows,
        warnings,
    }
}
