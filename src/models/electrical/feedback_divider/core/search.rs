//! Nearest standard-value search for the top arm.
//!
//! For every ideal top value the search reports one match from below and one
//! from above. When the set has nothing on the requested side, the match is
//! clamped to the nearest end of the set instead of being dropped, so every
//! bottom resistor yields rows and poor fits are left to the error filter.

use uom::si::{electrical_resistance::ohm, f64::ElectricalResistance};

use super::{CandidateSet, TopArm, TopArmMode};

/// A candidate chosen for an ideal value, in ohms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Match {
    /// A candidate on the requested side of the ideal value.
    Found(f64),

    /// Nothing on the requested side; the nearest end of the set.
    Clamped(f64),
}

impl Match {
    pub(super) fn ohms(self) -> f64 {
        match self {
            Self::Found(r) | Self::Clamped(r) => r,
        }
    }
}

impl CandidateSet {
    /// Largest candidate not above `ideal`.
    pub(super) fn floor(&self, ideal: f64) -> Option<f64> {
        let ohms = self.as_ohms();
        let above = ohms.partition_point(|&r| r <= ideal);
        above.checked_sub(1).map(|i| ohms[i])
    }

    /// Smallest candidate not below `ideal`.
    pub(super) fn ceiling(&self, ideal: f64) -> Option<f64> {
        let ohms = self.as_ohms();
        ohms.get(ohms.partition_point(|&r| r < ideal)).copied()
    }

    /// Floor match, clamped to the smallest candidate.
    pub(super) fn floor_match(&self, ideal: f64) -> Match {
        self.floor(ideal)
            .map_or_else(|| Match::Clamped(self.min_ohms()), Match::Found)
    }

    /// Ceiling match, clamped to the largest candidate.
    pub(super) fn ceiling_match(&self, ideal: f64) -> Match {
        self.ceiling(ideal)
            .map_or_else(|| Match::Clamped(self.max_ohms()), Match::Found)
    }

    /// Floor and ceiling matches for `ideal`, in that order.
    fn bracket(&self, ideal: f64) -> [Match; 2] {
        [self.floor_match(ideal), self.ceiling_match(ideal)]
    }
}

/// Top-arm candidates approximating `ideal` ohms.
///
/// A single-resistor arm yields the floor and ceiling matches.
/// A series arm tries every candidate as the first resistor and brackets the
/// remaining resistance `ideal - first` for the second. The residual is
/// taken from the unmodified ideal on each trial, so results do not depend on
/// scan order. Mirrored pairs are emitted in canonical order.
pub(super) fn top_arms(set: &CandidateSet, ideal: f64, mode: TopArmMode) -> Vec<TopArm> {
    match mode {
        TopArmMode::Single => set
            .bracket(ideal)
            .into_iter()
            .map(|m| TopArm::Single(resistance(m.ohms())))
            .collect(),
        TopArmMode::Series => set
            .as_ohms()
            .iter()
            .flat_map(|&first| {
                set.bracket(ideal - first).into_iter().map(move |second| {
                    TopArm::series(resistance(first), resistance(second.ohms()))
                })
            })
            .collect(),
    }
}

fn resistance(r: f64) -> ElectricalResistance {
    ElectricalResistance::new::<ohm>(r)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        models::electrical::feedback_divider::core::{CandidateConfig, ConfigurationError},
        support::series::E24,
    };

    fn set_of(values: &[f64]) -> Result<CandidateSet, ConfigurationError> {
        let config = CandidateConfig::from_values(
            values.iter().map(|&r| resistance(r)),
            resistance(0.1),
            resistance(1e7),
        );
        CandidateSet::build(&config)
    }

    fn e24_set() -> Result<CandidateSet, ConfigurationError> {
        CandidateSet::build(&CandidateConfig::from_series(
            &E24,
            resistance(1_000.0),
            resistance(100_000.0),
        ))
    }

    #[test]
    fn brackets_an_interior_value() -> Result<(), ConfigurationError> {
        let set = set_of(&[1_000.0, 2_000.0, 5_000.0])?;

        assert_eq!(set.floor_match(2_300.0), Match::Found(2_000.0));
        assert_eq!(set.ceiling_match(2_300.0), Match::Found(5_000.0));
        Ok(())
    }

    #[test]
    fn exact_hit_is_both_floor_and_ceiling() -> Result<(), ConfigurationError> {
        let set = set_of(&[1_000.0, 2_000.0, 5_000.0])?;

        assert_eq!(set.bracket(2_000.0), [Match::Found(2_000.0); 2]);
        Ok(())
    }

    #[test]
    fn clamps_outside_the_set() -> Result<(), ConfigurationError> {
        let set = set_of(&[1_000.0, 2_000.0, 5_000.0])?;

        assert_eq!(set.floor_match(500.0), Match::Clamped(1_000.0));
        assert_eq!(set.ceiling_match(500.0), Match::Found(1_000.0));

        assert_eq!(set.floor_match(9_000.0), Match::Found(5_000.0));
        assert_eq!(set.ceiling_match(9_000.0), Match::Clamped(5_000.0));
        Ok(())
    }

    #[test]
    fn non_positive_ideal_clamps_to_smallest() -> Result<(), ConfigurationError> {
        let set = e24_set()?;

        for ideal in [0.0, -2_700.0] {
            assert_eq!(set.floor_match(ideal), Match::Clamped(1_000.0));
            assert_eq!(set.ceiling_match(ideal).ohms(), 1_000.0);
        }
        Ok(())
    }

    #[test]
    fn bracket_has_no_candidate_in_between() -> Result<(), ConfigurationError> {
        let set = e24_set()?;
        let ohms = set.as_ohms();

        for ideal in [1_050.0, 2_300.0, 6_210.0, 47_500.0, 99_999.0] {
            let lo = set.floor_match(ideal).ohms();
            let hi = set.ceiling_match(ideal).ohms();

            assert!(lo <= ideal && ideal <= hi);
            assert!(!ohms.iter().any(|&r| lo < r && r < hi));
        }
        Ok(())
    }

    #[test]
    fn single_arm_yields_floor_then_ceiling() -> Result<(), ConfigurationError> {
        let set = e24_set()?;

        assert_eq!(
            top_arms(&set, 6_210.0, TopArmMode::Single),
            vec![
                TopArm::Single(resistance(6_200.0)),
                TopArm::Single(resistance(6_800.0)),
            ]
        );
        Ok(())
    }

    #[test]
    fn series_arm_sweeps_every_first_resistor() -> Result<(), ConfigurationError> {
        let set = set_of(&[1_000.0, 2_000.0, 5_000.0])?;
        let arms = top_arms(&set, 2_300.0, TopArmMode::Series);

        assert_eq!(arms.len(), 2 * set.len());
        assert_eq!(
            arms,
            vec![
                // first = 1000, residual 1300
                TopArm::series(resistance(1_000.0), resistance(1_000.0)),
                TopArm::series(resistance(1_000.0), resistance(2_000.0)),
                // first = 2000, residual 300 lies below the set
                TopArm::series(resistance(2_000.0), resistance(1_000.0)),
                TopArm::series(resistance(2_000.0), resistance(1_000.0)),
                // first = 5000, negative residual
                TopArm::series(resistance(5_000.0), resistance(1_000.0)),
                TopArm::series(resistance(5_000.0), resistance(1_000.0)),
            ]
        );
        Ok(())
    }

    #[test]
    fn series_residual_is_independent_of_scan_order() -> Result<(), ConfigurationError> {
        let set = set_of(&[100.0, 1_000.0, 2_200.0])?;
        let arms = top_arms(&set, 2_300.0, TopArmMode::Series);

        // The last trial still brackets 2300 - 2200, not a running remainder.
        assert_eq!(
            &arms[4..],
            &[
                TopArm::series(resistance(2_200.0), resistance(100.0)),
                TopArm::series(resistance(2_200.0), resistance(100.0)),
            ]
        );
        Ok(())
    }
}
