//! Candidate resistance set construction.

use std::ops::RangeInclusive;

use uom::si::{electrical_resistance::ohm, f64::ElectricalResistance};

use crate::support::constraint::StrictlyPositive;

use super::{CandidateConfig, ConfigurationError};

/// Decade exponents applied to series mantissas.
///
/// With mantissas in `100..1000` this spans 0.1 Ω to just under 100 MΩ.
const DECADES: RangeInclusive<i32> = -3..=5;

/// Ascending, duplicate-free resistances available for both divider arms.
///
/// Every value lies within the configured `[min, max]` range and the set is
/// never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSet {
    ohms: Vec<f64>,
}

impl CandidateSet {
    /// Builds the candidate set described by `config`.
    ///
    /// An explicit list is used as given when non-empty; otherwise the series
    /// mantissas are expanded across decades.
    /// Values outside `[min, max]` are discarded and repeats are collapsed.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the range bounds are invalid, an
    /// explicit value is not strictly positive, no resistance source is given,
    /// or no value survives clipping.
    pub fn build(config: &CandidateConfig) -> Result<Self, ConfigurationError> {
        let min = StrictlyPositive::new(config.min)?.into_inner();
        let max = StrictlyPositive::new(config.max)?.into_inner();
        if min >= max {
            return Err(ConfigurationError::InvertedRange { min, max });
        }

        let values = if !config.explicit.is_empty() {
            config
                .explicit
                .iter()
                .map(|&r| -> Result<f64, ConfigurationError> {
                    Ok(StrictlyPositive::new(r)?.into_inner().get::<ohm>())
                })
                .collect::<Result<Vec<_>, _>>()?
        } else if !config.series.is_empty() {
            expand_series(&config.series)
        } else {
            return Err(ConfigurationError::NoResistanceValues);
        };

        let range = min.get::<ohm>()..=max.get::<ohm>();
        let mut ohms: Vec<f64> = values.into_iter().filter(|v| range.contains(v)).collect();
        ohms.sort_by(f64::total_cmp);
        ohms.dedup();

        if ohms.is_empty() {
            return Err(ConfigurationError::EmptyCandidateSet { min, max });
        }

        log::debug!("candidate set holds {} resistances", ohms.len());
        Ok(Self { ohms })
    }

    /// Number of candidate resistances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ohms.len()
    }

    /// Always `false`: construction rejects empty sets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ohms.is_empty()
    }

    /// Candidate values in ohms, ascending.
    #[must_use]
    pub fn as_ohms(&self) -> &[f64] {
        &self.ohms
    }

    /// Iterates over the candidates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = ElectricalResistance> + '_ {
        self.ohms.iter().map(|&r| ElectricalResistance::new::<ohm>(r))
    }

    /// Smallest candidate, in ohms.
    pub(super) fn min_ohms(&self) -> f64 {
        self.ohms[0]
    }

    /// Largest candidate, in ohms.
    pub(super) fn max_ohms(&self) -> f64 {
        self.ohms[self.ohms.len() - 1]
    }
}

/// Scales every mantissa by every decade, decade-major.
fn expand_series(series: &[u16]) -> Vec<f64> {
    DECADES
        .flat_map(|decade| {
            series.iter().map(move |&mantissa| {
                let mantissa = f64::from(mantissa);
                // Dividing keeps sub-ohm values like 0.1 correctly rounded.
                if decade >= 0 {
                    mantissa * 10_f64.powi(decade)
                } else {
                    mantissa / 10_f64.powi(-decade)
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::series::{E24, E96, union};

    fn ohms(r: f64) -> ElectricalResistance {
        ElectricalResistance::new::<ohm>(r)
    }

    #[test]
    fn series_expansion_is_clipped_to_range() -> Result<(), ConfigurationError> {
        let config = CandidateConfig::from_series(&E24, ohms(1_000.0), ohms(100_000.0));
        let set = CandidateSet::build(&config)?;

        // Two full decades plus the closing 100 kΩ.
        assert_eq!(set.len(), 49);
        assert_eq!(&set.as_ohms()[..3], &[1_000.0, 1_100.0, 1_200.0]);
        assert_eq!(&set.as_ohms()[46..], &[82_000.0, 91_000.0, 100_000.0]);
        assert!(
            set.as_ohms()
                .iter()
                .all(|r| (1_000.0..=100_000.0).contains(r))
        );
        Ok(())
    }

    #[test]
    fn expansion_is_deterministic() -> Result<(), ConfigurationError> {
        let config = CandidateConfig::from_series(&E96, ohms(10.0), ohms(1e6));
        assert_eq!(CandidateSet::build(&config)?, CandidateSet::build(&config)?);
        Ok(())
    }

    #[test]
    fn sub_ohm_decades() -> Result<(), ConfigurationError> {
        let config = CandidateConfig::from_series(&[100, 470], ohms(0.1), ohms(1.0));
        let set = CandidateSet::build(&config)?;

        assert_eq!(set.as_ohms(), &[0.1, 0.47, 1.0]);
        Ok(())
    }

    #[test]
    fn overlapping_series_do_not_repeat_values() -> Result<(), ConfigurationError> {
        let mut overlapping = E24.to_vec();
        overlapping.extend_from_slice(&E96);
        let config = CandidateConfig::from_series(&overlapping, ohms(1_000.0), ohms(9_999.0));
        let set = CandidateSet::build(&config)?;

        assert_eq!(set.len(), union(&[&E24, &E96]).len());
        assert!(set.as_ohms().windows(2).all(|w| w[0] < w[1]));
        Ok(())
    }

    #[test]
    fn explicit_values_skip_decade_expansion() -> Result<(), ConfigurationError> {
        let config = CandidateConfig::from_values(
            [5_000.0, 1_000.0, 2_000.0].map(ohms),
            ohms(1_000.0),
            ohms(5_000.0),
        );
        let set = CandidateSet::build(&config)?;

        assert_eq!(set.as_ohms(), &[1_000.0, 2_000.0, 5_000.0]);
        assert_eq!(set.iter().next(), Some(ohms(1_000.0)));
        Ok(())
    }

    #[test]
    fn explicit_values_take_precedence_and_are_clipped() -> Result<(), ConfigurationError> {
        let config = CandidateConfig {
            series: E24.to_vec(),
            ..CandidateConfig::from_values(
                [330.0, 4_700.0, 4_700.0, 150_000.0].map(ohms),
                ohms(1_000.0),
                ohms(100_000.0),
            )
        };
        let set = CandidateSet::build(&config)?;

        assert_eq!(set.as_ohms(), &[4_700.0]);
        Ok(())
    }

    #[test]
    fn missing_source_is_rejected() {
        let config = CandidateConfig::from_series(&[], ohms(1_000.0), ohms(100_000.0));
        assert_eq!(
            CandidateSet::build(&config),
            Err(ConfigurationError::NoResistanceValues)
        );
    }

    #[test]
    fn invalid_bounds_are_rejected() {
        let reversed = CandidateConfig::from_series(&E24, ohms(10_000.0), ohms(1_000.0));
        assert!(matches!(
            CandidateSet::build(&reversed),
            Err(ConfigurationError::InvertedRange { .. })
        ));

        let zero_min = CandidateConfig::from_series(&E24, ohms(0.0), ohms(1_000.0));
        assert!(matches!(
            CandidateSet::build(&zero_min),
            Err(ConfigurationError::Constraint(_))
        ));
    }

    #[test]
    fn non_positive_explicit_value_is_rejected() {
        let config = CandidateConfig::from_values(
            [1_000.0, -47.0].map(ohms),
            ohms(1.0),
            ohms(10_000.0),
        );
        assert!(matches!(
            CandidateSet::build(&config),
            Err(ConfigurationError::Constraint(_))
        ));
    }

    #[test]
    fn nothing_in_range_is_rejected() {
        let config =
            CandidateConfig::from_values([10.0, 20.0].map(ohms), ohms(1_000.0), ohms(2_000.0));
        assert!(matches!(
            CandidateSet::build(&config),
            Err(ConfigurationError::EmptyCandidateSet { .. })
        ));
    }
}
