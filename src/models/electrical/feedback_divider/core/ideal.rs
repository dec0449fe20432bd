/// Exact top-arm resistance for a given bottom resistor.
///
/// From `V_out = V_ref * (R_top + R_bot) / R_bot`, the ideal top arm is
/// `R_bot * (V_out / V_ref - 1)`. The result is zero or negative when the
/// target does not exceed the reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct IdealTop {
    ratio: f64,
}

impl IdealTop {
    /// Ideal-value calculator for a target and reference voltage, in volts.
    pub(super) fn new(target: f64, reference: f64) -> Self {
        Self {
            ratio: target / reference - 1.0,
        }
    }

    /// Ideal top-arm resistance, in ohms, for a bottom resistor in ohms.
    pub(super) fn for_bottom(self, bottom: f64) -> f64 {
        bottom * self.ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn scales_with_bottom_resistor() {
        let ideal = IdealTop::new(3.3, 1.0);

        assert_relative_eq!(ideal.for_bottom(1_000.0), 2_300.0, epsilon = 1e-9);
        assert_relative_eq!(ideal.for_bottom(27_000.0), 62_100.0, epsilon = 1e-9);
    }

    #[test]
    fn fractional_ratio() {
        let ideal = IdealTop::new(1.1, 0.6);

        for bottom in [1_000.0, 2_000.0, 5_000.0] {
            assert_relative_eq!(ideal.for_bottom(bottom), bottom * 5.0 / 6.0, epsilon = 1e-9);
        }
        assert_relative_eq!(ideal.for_bottom(1_200.0), 1_000.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_when_target_equals_reference() {
        let ideal = IdealTop::new(1.25, 1.25);
        assert_eq!(ideal.for_bottom(10_000.0), 0.0);
    }

    #[test]
    fn negative_when_target_below_reference() {
        let ideal = IdealTop::new(0.5, 1.0);
        assert_relative_eq!(ideal.for_bottom(2_000.0), -1_000.0);
    }
}
