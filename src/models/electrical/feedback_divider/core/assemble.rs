use uom::si::{
    electric_potential::volt,
    electrical_resistance::ohm,
    f64::{ElectricPotential, ElectricalResistance},
};

use super::{ResultRow, TopArm};

/// Reporting resolution for voltages, in volts.
const RESOLUTION: f64 = 1e-3;

/// Resolution steps per volt.
const STEPS_PER_VOLT: f64 = 1e3;

/// Builds a result row for a top arm over a bottom resistor (ohms).
///
/// Output voltage and error are rounded to [`RESOLUTION`]; an error smaller
/// than one step is reported as exactly zero.
pub(super) fn assemble(top: TopArm, bottom: f64, target: f64, reference: f64) -> ResultRow {
    let output = round_to_resolution(output_voltage(reference, top.total().get::<ohm>(), bottom));

    let mut error = round_to_resolution(output - target);
    if error.abs() < RESOLUTION {
        error = 0.0;
    }

    ResultRow {
        top,
        bottom: ElectricalResistance::new::<ohm>(bottom),
        output_voltage: ElectricPotential::new::<volt>(output),
        error: ElectricPotential::new::<volt>(error),
    }
}

/// Divider output for the given reference (volts) and arm resistances (ohms).
fn output_voltage(reference: f64, top: f64, bottom: f64) -> f64 {
    reference * (top + bottom) / bottom
}

fn round_to_resolution(volts: f64) -> f64 {
    (volts * STEPS_PER_VOLT).round() / STEPS_PER_VOLT
}
