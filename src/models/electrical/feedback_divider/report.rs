//! CSV rendering of divider solutions.
//!
//! Produces the table layout used for spreadsheets: a preamble with the
//! required output voltage, a blank line, a header, then one line per row in
//! ranked order. Separator and decimal point are configurable for locales
//! where `,` is the decimal mark. Writing the text to a file or console is
//! left to the caller.
//!
//! ```text
//! Required output voltage;;3.3;V
//!
//! R_TOP [Ohm];R_BOT [Ohm];V_OUT [V];ERR [V]
//! 6200;2700;3.296;-0.004
//! ```

use std::fmt::{self, Write};

use uom::si::{electric_potential::volt, electrical_resistance::ohm};

use super::{Solution, TopArm, TopArmMode};

/// Text formatting options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field separator.
    pub separator: char,

    /// Character written in place of `.` inside numbers.
    pub decimal_point: char,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            separator: ';',
            decimal_point: '.',
        }
    }
}

/// Writes `solution` as CSV text.
///
/// # Errors
///
/// Returns an error if the underlying writer fails.
pub fn write_csv<W: Write>(out: &mut W, solution: &Solution, options: &CsvOptions) -> fmt::Result {
    let sep = options.separator;
    let num = |x: f64| number(x, options.decimal_point);

    writeln!(
        out,
        "Required output voltage{sep}{sep}{}{sep}V",
        num(solution.voltages.target().get::<volt>())
    )?;
    writeln!(out)?;

    match solution.top_arm {
        TopArmMode::Single => write!(out, "R_TOP [Ohm]{sep}")?,
        TopArmMode::Series => write!(out, "R_TOP1 [Ohm]{sep}R_TOP2 [Ohm]{sep}")?,
    }
    writeln!(out, "R_BOT [Ohm]{sep}V_OUT [V]{sep}ERR [V]")?;

    for row in &solution.rows {
        match row.top {
            TopArm::Single(r) => write!(out, "{}{sep}", num(r.get::<ohm>()))?,
            TopArm::Series(a, b) => write!(
                out,
                "{}{sep}{}{sep}",
                num(a.get::<ohm>()),
                num(b.get::<ohm>())
            )?,
        }
        writeln!(
            out,
            "{}{sep}{}{sep}{}",
            num(row.bottom.get::<ohm>()),
            num(row.output_voltage.get::<volt>()),
            num(row.error.get::<volt>())
        )?;
    }

    Ok(())
}

fn number(x: f64, decimal_point: char) -> String {
    let text = x.to_string();
    if decimal_point == '.' {
        text
    } else {
        text.replace('.', decimal_point.encode_utf8(&mut [0; 4]))
    }
}
