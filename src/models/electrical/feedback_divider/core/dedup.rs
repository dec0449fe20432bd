use std::collections::HashSet;

use uom::si::{electric_potential::volt, electrical_resistance::ohm};

use super::{ResultRow, TopArm};

/// Comparison key covering every reported field of a row.
///
/// Series arms are keyed in ascending order, so `(a, b)` and `(b, a)` share
/// a key even if a row was built without [`TopArm::series`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct RowKey {
    top: (u64, Option<u64>),
    bottom: u64,
    output_voltage: u64,
    error: u64,
}

impl RowKey {
    fn of(row: &ResultRow) -> Self {
        let top = match row.top {
            TopArm::Single(r) => (bits(r.get::<ohm>()), None),
            TopArm::Series(a, b) => {
                let (a, b) = (a.get::<ohm>(), b.get::<ohm>());
                let (lo, hi) = if b < a { (b, a) } else { (a, b) };
                (bits(lo), Some(bits(hi)))
            }
        };

        Self {
            top,
            bottom: bits(row.bottom.get::<ohm>()),
            output_voltage: bits(row.output_voltage.get::<volt>()),
            error: bits(row.error.get::<volt>()),
        }
    }
}

/// Bit pattern with both zeros mapped to `+0.0`.
fn bits(x: f64) -> u64 {
    if x == 0.0 { 0.0_f64.to_bits() } else { x.to_bits() }
}

/// Keeps the first occurrence of every distinct row, preserving order.
pub(super) fn remove_duplicates(rows: Vec<ResultRow>) -> Vec<ResultRow> {
    let mut seen = HashSet::with_capacity(rows.len());
    rows.into_iter()
        .filter(|row| seen.insert(RowKey::of(row)))
        .collect()
}
