use super::ResultRow;

/// Keeps rows whose absolute error does not exceed `accepted` volts.
pub(super) fn filter_by_error(rows: Vec<ResultRow>, accepted: f64) -> Vec<ResultRow> {
    rows.into_iter()
        .filter(|row| row.abs_error_volts() <= accepted)
        .collect()
}

/// Stable sort by ascending absolute error.
pub(super) fn rank(rows: &mut [ResultRow]) {
    rows.sort_by(|a, b| a.abs_error_volts().total_cmp(&b.abs_error_volts()));
}
