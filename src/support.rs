//! Supporting utilities used by models.
//!
//! - [`constraint`]: Numeric invariants checked at construction.
//! - [`series`]: Preferred-value (E-series) mantissa tables.

pub mod constraint;
pub mod series;
