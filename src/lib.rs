//! # Voltdiv Models
//!
//! Standard-value resistor selection for voltage regulator feedback dividers,
//! packaged as [Twine](https://github.com/isentropic-dev/twine) models.
//!
//! Given a target output voltage and a regulator's reference voltage, the
//! [`feedback_divider`](models::electrical::feedback_divider) model searches
//! a preferred-value series (or an explicit parts list) for top and bottom
//! resistors whose divider lands closest to the target, and returns every
//! candidate ranked by output-voltage error.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
