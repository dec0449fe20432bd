//! Electrical circuit models.
//!
//! This module contains models for passive networks around power
//! components, starting with regulator feedback dividers.

pub mod feedback_divider;
