//! Type-level numeric constraints checked once at construction.
//!
//! Divider inputs carry invariants that every later stage relies on: voltages
//! and resistance bounds must be strictly positive, and the accepted voltage
//! error must not be negative. Wrapping those values in [`Constrained<T, C>`]
//! moves the check to the configuration boundary, so the search engine never
//! re-validates them.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: Zero or greater
//! - [`StrictlyPositive`]: Greater than zero
//!
//! Both markers work with plain numbers and with [`uom`] quantities such as
//! `ElectricalResistance` or `ElectricPotential`.
//!
//! # Extending
//!
//! Additional invariants can be expressed by implementing [`Constraint<T>`]
//! for a new zero-sized marker type.

mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A numeric invariant enforced when a [`Constrained`] value is built.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value that is known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use uom::si::{electrical_resistance::kiloohm, f64::ElectricalResistance};
/// use voltdiv_models::support::constraint::{Constrained, StrictlyPositive};
///
/// let r = ElectricalResistance::new::<kiloohm>(4.7);
/// let bound = Constrained::<_, StrictlyPositive>::new(r).unwrap();
/// assert_eq!(bound.into_inner(), r);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
