// Copyright 2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Physical units attached to labeled arrays.
//!
//! A unit is an opaque token: the array only needs to compare units, ask
//! whether a unit is dimensionless, and combine two units when values are
//! multiplied or divided.
//!
//! An array carries an `Option<U>`. `None` means unit tracking is disabled
//! for that array; it is **not** the same as a dimensionless unit, and the
//! two never compare equal.

use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::error::DimsError;

/// A physical unit.
///
/// Equality is structural: two units are equal if and only if their
/// representations are equal.
pub trait Unit: Clone + PartialEq + fmt::Debug
{
    /// Return `true` if the unit has no physical dimension.
    fn is_dimensionless(&self) -> bool;

    /// The unit of the product of two quantities.
    fn combine(&self, other: &Self) -> Self;

    /// The unit of the quotient of two quantities.
    fn divide(&self, other: &Self) -> Self;
}

/// A unit represented by its symbol, for example `"m"` or `"m/s"`.
///
/// The empty string is the dimensionless unit.
///
/// ```
/// use dims::{StringUnit, Unit};
///
/// let m = StringUnit::new("m");
/// let s = StringUnit::new("s");
/// assert_eq!(m.combine(&s), StringUnit::new("m*s"));
/// assert_eq!(m.divide(&s), StringUnit::new("m/s"));
/// assert!(StringUnit::dimensionless().is_dimensionless());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StringUnit
{
    repr: String,
}

impl StringUnit
{
    pub fn new(repr: impl Into<String>) -> Self
    {
        StringUnit { repr: repr.into() }
    }

    pub fn dimensionless() -> Self
    {
        Self::default()
    }

    /// The symbol of the unit; empty if dimensionless.
    pub fn as_str(&self) -> &str
    {
        &self.repr
    }
}

impl Unit for StringUnit
{
    #[inline]
    fn is_dimensionless(&self) -> bool
    {
        self.repr.is_empty()
    }

    fn combine(&self, other: &Self) -> Self
    {
        match (self.is_dimensionless(), other.is_dimensionless()) {
            (true, _) => other.clone(),
            (_, true) => self.clone(),
            _ => StringUnit::new(format!("{}*{}", self.repr, other.repr)),
        }
    }

    fn divide(&self, other: &Self) -> Self
    {
        if other.is_dimensionless() {
            self.clone()
        } else if self == other {
            StringUnit::dimensionless()
        } else if self.is_dimensionless() {
            StringUnit::new(format!("1/{}", other.repr))
        } else {
            StringUnit::new(format!("{}/{}", self.repr, other.repr))
        }
    }
}

impl From<&str> for StringUnit
{
    fn from(repr: &str) -> Self
    {
        StringUnit::new(repr.to_owned())
    }
}

impl fmt::Display for StringUnit
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        if self.is_dimensionless() {
            f.write_str("dimensionless")
        } else {
            f.write_str(&self.repr)
        }
    }
}

fn describe<U: Unit>(unit: Option<&U>) -> Option<String>
{
    unit.map(|u| format!("{:?}", u))
}

/// Unit rule for additive operations: both units must be identical.
///
/// Two disabled units (`None`) are identical; `None` never matches a
/// concrete unit, not even a dimensionless one.
pub fn identical_units<U: Unit>(left: Option<&U>, right: Option<&U>) -> Result<Option<U>, DimsError>
{
    match (left, right) {
        (None, None) => Ok(None),
        (Some(a), Some(b)) if a == b => Ok(Some(a.clone())),
        _ => Err(DimsError::UnitMismatch {
            left: describe(left),
            right: describe(right),
        }),
    }
}

/// Unit rule for multiplication: units are combined with [`Unit::combine`].
///
/// Both operands must either track units or not; mixing fails.
pub fn combine_units<U: Unit>(left: Option<&U>, right: Option<&U>) -> Result<Option<U>, DimsError>
{
    match (left, right) {
        (None, None) => Ok(None),
        (Some(a), Some(b)) => Ok(Some(a.combine(b))),
        _ => Err(DimsError::UnitMismatch {
            left: describe(left),
            right: describe(right),
        }),
    }
}

/// Unit rule for division: units are combined with [`Unit::divide`].
///
/// Both operands must either track units or not; mixing fails.
pub fn divide_units<U: Unit>(left: Option<&U>, right: Option<&U>) -> Result<Option<U>, DimsError>
{
    match (left, right) {
        (None, None) => Ok(None),
        (Some(a), Some(b)) => Ok(Some(a.divide(b))),
        _ => Err(DimsError::UnitMismatch {
            left: describe(left),
            right: describe(right),
        }),
    }
}

/// Check that `unit` may be passed to a function that only accepts
/// dimensionless input (`exp`, `ln`, trigonometric functions).
pub fn require_dimensionless<U: Unit>(unit: Option<&U>) -> Result<(), DimsError>
{
    match unit {
        Some(u) if !u.is_dimensionless() => Err(DimsError::NotDimensionless(format!("{:?}", u))),
        _ => Ok(()),
    }
}
