// Copyright 2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use ndarray::ShapeError;

/// An error produced by an operation on a labeled array.
///
/// Use [`.kind()`](DimsError::kind) to classify the error without matching on
/// every variant.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum DimsError
{
    /// The number of dimension names does not match the rank of the values.
    NdimMismatch
    {
        expected: usize,
        actual: usize,
    },
    /// A dimension name occurs more than once.
    DuplicateDim(String),
    /// Positional indexing without naming a dimension, on an array whose rank is not 1.
    NotOneD(usize),
    /// A named dimension is not present in the array.
    DimNotFound(String),
    /// Index out of bounds for the named dimension.
    IndexOutOfBounds
    {
        dim: String,
        index: isize,
        len: usize,
    },
    /// Slice with a step of zero.
    ZeroStep(String),
    /// Two operands have extents along a shared dimension that cannot be broadcast.
    IncompatibleShapes
    {
        dim: String,
        left: usize,
        right: usize,
    },
    /// The units of two operands are not compatible for the operation.
    UnitMismatch
    {
        left: Option<String>,
        right: Option<String>,
    },
    /// The operation requires a dimensionless operand.
    NotDimensionless(String),
    /// Error from the underlying buffer.
    Shape(ShapeErrorRepr),
}

/// Error code for a [`DimsError`].
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind
{
    /// dimension names and buffer disagree
    Shape,
    /// indexing misuse
    Dimension,
    /// incompatible units
    Unit,
    /// named dimension or index not found
    Lookup,
}

/// Wrapper around an [`ndarray::ShapeError`] that compares by kind.
#[derive(Clone, Debug)]
pub struct ShapeErrorRepr(Box<ShapeError>);

impl ShapeErrorRepr
{
    pub fn inner(&self) -> &ShapeError
    {
        &self.0
    }
}

impl PartialEq for ShapeErrorRepr
{
    fn eq(&self, rhs: &Self) -> bool
    {
        self.0.kind() == rhs.0.kind()
    }
}

impl DimsError
{
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind
    {
        match self {
            DimsError::NdimMismatch { .. }
            | DimsError::DuplicateDim(_)
            | DimsError::IncompatibleShapes { .. }
            | DimsError::Shape(_) => ErrorKind::Shape,
            DimsError::NotOneD(_) | DimsError::ZeroStep(_) => ErrorKind::Dimension,
            DimsError::UnitMismatch { .. } | DimsError::NotDimensionless(_) => ErrorKind::Unit,
            DimsError::DimNotFound(_) | DimsError::IndexOutOfBounds { .. } => ErrorKind::Lookup,
        }
    }
}

impl From<ShapeError> for DimsError
{
    fn from(e: ShapeError) -> Self
    {
        DimsError::Shape(ShapeErrorRepr(Box::new(e)))
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DimsError {}

fn fmt_unit(f: &mut fmt::Formatter<'_>, unit: &Option<String>) -> fmt::Result
{
    match unit {
        Some(u) => write!(f, "{}", u),
        None => write!(f, "None"),
    }
}

impl fmt::Display for DimsError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            DimsError::NdimMismatch { expected, actual } => write!(
                f,
                "Number of dimensions in dims ({}) does not match rank of values ({})",
                actual, expected
            ),
            DimsError::DuplicateDim(dim) => write!(f, "Duplicate dimension {:?}", dim),
            DimsError::NotOneD(ndim) => {
                write!(f, "Only 1-D arrays can be indexed without dims, got {}-D array", ndim)
            }
            DimsError::DimNotFound(dim) => write!(f, "Dimension {:?} not found", dim),
            DimsError::IndexOutOfBounds { dim, index, len } => write!(
                f,
                "Index {} is out of bounds for dimension {:?} with size {}",
                index, dim, len
            ),
            DimsError::ZeroStep(dim) => write!(f, "Slice step for dimension {:?} must be nonzero", dim),
            DimsError::IncompatibleShapes { dim, left, right } => write!(
                f,
                "Cannot broadcast dimension {:?} with sizes {} and {}",
                dim, left, right
            ),
            DimsError::UnitMismatch { left, right } => {
                write!(f, "Units must be identical, got ")?;
                fmt_unit(f, left)?;
                write!(f, " and ")?;
                fmt_unit(f, right)
            }
            DimsError::NotDimensionless(unit) => write!(f, "Unit must be dimensionless, got {}", unit),
            DimsError::Shape(e) => write!(f, "{}", e.inner()),
        }
    }
}
