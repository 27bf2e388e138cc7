// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use ndarray::Slice;

use crate::error::DimsError;

/// An index along one dimension: a single position or a slice.
///
/// ## Examples
///
/// `AxisIndex::Index(a)` is the index `a`; it removes the dimension from the
/// result. It can also be created with `AxisIndex::from(a)`. Negative
/// indexes count from the back of the axis.
///
/// `AxisIndex::Slice(Slice::new(a, Some(b), 2))` is every second element from
/// `a` until `b`; it keeps the dimension. It can also be created with
/// `AxisIndex::from(a..b).step_by(2)`.
///
/// ## Negative steps
///
/// Slices follow ndarray's convention, not Python's: the range is taken
/// first and a negative step then walks it from its end. So `..` with step
/// `-1` reverses the axis, and `1..4` with step `-1` yields the elements at
/// 3, 2, 1. A range whose start is past its end, like `3..0`, is empty
/// whatever the step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AxisIndex
{
    Index(isize),
    Slice(Slice),
}

impl AxisIndex
{
    /// Returns `true` if `self` is an `Index` value.
    pub fn is_index(&self) -> bool
    {
        matches!(self, AxisIndex::Index(_))
    }

    /// Returns `true` if `self` is a `Slice` value.
    pub fn is_slice(&self) -> bool
    {
        matches!(self, AxisIndex::Slice(_))
    }

    /// Returns a new `AxisIndex` with the given step size (multiplied with
    /// the previous step size).
    ///
    /// `step` must be nonzero. Has no effect on an `Index`.
    #[inline]
    pub fn step_by(self, step: isize) -> Self
    {
        match self {
            AxisIndex::Slice(s) => AxisIndex::Slice(s.step_by(step)),
            AxisIndex::Index(_) => self,
        }
    }
}

macro_rules! impl_axis_index_from_index_type {
    ($index:ty) => {
        impl From<$index> for AxisIndex
        {
            #[inline]
            fn from(r: $index) -> AxisIndex
            {
                // indices past isize::MAX are out of bounds for every axis
                AxisIndex::Index(isize::try_from(r).unwrap_or(isize::MAX))
            }
        }

        impl From<Range<$index>> for AxisIndex
        {
            #[inline]
            fn from(r: Range<$index>) -> AxisIndex
            {
                AxisIndex::Slice(Slice::from(r))
            }
        }

        impl From<RangeInclusive<$index>> for AxisIndex
        {
            #[inline]
            fn from(r: RangeInclusive<$index>) -> AxisIndex
            {
                AxisIndex::Slice(Slice::from(r))
            }
        }

        impl From<RangeFrom<$index>> for AxisIndex
        {
            #[inline]
            fn from(r: RangeFrom<$index>) -> AxisIndex
            {
                AxisIndex::Slice(Slice::from(r))
            }
        }

        impl From<RangeTo<$index>> for AxisIndex
        {
            #[inline]
            fn from(r: RangeTo<$index>) -> AxisIndex
            {
                AxisIndex::Slice(Slice::from(r))
            }
        }

        impl From<RangeToInclusive<$index>> for AxisIndex
        {
            #[inline]
            fn from(r: RangeToInclusive<$index>) -> AxisIndex
            {
                AxisIndex::Slice(Slice::from(r))
            }
        }
    };
}

impl_axis_index_from_index_type!(isize);
impl_axis_index_from_index_type!(usize);
impl_axis_index_from_index_type!(i32);

impl From<RangeFull> for AxisIndex
{
    #[inline]
    fn from(r: RangeFull) -> AxisIndex
    {
        AxisIndex::Slice(Slice::from(r))
    }
}

impl From<Slice> for AxisIndex
{
    #[inline]
    fn from(s: Slice) -> AxisIndex
    {
        AxisIndex::Slice(s)
    }
}

/// An ordered association from dimension name to [`AxisIndex`].
///
/// Build one with the [`sel!`](crate::sel) macro, with [`Indexers::with`],
/// or from an array or vector of pairs:
///
/// ```
/// use dims::{sel, Indexers};
///
/// let a = sel![x = 0, y = 1..];
/// let b = Indexers::new().with("x", 0).with("y", 1..);
/// let c = Indexers::from([("x", 0)]);
/// assert_eq!(a, b);
/// assert_eq!(c.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Indexers
{
    entries: Vec<(String, AxisIndex)>,
}

impl Indexers
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Append an index for dimension `dim`.
    pub fn with(mut self, dim: impl Into<String>, index: impl Into<AxisIndex>) -> Self
    {
        self.push(dim, index);
        self
    }

    pub fn push(&mut self, dim: impl Into<String>, index: impl Into<AxisIndex>)
    {
        self.entries.push((dim.into(), index.into()));
    }

    pub fn len(&self) -> usize
    {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.entries.is_empty()
    }

    /// The index given for `dim`, if any.
    pub fn get(&self, dim: &str) -> Option<&AxisIndex>
    {
        self.entries
            .iter()
            .find(|(name, _)| name == dim)
            .map(|(_, index)| index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AxisIndex)>
    {
        self.entries.iter().map(|(name, index)| (name.as_str(), index))
    }
}

impl<S, I, const N: usize> From<[(S, I); N]> for Indexers
where
    S: Into<String>,
    I: Into<AxisIndex>,
{
    fn from(pairs: [(S, I); N]) -> Self
    {
        pairs.into_iter().collect()
    }
}

impl<S, I> From<Vec<(S, I)>> for Indexers
where
    S: Into<String>,
    I: Into<AxisIndex>,
{
    fn from(pairs: Vec<(S, I)>) -> Self
    {
        pairs.into_iter().collect()
    }
}

impl<S, I> FromIterator<(S, I)> for Indexers
where
    S: Into<String>,
    I: Into<AxisIndex>,
{
    fn from_iter<T: IntoIterator<Item = (S, I)>>(iter: T) -> Self
    {
        Indexers {
            entries: iter
                .into_iter()
                .map(|(dim, index)| (dim.into(), index.into()))
                .collect(),
        }
    }
}

/// Resolve a possibly negative index against an axis of length `len`.
pub(crate) fn abs_index(dim: &str, index: isize, len: usize) -> Result<usize, DimsError>
{
    let resolved = if index < 0 { index + len as isize } else { index };
    if resolved < 0 || resolved as usize >= len {
        return Err(DimsError::IndexOutOfBounds {
            dim: dim.to_string(),
            index,
            len,
        });
    }
    Ok(resolved as usize)
}

/// Clamp a slice to an axis of length `len`, resolving negative bounds.
///
/// The returned slice has non-negative bounds within `0..=len` and
/// `start <= end`, so it never panics when applied to the axis.
pub(crate) fn clamp_slice(dim: &str, slice: Slice, len: usize) -> Result<Slice, DimsError>
{
    if slice.step == 0 {
        return Err(DimsError::ZeroStep(dim.to_string()));
    }
    let len_i = len as isize;
    let resolve = |i: isize| -> isize {
        let i = if i < 0 { i + len_i } else { i };
        i.clamp(0, len_i)
    };
    let start = resolve(slice.start);
    let end = slice.end.map_or(len_i, resolve).max(start);
    Ok(Slice::new(start, Some(end), slice.step))
}
