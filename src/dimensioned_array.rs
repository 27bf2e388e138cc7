// Copyright 2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use ndarray::{ArrayD, ArrayViewD, Axis, IxDyn, ShapeError};

use crate::align::{align_view, co_broadcast, merge_dims};
use crate::error::DimsError;
use crate::index::{abs_index, clamp_slice, AxisIndex, Indexers};
use crate::unit::{StringUnit, Unit};

/// An n-dimensional array with named dimensions and an optional unit.
///
/// The values are stored in an [`ArrayD`]; each axis of the values has a
/// unique name in `dims`, in axis order. The unit is `None` when unit
/// tracking is disabled.
///
/// Arrays are never modified in place; every operation returns a new array.
///
/// ```
/// use dims::{DimensionedArray, StringUnit};
/// use ndarray::Array;
///
/// let a = DimensionedArray::new(Array::<f64, _>::zeros((2, 3)).into_dyn(), ["x", "y"], Some(StringUnit::new("m")))?;
/// assert_eq!(a.sizes(), [("x", 2), ("y", 3)]);
/// # Ok::<(), dims::DimsError>(())
/// ```
#[derive(Clone, PartialEq)]
pub struct DimensionedArray<A, U = StringUnit>
{
    values: ArrayD<A>,
    dims: Vec<String>,
    unit: Option<U>,
}

/// The sizes of the dimensions of an array, in dimension order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Sizes<'a>
{
    dims: &'a [String],
    shape: &'a [usize],
}

impl<'a> Sizes<'a>
{
    /// The extent of dimension `dim`, if present.
    pub fn get(&self, dim: &str) -> Option<usize>
    {
        self.dims
            .iter()
            .position(|d| d == dim)
            .map(|axis| self.shape[axis])
    }

    pub fn len(&self) -> usize
    {
        self.dims.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.dims.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, usize)> + 'a
    {
        let (dims, shape) = (self.dims, self.shape);
        dims.iter().map(String::as_str).zip(shape.iter().copied())
    }
}

impl<'a, 'b, const N: usize> PartialEq<[(&'b str, usize); N]> for Sizes<'a>
{
    fn eq(&self, rhs: &[(&'b str, usize); N]) -> bool
    {
        self.len() == N && self.iter().zip(rhs).all(|((d, n), (rd, rn))| d == *rd && n == *rn)
    }
}

impl fmt::Display for Sizes<'_>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "(")?;
        for (i, (dim, n)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", dim, n)?;
        }
        write!(f, ")")
    }
}

fn check_dims(dims: &[String], ndim: usize) -> Result<(), DimsError>
{
    if dims.len() != ndim {
        return Err(DimsError::NdimMismatch {
            expected: ndim,
            actual: dims.len(),
        });
    }
    for (i, dim) in dims.iter().enumerate() {
        if dims[..i].contains(dim) {
            return Err(DimsError::DuplicateDim(dim.clone()));
        }
    }
    Ok(())
}

/// # Construction and properties
impl<A, U> DimensionedArray<A, U>
{
    /// Create a labeled array from `values`, one name per axis, and a unit.
    ///
    /// **Errors** if the number of names differs from the number of axes of
    /// `values`, or if a name occurs twice.
    pub fn new<I, S>(values: ArrayD<A>, dims: I, unit: Option<U>) -> Result<Self, DimsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let dims: Vec<String> = dims.into_iter().map(Into::into).collect();
        check_dims(&dims, values.ndim())?;
        Ok(DimensionedArray { values, dims, unit })
    }

    /// Create a labeled array of the given sizes from a vector in row major
    /// order.
    ///
    /// **Errors** if the number of elements does not match the sizes, or a
    /// name occurs twice.
    ///
    /// ```
    /// use dims::DimensionedArray;
    ///
    /// let a = DimensionedArray::<i32>::from_shape_vec([("x", 2), ("y", 3)], (0..6).collect(), None)?;
    /// assert_eq!(a.shape(), &[2, 3]);
    /// # Ok::<(), dims::DimsError>(())
    /// ```
    pub fn from_shape_vec<I, S>(sizes: I, v: Vec<A>, unit: Option<U>) -> Result<Self, DimsError>
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        let (dims, shape): (Vec<String>, Vec<usize>) = sizes.into_iter().map(|(d, n)| (d.into(), n)).unzip();
        let values = ArrayD::from_shape_vec(IxDyn(&shape), v).map_err(DimsError::from)?;
        Self::new(values, dims, unit)
    }

    /// Create a zero-dimensional array holding `value`.
    pub fn scalar(value: A, unit: Option<U>) -> Self
    {
        DimensionedArray {
            values: ndarray::arr0(value).into_dyn(),
            dims: Vec::new(),
            unit,
        }
    }

    /// Build an array without checking the dims; used where the result dims
    /// are known to be consistent.
    pub(crate) fn from_parts(values: ArrayD<A>, dims: Vec<String>, unit: Option<U>) -> Self
    {
        debug_assert!(check_dims(&dims, values.ndim()).is_ok());
        DimensionedArray { values, dims, unit }
    }

    /// The dimension names, in axis order.
    pub fn dims(&self) -> &[String]
    {
        &self.dims
    }

    /// The mapping from dimension name to extent, in dimension order.
    pub fn sizes(&self) -> Sizes<'_>
    {
        Sizes {
            dims: &self.dims,
            shape: self.values.shape(),
        }
    }

    pub fn shape(&self) -> &[usize]
    {
        self.values.shape()
    }

    pub fn ndim(&self) -> usize
    {
        self.dims.len()
    }

    /// The total number of elements.
    pub fn len(&self) -> usize
    {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.values.is_empty()
    }

    /// The unit, or `None` if unit tracking is disabled.
    pub fn unit(&self) -> Option<&U>
    {
        self.unit.as_ref()
    }

    pub fn values(&self) -> &ArrayD<A>
    {
        &self.values
    }

    /// The axis number of dimension `dim`.
    pub fn axis_of(&self, dim: &str) -> Option<Axis>
    {
        self.dims.iter().position(|d| d == dim).map(Axis)
    }

    fn require_axis(&self, dim: &str) -> Result<Axis, DimsError>
    {
        self.axis_of(dim)
            .ok_or_else(|| DimsError::DimNotFound(dim.to_string()))
    }

    pub fn into_parts(self) -> (ArrayD<A>, Vec<String>, Option<U>)
    {
        (self.values, self.dims, self.unit)
    }
}

/// # Indexing
impl<A, U> DimensionedArray<A, U>
where
    A: Clone,
    U: Clone,
{
    /// Index a one-dimensional array without naming its dimension.
    ///
    /// An integer index returns a zero-dimensional array; a slice keeps the
    /// dimension.
    ///
    /// **Errors** if the array is not one-dimensional, or the index is out
    /// of bounds.
    pub fn get(&self, index: impl Into<AxisIndex>) -> Result<Self, DimsError>
    {
        if self.ndim() != 1 {
            return Err(DimsError::NotOneD(self.ndim()));
        }
        let dim = self.dims[0].clone();
        self.select(Indexers::new().with(dim, index))
    }

    /// Index by dimension name.
    ///
    /// Dimensions indexed with an integer are removed from the result;
    /// dimensions indexed with a slice are kept with a reduced extent. The
    /// remaining dimensions keep their relative order.
    ///
    /// **Errors** if a name is not a dimension of the array or is given twice,
    /// or if an index is out of bounds.
    ///
    /// ```
    /// use dims::{sel, DimensionedArray};
    ///
    /// let a = DimensionedArray::<i32>::from_shape_vec([("x", 2), ("y", 3)], (0..6).collect(), None)?;
    /// let row = a.select(sel![x = 1])?;
    /// assert_eq!(row.dims(), ["y"]);
    /// assert_eq!(row.values().as_slice(), Some(&[3, 4, 5][..]));
    /// # Ok::<(), dims::DimsError>(())
    /// ```
    pub fn select(&self, indexers: impl Into<Indexers>) -> Result<Self, DimsError>
    {
        let indexers = indexers.into();
        let mut view = self.values.view();
        let mut collapse: Vec<(Axis, usize)> = Vec::new();
        let mut seen: Vec<&str> = Vec::with_capacity(indexers.len());
        for (dim, index) in indexers.iter() {
            if seen.contains(&dim) {
                return Err(DimsError::DuplicateDim(dim.to_string()));
            }
            seen.push(dim);
            let axis = self.require_axis(dim)?;
            let len = view.len_of(axis);
            match *index {
                AxisIndex::Index(i) => collapse.push((axis, abs_index(dim, i, len)?)),
                AxisIndex::Slice(s) => view = view.slice_axis_move(axis, clamp_slice(dim, s, len)?),
            }
        }
        // Remove axes from the back so that earlier axis numbers stay valid.
        collapse.sort_by(|a, b| b.0.index().cmp(&a.0.index()));
        for &(axis, i) in &collapse {
            view = view.index_axis_move(axis, i);
        }
        let dims = self
            .dims
            .iter()
            .enumerate()
            .filter(|(i, _)| !collapse.iter().any(|(axis, _)| axis.index() == *i))
            .map(|(_, d)| d.clone())
            .collect();
        Ok(DimensionedArray::from_parts(view.to_owned(), dims, self.unit.clone()))
    }

    /// Reorder the axes so that the dims are in the given order.
    ///
    /// **Errors** if `order` is not a permutation of the dims.
    pub fn transpose<I, S>(&self, order: I) -> Result<Self, DimsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut perm = Vec::with_capacity(self.ndim());
        for dim in order {
            let dim = dim.as_ref();
            let axis = self.require_axis(dim)?.index();
            if perm.contains(&axis) {
                return Err(DimsError::DuplicateDim(dim.to_string()));
            }
            perm.push(axis);
        }
        if perm.len() != self.ndim() {
            return Err(DimsError::NdimMismatch {
                expected: self.ndim(),
                actual: perm.len(),
            });
        }
        let dims = perm.iter().map(|&axis| self.dims[axis].clone()).collect();
        let values = self.values.view().permuted_axes(IxDyn(&perm));
        Ok(DimensionedArray::from_parts(values.to_owned(), dims, self.unit.clone()))
    }
}

/// # Elementwise operations
impl<A, U> DimensionedArray<A, U>
where U: Unit
{
    /// Apply a binary elementwise operation after aligning the dimensions of
    /// `self` and `other`.
    ///
    /// The result has the dims of `self`, in order, followed by the dims of
    /// `other` that `self` lacks, in their order. Shared dims are transposed
    /// to match, missing dims are broadcast.
    ///
    /// `values_op` receives both operands broadcast to the common shape and
    /// must return an array of that shape; `unit_op` decides the unit of the
    /// result (see [`identical_units`](crate::identical_units),
    /// [`combine_units`](crate::combine_units)).
    ///
    /// **Errors** if `unit_op` fails, if a shared dimension has extents that
    /// cannot be broadcast, or if `values_op` returns an array of the wrong
    /// shape.
    ///
    /// ```
    /// use dims::{identical_units, DimensionedArray};
    /// use ndarray::Array;
    ///
    /// let xy = DimensionedArray::<f64>::new(Array::<f64, _>::ones((2, 3)).into_dyn(), ["x", "y"], None)?;
    /// let yz = DimensionedArray::<f64>::new(Array::<f64, _>::ones((3, 4)).into_dyn(), ["y", "z"], None)?;
    /// let sum = xy.elemwise_binary(&yz, |a, b| &a + &b, identical_units)?;
    /// assert_eq!(sum.dims(), ["x", "y", "z"]);
    /// assert_eq!(sum.shape(), &[2, 3, 4]);
    /// # Ok::<(), dims::DimsError>(())
    /// ```
    pub fn elemwise_binary<B, C, F, G>(
        &self, other: &DimensionedArray<B, U>, values_op: F, unit_op: G,
    ) -> Result<DimensionedArray<C, U>, DimsError>
    where
        F: FnOnce(ArrayViewD<'_, A>, ArrayViewD<'_, B>) -> ArrayD<C>,
        G: FnOnce(Option<&U>, Option<&U>) -> Result<Option<U>, DimsError>,
    {
        let merged = merge_dims(&self.dims, &other.dims);
        let lhs = align_view(self.values.view(), &self.dims, &merged);
        let rhs = align_view(other.values.view(), &other.dims, &merged);

        let unit = unit_op(self.unit(), other.unit())?;

        let shape = co_broadcast(lhs.shape(), rhs.shape(), &merged)?;
        let (lhs, rhs) = match (lhs.broadcast(IxDyn(&shape)), rhs.broadcast(IxDyn(&shape))) {
            (Some(l), Some(r)) => (l, r),
            _ => return Err(ShapeError::from_kind(ndarray::ErrorKind::IncompatibleShape).into()),
        };
        let values = values_op(lhs, rhs);
        if values.shape() != &shape[..] {
            return Err(ShapeError::from_kind(ndarray::ErrorKind::IncompatibleShape).into());
        }
        Ok(DimensionedArray::from_parts(values, merged, unit))
    }

    /// Apply `f` to each element, keeping dims and unit.
    pub fn mapv<B, F>(&self, f: F) -> DimensionedArray<B, U>
    where
        A: Clone,
        F: FnMut(A) -> B,
    {
        DimensionedArray::from_parts(self.values.mapv(f), self.dims.clone(), self.unit.clone())
    }
}

impl<A, U> fmt::Debug for DimensionedArray<A, U>
where
    A: fmt::Debug,
    U: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("DimensionedArray")
            .field("dims", &self.dims)
            .field("unit", &self.unit)
            .field("values", &self.values)
            .finish()
    }
}
