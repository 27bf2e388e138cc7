// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::DimsError;
use crate::unit::{combine_units, divide_units, identical_units, Unit};
use crate::DimensionedArray;

macro_rules! impl_binary_op(
    ($trt:ident, $operator:tt, $mth:ident, $unit_rule:ident, $doc:expr, $unit_doc:expr) => (
impl<A, U> DimensionedArray<A, U>
where
    A: Clone + $trt<Output = A>,
    U: Unit,
{
    /// Perform elementwise
    #[doc=$doc]
    /// between `self` and `rhs`, and return the result as a new array.
    ///
    /// The dimensions are aligned by name before the operation: see
    /// [`elemwise_binary`](DimensionedArray::elemwise_binary).
    ///
    #[doc=$unit_doc]
    pub fn $mth(&self, rhs: &DimensionedArray<A, U>) -> Result<DimensionedArray<A, U>, DimsError>
    {
        self.elemwise_binary(rhs, |a, b| &a $operator &b, $unit_rule)
    }
}
    );
);

impl_binary_op!(Add, +, add, identical_units, "addition",
    "**Errors** if the units are not identical (`\"Units must be identical\"`).");
impl_binary_op!(Sub, -, sub, identical_units, "subtraction",
    "**Errors** if the units are not identical (`\"Units must be identical\"`).");
impl_binary_op!(Mul, *, mul, combine_units, "multiplication",
    "The unit of the result is the product of the units; **errors** if only one operand tracks units.");
impl_binary_op!(Div, /, div, divide_units, "division",
    "The unit of the result is the quotient of the units; **errors** if only one operand tracks units.");

impl<A, U> Neg for DimensionedArray<A, U>
where
    A: Clone + Neg<Output = A>,
    U: Unit,
{
    type Output = Self;
    /// Perform an elementwise negation of `self` and return the result.
    fn neg(self) -> Self
    {
        let (values, dims, unit) = self.into_parts();
        DimensionedArray::from_parts(values.mapv_into(|x| -x), dims, unit)
    }
}

impl<'a, A, U> Neg for &'a DimensionedArray<A, U>
where
    A: Clone + Neg<Output = A>,
    U: Unit,
{
    type Output = DimensionedArray<A, U>;
    /// Perform an elementwise negation of reference `self` and return the
    /// result as a new array.
    fn neg(self) -> DimensionedArray<A, U>
    {
        self.mapv(|x| -x)
    }
}
