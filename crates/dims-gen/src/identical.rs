// Copyright 2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use dims::{DimensionedArray, Unit};

/// Return `true` if the arrays have the same dims (in the same order), the
/// same unit, the same shape and equal values.
///
/// A unit of `None` is only identical to `None`.
pub fn identical<A, U>(a: &DimensionedArray<A, U>, b: &DimensionedArray<A, U>) -> bool
where
    A: PartialEq,
    U: Unit,
{
    a.dims() == b.dims() && a.unit() == b.unit() && a.values() == b.values()
}

/// Assert that two arrays are [`identical`].
///
/// **Panics** with a message describing the first difference found.
#[track_caller]
pub fn assert_identical<A, U>(actual: &DimensionedArray<A, U>, expected: &DimensionedArray<A, U>)
where
    A: PartialEq + fmt::Debug,
    U: Unit,
{
    if actual.dims() != expected.dims() {
        panic!("dims differ: {:?} != {:?}", actual.dims(), expected.dims());
    }
    if actual.unit() != expected.unit() {
        panic!("units differ: {:?} != {:?}", actual.unit(), expected.unit());
    }
    if actual.values() != expected.values() {
        panic!("values differ:\n{:?}\n!=\n{:?}", actual.values(), expected.values());
    }
}
