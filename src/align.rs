// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Alignment of two labeled arrays before an elementwise operation.
//!
//! Alignment happens in three steps:
//!
//! 1. [`merge_dims`] decides the dimension order of the result: the left
//!    operand's dims in their order, then the right operand's remaining dims
//!    in their order.
//! 2. [`align_view`] permutes an operand's axes into merged order and inserts
//!    a length-1 axis for each dimension it lacks.
//! 3. [`co_broadcast`] computes the common shape of the aligned operands, so
//!    both can be broadcast to it.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use ndarray::{ArrayViewD, Axis, IxDyn};

use crate::error::DimsError;

/// Merge two dimension lists, preferring the order of `left`.
///
/// ```
/// use dims::align::merge_dims;
///
/// assert_eq!(merge_dims(&["x", "y"], &["y", "x", "z"]), ["x", "y", "z"]);
/// assert_eq!(merge_dims(&["x", "y"], &["y", "z"]), ["x", "y", "z"]);
/// ```
pub fn merge_dims<L, R>(left: &[L], right: &[R]) -> Vec<String>
where
    L: AsRef<str>,
    R: AsRef<str>,
{
    let mut merged: Vec<String> = left.iter().map(|d| d.as_ref().to_string()).collect();
    for d in right {
        let d = d.as_ref();
        if !merged.iter().any(|m| m == d) {
            merged.push(d.to_string());
        }
    }
    merged
}

/// Return a view of `values`, labeled by `dims`, whose axes line up with
/// `merged`.
///
/// Every name in `dims` must occur in `merged`. Dimensions of `merged` that
/// are missing from `dims` become axes of length 1.
pub fn align_view<'a, A, S>(values: ArrayViewD<'a, A>, dims: &[S], merged: &[String]) -> ArrayViewD<'a, A>
where S: AsRef<str>
{
    debug_assert_eq!(values.ndim(), dims.len());
    let axis_of = |name: &str| dims.iter().position(|d| d.as_ref() == name);
    let perm: Vec<usize> = merged.iter().filter_map(|name| axis_of(name)).collect();
    debug_assert_eq!(perm.len(), dims.len(), "all dims must be part of the merged dims");

    let mut view = values.permuted_axes(IxDyn(&perm));
    // Insert in increasing position so that earlier insertions are already
    // in place when later ones are made.
    for (i, name) in merged.iter().enumerate() {
        if axis_of(name).is_none() {
            view = view.insert_axis(Axis(i));
        }
    }
    view
}

/// Calculate the common shape that two aligned shapes can be broadcast to.
///
/// Both shapes must have one extent per name in `merged`. Extents agree if
/// they are equal or if one of them is 1; otherwise the error names the
/// offending dimension.
pub fn co_broadcast(shape1: &[usize], shape2: &[usize], merged: &[String]) -> Result<Vec<usize>, DimsError>
{
    debug_assert_eq!(shape1.len(), merged.len());
    debug_assert_eq!(shape2.len(), merged.len());
    let mut out = shape1.to_vec();
    for ((out, &s2), name) in out.iter_mut().zip(shape2).zip(merged) {
        if *out != s2 {
            if *out == 1 {
                *out = s2
            } else if s2 != 1 {
                return Err(DimsError::IncompatibleShapes {
                    dim: name.clone(),
                    left: *out,
                    right: s2,
                });
            }
        }
    }
    Ok(out)
}
