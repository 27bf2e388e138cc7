// Copyright 2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![doc(html_root_url = "https://docs.rs/dims/0.1/")]
#![allow(clippy::should_implement_trait, clippy::len_without_is_empty)]
#![doc(test(attr(deny(warnings))))]
#![doc(test(attr(allow(unused_variables))))]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! The `dims` crate provides [`DimensionedArray`], an n-dimensional array
//! whose axes have **names** and whose values carry a physical **unit**.
//!
//! - Values are stored in an [`ndarray::ArrayD`].
//! - Elementwise binary operations align the operands by dimension name:
//!   shared dims are transposed to match and missing dims are broadcast.
//!   The left operand's dimension order is kept, the right operand's new
//!   dims follow. See [`DimensionedArray::elemwise_binary`].
//! - Every operation checks units: addition requires identical units,
//!   multiplication combines them, transcendental functions require a
//!   dimensionless operand. A unit of `None` disables unit tracking and is
//!   distinct from the dimensionless unit.
//! - Arrays are values; no operation mutates its operands.
//!
//! ```
//! use dims::{sel, DimensionedArray, StringUnit};
//! use ndarray::Array;
//!
//! let m = Some(StringUnit::new("m"));
//! let xy = DimensionedArray::new(Array::<f64, _>::ones((2, 3)).into_dyn(), ["x", "y"], m.clone())?;
//! let yx = DimensionedArray::new(Array::<f64, _>::ones((3, 2)).into_dyn(), ["y", "x"], m.clone())?;
//!
//! let sum = xy.add(&yx)?;
//! assert_eq!(sum.dims(), ["x", "y"]);
//! assert_eq!(sum.unit(), m.as_ref());
//!
//! let area = xy.mul(&yx)?;
//! assert_eq!(area.unit(), Some(&StringUnit::new("m*m")));
//!
//! assert!(xy.exp().is_err());
//! assert_eq!(xy.select(sel![x = 0])?.dims(), ["y"]);
//! # Ok::<(), dims::DimsError>(())
//! ```
//!
//! ## Crate Feature Flags
//!
//! - `std`: enabled by default; required for the transcendental functions.
//! - `approx`: implementations of the `approx` comparison traits.
//! - `serde`: serialization with `serde`; dims are validated on
//!   deserialization.

extern crate alloc;

#[macro_use]
mod macros;

pub mod align;
mod array_approx;
#[cfg(feature = "serde")]
mod array_serde;
mod arrayformat;
mod dimensioned_array;
mod error;
mod impl_float_maths;
mod impl_ops;
mod index;
pub mod prelude;
mod unit;

pub use crate::dimensioned_array::{DimensionedArray, Sizes};
pub use crate::error::{DimsError, ErrorKind, ShapeErrorRepr};
pub use crate::index::{AxisIndex, Indexers};
pub use crate::unit::{combine_units, divide_units, identical_units, require_dimensionless, StringUnit, Unit};

pub use ndarray::Slice;
