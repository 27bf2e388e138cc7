// Copyright 2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! dims prelude.
//!
//! This module contains the most used types, traits, functions, and macros
//! that you can import easily as a group.
//!
//! ```
//! use dims::prelude::*;
//!
//! # let _ = Indexers::new();
//! ```

#[doc(no_inline)]
pub use crate::{DimensionedArray, Sizes};

#[doc(no_inline)]
pub use crate::{StringUnit, Unit};

#[doc(no_inline)]
pub use crate::{combine_units, divide_units, identical_units};

#[doc(no_inline)]
pub use crate::{AxisIndex, Indexers, Slice};

#[doc(no_inline)]
pub use crate::{DimsError, ErrorKind};

pub use crate::sel;
