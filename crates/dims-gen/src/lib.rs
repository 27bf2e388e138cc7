// Copyright 2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Test support for `dims`: builders for labeled arrays with generated
//! contents, and structural comparison helpers.

pub mod array_builder;
mod identical;

pub use crate::identical::{assert_identical, identical};
