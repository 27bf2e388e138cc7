// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use core::fmt;

use crate::DimensionedArray;

/// Format the header line: the sizes and the unit.
fn format_header<A, U>(array: &DimensionedArray<A, U>, f: &mut fmt::Formatter<'_>) -> fmt::Result
where U: fmt::Display
{
    write!(f, "<DimensionedArray {}", array.sizes())?;
    match array.unit() {
        Some(unit) => write!(f, " [{}]", unit)?,
        None => write!(f, " [no unit]")?,
    }
    writeln!(f, ">")
}

// Element formatting is delegated to ndarray, so that format flags such as
// precision and width apply to the values.
macro_rules! impl_format {
    ($trt:ident) => {
        #[doc = concat!("Format the array using `", stringify!($trt), "` formatting for the values.")]
        ///
        /// The first line shows the dims with their sizes and the unit; the
        /// values follow in ndarray's nested bracket format, truncated the
        /// same way for large arrays.
        impl<A, U> fmt::$trt for DimensionedArray<A, U>
        where
            A: fmt::$trt,
            U: fmt::Display,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
            {
                format_header(self, f)?;
                fmt::$trt::fmt(self.values(), f)
            }
        }
    };
}

impl_format!(Display);
impl_format!(LowerExp);
impl_format!(UpperExp);
impl_format!(LowerHex);
