// Copyright 2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Build an [`Indexers`](crate::Indexers) value from `name = index` pairs.
///
/// Each index is anything that converts into an
/// [`AxisIndex`](crate::AxisIndex): an integer, which removes the dimension,
/// or a range, which keeps it. Dimension names that are not valid Rust
/// identifiers can be given as string literals.
///
/// ```
/// use dims::{sel, DimensionedArray};
///
/// let a = DimensionedArray::<i32>::from_shape_vec([("x", 2), ("y", 3)], (0..6).collect(), None)?;
///
/// assert_eq!(a.select(sel![y = 1..])?.shape(), &[2, 2]);
/// assert_eq!(a.select(sel![x = 1, y = -1])?.values().first(), Some(&5));
/// assert_eq!(a.select(sel!["x" = 0])?.dims(), ["y"]);
/// # Ok::<(), dims::DimsError>(())
/// ```
#[macro_export]
macro_rules! sel {
    (@push $ix:ident) => {};
    (@push $ix:ident $name:ident = $index:expr $(, $($rest:tt)*)?) => {
        $ix.push(stringify!($name), $index);
        $crate::sel!(@push $ix $($($rest)*)?);
    };
    (@push $ix:ident $name:literal = $index:expr $(, $($rest:tt)*)?) => {
        $ix.push($name, $index);
        $crate::sel!(@push $ix $($($rest)*)?);
    };
    ($($t:tt)*) => {{
        #[allow(unused_mut)]
        let mut ix = $crate::Indexers::new();
        $crate::sel!(@push ix $($t)*);
        ix
    }};
}
