// Copyright 2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use dims::{DimensionedArray, StringUnit};
use ndarray::Array;
use ndarray::IxDyn;
use ndarray::Order;
use ndarray::ShapeBuilder;

use num_traits::Num;

/// Builder for a `DimensionedArray` with generated elements.
///
/// ```
/// use dims_gen::array_builder::ArrayBuilder;
///
/// let a = ArrayBuilder::new([("x", 2), ("y", 3)]).unit("m").build::<i32>();
/// assert_eq!(a.values().as_slice(), Some(&[0, 1, 2, 3, 4, 5][..]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayBuilder
{
    dims: Vec<String>,
    shape: Vec<usize>,
    unit: Option<StringUnit>,
    memory_order: Order,
    generator: ElementGenerator,
}

/// How to generate elements
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ElementGenerator
{
    /// 0, 1, 2, ... in logical row major order
    Sequential,
    Zero,
    One,
}

impl Default for ArrayBuilder
{
    fn default() -> Self
    {
        Self::new(Vec::<(String, usize)>::new())
    }
}

impl ArrayBuilder
{
    /// A builder for an array with the given dimension names and sizes, no
    /// unit, sequential elements and row major memory order.
    pub fn new<I, S>(sizes: I) -> Self
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        let (dims, shape) = sizes.into_iter().map(|(d, n)| (d.into(), n)).unzip();
        ArrayBuilder {
            dims,
            shape,
            unit: None,
            memory_order: Order::C,
            generator: ElementGenerator::Sequential,
        }
    }

    pub fn unit(mut self, unit: &str) -> Self
    {
        self.unit = Some(StringUnit::new(unit));
        self
    }

    pub fn dimensionless(mut self) -> Self
    {
        self.unit = Some(StringUnit::dimensionless());
        self
    }

    pub fn memory_order(mut self, order: Order) -> Self
    {
        self.memory_order = order;
        self
    }

    pub fn generator(mut self, generator: ElementGenerator) -> Self
    {
        self.generator = generator;
        self
    }

    /// Build the array.
    ///
    /// **Panics** if a dimension name is repeated.
    pub fn build<T>(self) -> DimensionedArray<T>
    where T: Num + Clone
    {
        let size = self.shape.iter().product();
        let elements: Vec<T> = match self.generator {
            ElementGenerator::Zero => vec![T::zero(); size],
            ElementGenerator::One => vec![T::one(); size],
            ElementGenerator::Sequential => {
                let mut current = T::zero();
                (0..size)
                    .map(|_| {
                        let ret = current.clone();
                        current = ret.clone() + T::one();
                        ret
                    })
                    .collect()
            }
        };
        // Fill in row major order, then copy into the requested memory order
        // so that the logical contents do not depend on it.
        let values = Array::from_shape_vec(IxDyn(&self.shape), elements).unwrap();
        let mut target = Array::from_elem(IxDyn(&self.shape).set_f(self.memory_order == Order::F), T::zero());
        target.assign(&values);
        DimensionedArray::new(target, self.dims, self.unit).unwrap()
    }
}

#[test]
fn test_order()
{
    let (m, n) = (12, 13);
    let c = ArrayBuilder::new([("x", m), ("y", n)])
        .memory_order(Order::C)
        .build::<i32>();
    let f = ArrayBuilder::new([("x", m), ("y", n)])
        .memory_order(Order::F)
        .build::<i32>();

    assert_eq!(c.shape(), &[m, n]);
    assert_eq!(f.shape(), &[m, n]);
    assert_eq!(c.values().strides(), &[n as isize, 1]);
    assert_eq!(f.values().strides(), &[1, m as isize]);
    assert_eq!(c, f);
}

#[test]
fn test_generators()
{
    let z = ArrayBuilder::new([("x", 3)])
        .generator(ElementGenerator::Zero)
        .build::<f64>();
    let o = ArrayBuilder::new([("x", 3)])
        .generator(ElementGenerator::One)
        .dimensionless()
        .build::<f64>();
    assert!(z.values().iter().all(|&x| x == 0.));
    assert!(o.values().iter().all(|&x| x == 1.));
    assert_eq!(o.unit(), Some(&StringUnit::dimensionless()));
}
