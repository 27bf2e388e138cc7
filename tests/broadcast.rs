use dims::prelude::*;
use dims_gen::array_builder::ArrayBuilder;
use dims_gen::assert_identical;
use itertools::iproduct;
use ndarray::{Array, ArrayD, IxDyn, Order};
use quickcheck::quickcheck;

fn ones(shape: &[usize], dims: &[&str]) -> DimensionedArray<f64>
{
    DimensionedArray::new(Array::ones(IxDyn(shape)), dims.iter().copied(), None).unwrap()
}

fn first<U: Clone>(a: Option<&U>, _b: Option<&U>) -> Result<Option<U>, DimsError>
{
    Ok(a.cloned())
}

#[test]
fn elemwise_binary_broadcasts_dims()
{
    let xy = ones(&[2, 3], &["x", "y"]);
    let yz = ones(&[3, 4], &["y", "z"]);
    let result = xy.elemwise_binary(&yz, |a, b| &a + &b, first).unwrap();
    assert_eq!(result.dims(), ["x", "y", "z"]);
    assert_eq!(result.sizes(), [("x", 2), ("y", 3), ("z", 4)]);
}

#[test]
fn elemwise_binary_transposes_dims()
{
    let xy = ones(&[2, 3], &["x", "y"]);
    let yx = ones(&[3, 2], &["y", "x"]);
    let result = xy.elemwise_binary(&yx, |a, b| &a + &b, first).unwrap();
    assert_eq!(result.dims(), ["x", "y"]);

    let result = yx.elemwise_binary(&xy, |a, b| &a + &b, first).unwrap();
    assert_eq!(result.dims(), ["y", "x"]);
}

#[test]
fn elemwise_binary_broadcasts_and_transposes_dims()
{
    let xy = ones(&[2, 3], &["x", "y"]);
    let yxz = ones(&[3, 2, 4], &["y", "x", "z"]);
    let result = xy.elemwise_binary(&yxz, |a, b| &a + &b, first).unwrap();
    assert_eq!(result.sizes(), [("x", 2), ("y", 3), ("z", 4)]);
}

#[test]
fn elemwise_binary_values_follow_names()
{
    // a(x, y) = 10 * x + y, b(y, x) = 100 * y + x
    let a = ArrayBuilder::new([("x", 2), ("y", 3)]).build::<i64>();
    let a = a.mapv(|v| (v / 3) * 10 + v % 3);
    let b = DimensionedArray::new(
        Array::from_shape_fn(IxDyn(&[3, 2]), |ix| 100 * ix[0] as i64 + ix[1] as i64),
        ["y", "x"],
        None,
    )
    .unwrap();
    let c = a.elemwise_binary(&b, |l, r| &l + &r, identical_units).unwrap();
    for (x, y) in iproduct!(0..2, 0..3) {
        let expected = (10 * x + y) + (100 * y + x);
        assert_eq!(c.values()[[x, y]], expected as i64);
    }
}

#[test]
fn elemwise_binary_with_scalar()
{
    let a = ArrayBuilder::new([("x", 3)]).unit("m").build::<f64>();
    let s = DimensionedArray::scalar(2., Some(StringUnit::new("m")));
    let left = a.add(&s).unwrap();
    let right = s.add(&a).unwrap();
    assert_eq!(left.dims(), ["x"]);
    assert_identical(&left, &right);
    assert_eq!(left.values().as_slice(), Some(&[2., 3., 4.][..]));
}

#[test]
fn elemwise_binary_scalars()
{
    let a = DimensionedArray::<f64>::scalar(2., None);
    let b = DimensionedArray::<f64>::scalar(3., None);
    let c = a.mul(&b).unwrap();
    assert!(c.dims().is_empty());
    assert_eq!(c.values().first(), Some(&6.));
}

#[test]
fn elemwise_binary_disjoint_dims()
{
    let a = ArrayBuilder::new([("x", 2)]).build::<i32>();
    let b = ArrayBuilder::new([("y", 3)]).build::<i32>();
    let c = a.mul(&b).unwrap();
    assert_eq!(c.dims(), ["x", "y"]);
    assert_eq!(c.values(), &ndarray::arr2(&[[0, 0, 0], [0, 1, 2]]).into_dyn());
}

#[test]
fn elemwise_binary_broadcasts_length_one()
{
    let a = ArrayBuilder::new([("x", 1), ("y", 3)]).build::<i32>();
    let b = ArrayBuilder::new([("x", 4)]).build::<i32>();
    let c = a.add(&b).unwrap();
    assert_eq!(c.sizes(), [("x", 4), ("y", 3)]);
}

#[test]
fn elemwise_binary_incompatible_sizes()
{
    let a = ones(&[2, 3], &["x", "y"]);
    let b = ones(&[4], &["y"]);
    let err = a.add(&b).unwrap_err();
    assert_eq!(
        err,
        DimsError::IncompatibleShapes {
            dim: "y".to_string(),
            left: 3,
            right: 4
        }
    );
    assert_eq!(err.kind(), ErrorKind::Shape);
}

#[test]
fn elemwise_binary_unit_error_wins()
{
    let a = ArrayBuilder::new([("x", 2)]).unit("m").build::<f64>();
    let b = ArrayBuilder::new([("x", 3)]).unit("s").build::<f64>();
    assert_eq!(a.add(&b).unwrap_err().kind(), ErrorKind::Unit);
}

#[test]
fn elemwise_binary_memory_order()
{
    let c = ArrayBuilder::new([("x", 3), ("y", 4)]).build::<i32>();
    let f = ArrayBuilder::new([("y", 4), ("x", 3)])
        .memory_order(Order::F)
        .build::<i32>();
    let f_t = f.transpose(["x", "y"]).unwrap();
    assert_identical(&c.add(&f).unwrap(), &c.add(&f_t).unwrap());
}

/// Reference result: index both operands by name for every position of the
/// merged dims.
fn reference_add(a: &DimensionedArray<i32>, b: &DimensionedArray<i32>) -> ArrayD<i32>
{
    let merged = dims::align::merge_dims(a.dims(), b.dims());
    let shape: Vec<usize> = merged
        .iter()
        .map(|d| a.sizes().get(d).or(b.sizes().get(d)).unwrap())
        .collect();
    Array::from_shape_fn(IxDyn(&shape), |ix| {
        let pick = |x: &DimensionedArray<i32>| {
            let pos: Vec<usize> = x
                .dims()
                .iter()
                .map(|d| ix[merged.iter().position(|m| m == d).unwrap()])
                .collect();
            x.values()[IxDyn(&pos)]
        };
        pick(a) + pick(b)
    })
}

quickcheck! {
    fn merged_dims_prefer_left_order(perm: usize, extra: bool) -> bool {
        let names = ["x", "y", "z"];
        let mut right: Vec<&str> = names.to_vec();
        right.rotate_left(perm % 3);
        if extra {
            right.push("w");
        }
        let a = ones(&[1, 1, 1], &names);
        let b = ones(&vec![1; right.len()], &right);
        let c = a.add(&b).unwrap();
        let mut expected = names.to_vec();
        if extra {
            expected.push("w");
        }
        c.dims() == &expected[..]
    }

    fn add_matches_reference(rot: usize, nx: u8, ny: u8, nz: u8) -> bool {
        let (nx, ny, nz) = (nx as usize % 3 + 1, ny as usize % 3 + 1, nz as usize % 3 + 1);
        let a = ArrayBuilder::new([("x", nx), ("y", ny)]).build::<i32>();
        let mut sizes = vec![("y", ny), ("z", nz), ("x", nx)];
        sizes.rotate_left(rot % 3);
        let b = ArrayBuilder::new(sizes).build::<i32>();
        let c = a.add(&b).unwrap();
        c.dims() == ["x", "y", "z"] && c.values() == &reference_add(&a, &b)
    }
}
