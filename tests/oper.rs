use dims::prelude::*;
use dims_gen::array_builder::{ArrayBuilder, ElementGenerator};
use dims_gen::assert_identical;
use ndarray::{arr1, arr2, Array, IxDyn};

fn units() -> [Option<StringUnit>; 3]
{
    [None, Some(StringUnit::dimensionless()), Some(StringUnit::new("m"))]
}

fn labeled(values: ndarray::ArrayD<f64>, dims: &[&str], unit: Option<StringUnit>) -> DimensionedArray<f64>
{
    DimensionedArray::new(values, dims.iter().copied(), unit).unwrap()
}

#[test]
fn neg()
{
    for unit in units() {
        let da = labeled(Array::ones(IxDyn(&[2, 3])), &["x", "y"], unit.clone());
        let result = -&da;
        assert_identical(&result, &labeled(-Array::ones(IxDyn(&[2, 3])), &["x", "y"], unit.clone()));
        assert_identical(&-result.clone(), &da);
        assert_identical(&da.negate(), &result);
    }
}

#[test]
fn abs_keeps_unit()
{
    let da = labeled(arr1(&[-1., 2., -3.]).into_dyn(), &["x"], Some(StringUnit::new("K")));
    assert_identical(&da.abs(), &labeled(arr1(&[1., 2., 3.]).into_dyn(), &["x"], Some(StringUnit::new("K"))));
}

#[test]
fn exp_raises_if_unit_is_not_dimensionless()
{
    let da = labeled(Array::ones(IxDyn(&[2, 3])), &["x", "y"], Some(StringUnit::new("m")));
    let err = da.exp().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unit);
    assert!(err.to_string().contains("Unit must be dimensionless"), "{}", err);
    assert!(da.ln().is_err());
    assert!(da.sin().is_err());
}

#[test]
fn exp_accepts_none_and_dimensionless()
{
    for unit in [None, Some(StringUnit::dimensionless())] {
        let da = labeled(arr1(&[0., 1.]).into_dyn(), &["x"], unit.clone());
        let res = da.exp().unwrap();
        assert_eq!(res.dims(), ["x"]);
        assert_eq!(res.unit(), unit.as_ref());
        assert_eq!(res.values(), &arr1(&[1., 1f64.exp()]).into_dyn());
    }
}

#[test]
fn ln_inverts_exp()
{
    let da = ArrayBuilder::new([("x", 3), ("y", 2)]).dimensionless().build::<f64>();
    let back = da.exp().unwrap().ln().unwrap();
    assert_eq!(back.dims(), da.dims());
    for (a, b) in back.values().iter().zip(da.values()) {
        assert!((a - b).abs() < 1e-12);
    }
}

#[test]
fn add_raises_if_units_differ()
{
    let da1 = labeled(Array::ones(IxDyn(&[2, 3])), &["x", "y"], Some(StringUnit::new("m")));
    let da2 = labeled(Array::ones(IxDyn(&[2, 3])), &["x", "y"], Some(StringUnit::new("s")));
    let err = da1.add(&da2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unit);
    assert!(err.to_string().contains("Units must be identical"), "{}", err);
    assert!(da1.sub(&da2).is_err());
}

#[test]
fn add_raises_if_only_one_unit_is_none()
{
    let none = labeled(Array::ones(IxDyn(&[2])), &["x"], None);
    for unit in [StringUnit::dimensionless(), StringUnit::new("m")] {
        let some = labeled(Array::ones(IxDyn(&[2])), &["x"], Some(unit));
        assert!(none.add(&some).is_err());
        assert!(some.add(&none).is_err());
    }
}

#[test]
fn add_with_equal_units()
{
    for unit in units() {
        let a = labeled(arr1(&[1., 2.]).into_dyn(), &["x"], unit.clone());
        let b = labeled(arr1(&[10., 20.]).into_dyn(), &["x"], unit.clone());
        assert_identical(&a.add(&b).unwrap(), &labeled(arr1(&[11., 22.]).into_dyn(), &["x"], unit.clone()));
        assert_identical(&b.sub(&a).unwrap(), &labeled(arr1(&[9., 18.]).into_dyn(), &["x"], unit.clone()));
    }
}

#[test]
fn mul_combines_units()
{
    let a = labeled(arr1(&[1., 2.]).into_dyn(), &["x"], Some(StringUnit::new("m")));
    let b = labeled(arr1(&[3., 4.]).into_dyn(), &["x"], Some(StringUnit::new("s")));
    assert_identical(
        &a.mul(&b).unwrap(),
        &labeled(arr1(&[3., 8.]).into_dyn(), &["x"], Some(StringUnit::new("m*s"))),
    );
    assert_identical(
        &a.div(&b).unwrap(),
        &labeled(arr1(&[1. / 3., 0.5]).into_dyn(), &["x"], Some(StringUnit::new("m/s"))),
    );
    let ratio = a.div(&a).unwrap();
    assert!(ratio.unit().unwrap().is_dimensionless());
    assert!(ratio.exp().is_ok());
}

#[test]
fn mul_without_units()
{
    let a = labeled(arr1(&[1., 2.]).into_dyn(), &["x"], None);
    let b = labeled(arr1(&[3., 4.]).into_dyn(), &["x"], Some(StringUnit::new("s")));
    assert_eq!(a.mul(&a).unwrap().unit(), None);
    assert_eq!(a.mul(&b).unwrap_err().kind(), ErrorKind::Unit);
}

#[test]
fn integer_arithmetic()
{
    let a = ArrayBuilder::new([("x", 2), ("y", 2)]).build::<i32>();
    let b = ArrayBuilder::new([("y", 2)])
        .generator(ElementGenerator::One)
        .build::<i32>();
    let c = a.add(&b).unwrap();
    assert_eq!(c.values(), &arr2(&[[1, 2], [3, 4]]).into_dyn());
}
