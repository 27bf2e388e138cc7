extern crate dims;
extern crate serde_json;

use dims::{DimensionedArray, StringUnit};
use ndarray::{arr0, arr2, ArrayD};

fn labeled(values: ArrayD<f32>, dims: &[&str], unit: Option<&str>) -> DimensionedArray<f32>
{
    DimensionedArray::new(values, dims.iter().copied(), unit.map(StringUnit::new)).unwrap()
}

#[test]
fn serial_many_dim_serde()
{
    {
        let a = labeled(arr0::<f32>(2.72).into_dyn(), &[], None);
        let serial = serde_json::to_string(&a).unwrap();
        println!("Encode {:?} => {:?}", a, serial);
        let res = serde_json::from_str::<DimensionedArray<f32>>(&serial);
        println!("{:?}", res);
        assert_eq!(a, res.unwrap());
    }

    {
        let a = labeled(arr2(&[[3., 1., 2.2], [3.1, 4., 7.]]).into_dyn(), &["x", "y"], Some("m"));
        let serial = serde_json::to_string(&a).unwrap();
        println!("Encode {:?} => {:?}", a, serial);
        let res = serde_json::from_str::<DimensionedArray<f32>>(&serial);
        println!("{:?}", res);
        assert_eq!(a, res.unwrap());
    }

    {
        // A dimensionless unit must stay distinct from no unit.
        let a = labeled(arr2(&[[1., 2.]]).into_dyn(), &["x", "y"], Some(""));
        let serial = serde_json::to_string(&a).unwrap();
        let res = serde_json::from_str::<DimensionedArray<f32>>(&serial).unwrap();
        assert_eq!(res.unit(), Some(&StringUnit::dimensionless()));
    }
}

#[test]
fn serial_deserialize_through_serde_trait()
{
    let a = labeled(arr2(&[[1., 2., 3.]]).into_dyn(), &["x", "y"], Some("m"));
    let serial = serde_json::to_string(&a).unwrap();
    let mut deserializer = serde_json::Deserializer::from_str(&serial);
    let a_de: DimensionedArray<f32> = serde::Deserialize::deserialize(&mut deserializer).unwrap();
    assert_eq!(a, a_de);
}

#[test]
fn serial_unit_is_plain_string()
{
    let a = labeled(arr0::<f32>(1.).into_dyn(), &[], Some("m/s"));
    let value: serde_json::Value = serde_json::to_value(&a).unwrap();
    assert_eq!(value["unit"], "m/s");
    assert_eq!(value["dims"], serde_json::json!([]));
    assert_eq!(value["v"], 1);
}

#[test]
fn serial_wrong_count_dims()
{
    // Two names for a one-dimensional buffer
    let serial = r#"{"v":1,"dims":["x","y"],"unit":null,"values":{"v":1,"dim":[2],"data":[1.0,2.0]}}"#;
    let res = serde_json::from_str::<DimensionedArray<f32>>(serial);
    let err = res.unwrap_err();
    assert!(err.to_string().contains("Number of dimensions"), "{}", err);
}

#[test]
fn serial_duplicate_dims()
{
    let serial = r#"{"v":1,"dims":["x","x"],"unit":null,"values":{"v":1,"dim":[1,2],"data":[1.0,2.0]}}"#;
    let res = serde_json::from_str::<DimensionedArray<f32>>(serial);
    assert!(res.is_err());
}

#[test]
fn serial_wrong_version()
{
    let serial = r#"{"v":2,"dims":["x"],"unit":null,"values":{"v":1,"dim":[2],"data":[1.0,2.0]}}"#;
    let res = serde_json::from_str::<DimensionedArray<f32>>(serial);
    let err = res.unwrap_err();
    assert!(err.to_string().contains("unknown array version"), "{}", err);
}
