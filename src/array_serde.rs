// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use ndarray::ArrayD;
use serde::de;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::DimensionedArray;

/// Format version of serialized arrays; bumped when the layout changes.
const ARRAY_FORMAT_VERSION: u8 = 1u8;

/// Verifies that the version of the deserialized array matches the current
/// `ARRAY_FORMAT_VERSION`.
fn verify_version<E>(v: u8) -> Result<(), E>
where E: de::Error
{
    if v != ARRAY_FORMAT_VERSION {
        let err_msg = format!("unknown array version: {}", v);
        Err(de::Error::custom(err_msg))
    } else {
        Ok(())
    }
}

/// **Requires crate feature `"serde"`**
impl<A, U> Serialize for DimensionedArray<A, U>
where
    A: Serialize,
    U: Serialize,
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where Se: Serializer
    {
        let mut state = serializer.serialize_struct("DimensionedArray", 4)?;
        state.serialize_field("v", &ARRAY_FORMAT_VERSION)?;
        state.serialize_field("dims", self.dims())?;
        state.serialize_field("unit", &self.unit())?;
        state.serialize_field("values", self.values())?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename = "DimensionedArray")]
struct RawArray<A, U>
{
    v: u8,
    dims: Vec<String>,
    unit: Option<U>,
    values: ArrayD<A>,
}

/// **Requires crate feature `"serde"`**
///
/// The dims are checked against the values like in
/// [`DimensionedArray::new`].
impl<'de, A, U> Deserialize<'de> for DimensionedArray<A, U>
where
    A: Deserialize<'de>,
    U: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<DimensionedArray<A, U>, D::Error>
    where D: Deserializer<'de>
    {
        let raw = RawArray::<A, U>::deserialize(deserializer)?;
        verify_version(raw.v)?;
        DimensionedArray::new(raw.values, raw.dims, raw.unit).map_err(de::Error::custom)
    }
}
