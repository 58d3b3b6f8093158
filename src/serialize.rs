//! Serde support: a typed matrix is a sequence of rows of raw values.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::backend::{Backend, Zeros};
use crate::index::IndexList;
use crate::matrix::TypedMatrix;

impl<B, R, C> Serialize for TypedMatrix<B, R, C>
where
    B: Backend,
    B::Raw: Serialize,
    R: IndexList,
    C: IndexList,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_raw_rows().serialize(serializer)
    }
}

impl<'de, B, R, C> Deserialize<'de> for TypedMatrix<B, R, C>
where
    B: Zeros,
    B::Raw: Deserialize<'de>,
    R: IndexList,
    C: IndexList,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<B::Raw>>::deserialize(deserializer)?;
        Self::from_raw_rows(rows).map_err(D::Error::custom)
    }
}
