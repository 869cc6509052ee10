//! Serde adapter for arkworks types, used via `#[serde(with = "serde_impl")]`.
//!
//! Values travel as their canonical (compressed) byte encoding.
//! Deserialization is checked, so invalid curve points are rejected at the
//! wire boundary rather than reaching verification logic.

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use serde::de::Error as DeError;
use serde::ser::Error as SerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<T, S>(obj: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: CanonicalSerialize,
    S: Serializer,
{
    let mut bytes = Vec::with_capacity(obj.serialized_size());
    obj.serialize(&mut bytes).map_err(S::Error::custom)?;
    serde_bytes::Bytes::new(&bytes).serialize(serializer)
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: CanonicalDeserialize,
    D: Deserializer<'de>,
{
    let bytes = serde_bytes::ByteBuf::deserialize(deserializer)?;
    T::deserialize(&bytes[..]).map_err(D::Error::custom)
}
