//! Embedding raw bytes inside serde JSON documents.
//!
//! [`Unknown`] and [`RawExtension`] fields serialize as the JSON value their
//! bytes spell out, byte for byte, and deserialize by capturing the exact
//! text of the nested value. A [`LazyEncodable`] field runs its encoder at
//! serialization time and refuses to be deserialized.
//!
//! These impls rely on [`RawValue`] and therefore only work with
//! `serde_json`.

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

use crate::encodable::LazyEncodable;
use crate::encoder::Marshal;
use crate::error::Error;
use crate::extension::RawExtension;
use crate::unknown::Unknown;

fn serialize_raw<S: Serializer>(raw: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    let text = std::str::from_utf8(raw).map_err(S::Error::custom)?;
    let value = RawValue::from_string(text.to_owned()).map_err(S::Error::custom)?;
    value.serialize(serializer)
}

fn deserialize_raw<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Box<RawValue>, D::Error> {
    Box::<RawValue>::deserialize(deserializer)
}

impl Serialize for Unknown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_raw(self.to_bytes(), serializer)
    }
}

impl<'de> Deserialize<'de> for Unknown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = deserialize_raw(deserializer)?;
        Ok(Unknown::from_bytes(raw.get().as_bytes()))
    }
}

impl Serialize for RawExtension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_raw(self.to_bytes(), serializer)
    }
}

impl<'de> Deserialize<'de> for RawExtension {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = deserialize_raw(deserializer)?;
        Ok(RawExtension::from_bytes(raw.get().as_bytes()))
    }
}

impl Serialize for LazyEncodable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let bytes = self.marshal().map_err(S::Error::custom)?;
        serialize_raw(&bytes, serializer)
    }
}

impl<'de> Deserialize<'de> for LazyEncodable {
    fn deserialize<D: Deserializer<'de>>(_deserializer: D) -> Result<Self, D::Error> {
        Err(D::Error::custom(Error::Unsupported {
            target: "LazyEncodable",
        }))
    }
}
