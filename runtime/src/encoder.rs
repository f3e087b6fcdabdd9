use meta::GroupVersion;

use crate::error::{Error, Result};
use crate::extension::RawExtension;
use crate::object::Object;

/// Error returned by an [`Encoder`]. Passed to callers untouched.
pub type EncodeError = Box<dyn std::error::Error + Send + Sync>;

/// A format codec that turns a typed object into bytes.
///
/// Encoders are shared between many wrappers through `Arc<dyn Encoder>`
/// and are invoked through `&self` only, so implementations must be safe
/// to call concurrently.
pub trait Encoder: Send + Sync {
    /// Encode `obj` for the given target versions, most preferred first.
    /// An empty slice leaves the choice of version to the encoder.
    fn encode(
        &self,
        obj: &dyn Object,
        versions: &[GroupVersion],
    ) -> std::result::Result<Vec<u8>, EncodeError>;
}

/// Produce the serialized form of a value on demand.
pub trait Marshal {
    fn marshal(&self) -> Result<Vec<u8>>;
}

/// Encode `obj`, letting self-serializing objects produce their own bytes.
///
/// Opaque values, raw or empty extensions and lazy wrappers already know
/// their bytes (or their encoder). A typed extension has no bytes of its
/// own, so its object is encoded with `encoder`, as is any plain object.
pub fn encode(
    encoder: &dyn Encoder,
    obj: &dyn Object,
    versions: &[GroupVersion],
) -> Result<Vec<u8>> {
    if let Some(RawExtension::Typed(inner)) = obj.as_raw_extension() {
        return encode(encoder, inner.as_ref(), versions);
    }
    match obj.as_marshal() {
        Some(marshal) => marshal.marshal(),
        None => encoder.encode(obj, versions).map_err(Error::Encode),
    }
}
