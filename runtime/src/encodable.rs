use std::{
    fmt::{Debug, Formatter},
    sync::Arc,
};

use meta::{GroupVersion, TypeMeta};
use tracing::{debug, trace};

use crate::decoder::Unmarshal;
use crate::encoder::{Encoder, Marshal};
use crate::error::{Error, Result};
use crate::object::{Object, ObjectRef};

/// An object that is encoded with the held encoder only when its bytes
/// are requested.
///
/// Output is never cached: every [`Marshal::marshal`] call runs the
/// encoder again. Decoding into a `LazyEncodable` is always refused.
#[derive(Clone)]
pub struct LazyEncodable {
    encoder: Arc<dyn Encoder>,
    inner: ObjectRef,
    versions: Vec<GroupVersion>,
}

impl LazyEncodable {
    pub(crate) fn new(
        encoder: Arc<dyn Encoder>,
        inner: ObjectRef,
        versions: Vec<GroupVersion>,
    ) -> Self {
        Self {
            encoder,
            inner,
            versions,
        }
    }

    pub fn inner(&self) -> &ObjectRef {
        &self.inner
    }

    pub fn versions(&self) -> &[GroupVersion] {
        &self.versions
    }
}

impl Debug for LazyEncodable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyEncodable")
            .field("inner", &self.inner)
            .field("versions", &self.versions)
            .finish_non_exhaustive()
    }
}

impl Object for LazyEncodable {
    fn object_kind(&self) -> &TypeMeta {
        self.inner.object_kind()
    }

    fn as_marshal(&self) -> Option<&dyn Marshal> {
        Some(self)
    }
}

impl Marshal for LazyEncodable {
    fn marshal(&self) -> Result<Vec<u8>> {
        trace!(
            kind = %self.inner.object_kind(),
            versions = self.versions.len(),
            "encoding deferred object"
        );
        self.encoder
            .encode(self.inner.as_ref(), &self.versions)
            .map_err(|err| {
                debug!(kind = %self.inner.object_kind(), error = %err, "deferred encode failed");
                Error::Encode(err)
            })
    }
}

impl Unmarshal for LazyEncodable {
    fn unmarshal(&mut self, _data: &[u8]) -> Result<()> {
        Err(Error::Unsupported {
            target: "LazyEncodable",
        })
    }
}

/// Wrap `obj` so that it is encoded with `encoder` on demand.
///
/// Opaque values already carry their bytes and are returned as they are,
/// so the result may be the very same `Arc` that was passed in.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use meta::GroupVersion;
/// use runtime::{Encoder, ObjectRef, Unknown, new_encodable};
///
/// struct NoopEncoder;
///
/// impl Encoder for NoopEncoder {
///     fn encode(
///         &self,
///         _obj: &dyn runtime::Object,
///         _versions: &[GroupVersion],
///     ) -> Result<Vec<u8>, runtime::EncodeError> {
///         Ok(b"{}".to_vec())
///     }
/// }
///
/// let unknown: ObjectRef = Arc::new(Unknown::from_bytes(br#"{"a":1}"#));
/// let wrapped = new_encodable(Arc::new(NoopEncoder), unknown.clone(), &[]);
/// assert!(Arc::ptr_eq(&wrapped, &unknown));
/// ```
pub fn new_encodable(
    encoder: Arc<dyn Encoder>,
    obj: ObjectRef,
    versions: &[GroupVersion],
) -> ObjectRef {
    if obj.as_unknown().is_some() {
        return obj;
    }
    Arc::new(LazyEncodable::new(encoder, obj, versions.to_vec()))
}

/// [`new_encodable`] applied to every element, keeping order and length.
pub fn new_encodable_list(
    encoder: &Arc<dyn Encoder>,
    objects: &[ObjectRef],
    versions: &[GroupVersion],
) -> Vec<ObjectRef> {
    objects
        .iter()
        .map(|obj| new_encodable(Arc::clone(encoder), Arc::clone(obj), versions))
        .collect()
}
