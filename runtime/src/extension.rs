use meta::TypeMeta;

use crate::NULL;
use crate::decoder::Unmarshal;
use crate::encoder::Marshal;
use crate::error::Result;
use crate::object::{Object, ObjectRef};
use crate::unknown::is_null_or_empty;

static EMPTY_TYPE_META: TypeMeta = TypeMeta::empty();

/// A slot that holds either a decoded object or the bytes it came from.
///
/// Fields of this type sit inside larger documents wherever the concrete
/// type of a nested value is not known up front. Decoding always lands in
/// [`RawExtension::Raw`] (or [`RawExtension::Empty`]); conversion code
/// later swaps in a [`RawExtension::Typed`] value once the type is known.
#[derive(Debug, Clone, Default)]
pub enum RawExtension {
    /// Nothing, serialized as `null`.
    #[default]
    Empty,
    /// Undecoded bytes, written back verbatim.
    Raw(Vec<u8>),
    /// A decoded object.
    Typed(ObjectRef),
}

impl RawExtension {
    /// Copy `data` into a fresh extension. Never fails.
    pub fn from_bytes(data: &[u8]) -> Self {
        if is_null_or_empty(data) {
            Self::Empty
        } else {
            Self::Raw(data.to_vec())
        }
    }

    /// The serialized form: the held bytes, or `null` when there are none.
    ///
    /// A typed value has no bytes of its own here; it has to be converted
    /// back to raw bytes by an encoder first.
    pub fn to_bytes(&self) -> &[u8] {
        match self {
            Self::Raw(raw) if !raw.is_empty() => raw.as_slice(),
            _ => NULL,
        }
    }

    pub fn raw(&self) -> Option<&[u8]> {
        match self {
            Self::Raw(raw) => Some(raw.as_slice()),
            _ => None,
        }
    }

    pub fn object(&self) -> Option<&ObjectRef> {
        match self {
            Self::Typed(obj) => Some(obj),
            _ => None,
        }
    }

    /// True when the extension carries neither an object nor meaningful bytes.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Raw(raw) => is_null_or_empty(raw),
            Self::Typed(_) => false,
        }
    }
}

impl From<ObjectRef> for RawExtension {
    fn from(obj: ObjectRef) -> Self {
        Self::Typed(obj)
    }
}

impl Object for RawExtension {
    fn object_kind(&self) -> &TypeMeta {
        match self {
            Self::Typed(obj) => obj.object_kind(),
            _ => &EMPTY_TYPE_META,
        }
    }

    fn as_raw_extension(&self) -> Option<&RawExtension> {
        Some(self)
    }

    fn as_marshal(&self) -> Option<&dyn Marshal> {
        Some(self)
    }
}

impl Unmarshal for RawExtension {
    fn unmarshal(&mut self, data: &[u8]) -> Result<()> {
        *self = Self::from_bytes(data);
        Ok(())
    }
}

impl Marshal for RawExtension {
    fn marshal(&self) -> Result<Vec<u8>> {
        Ok(self.to_bytes().to_vec())
    }
}
