use meta::TypeMeta;

use crate::NULL;
use crate::decoder::Unmarshal;
use crate::encoder::Marshal;
use crate::error::Result;
use crate::object::Object;

/// True for the inputs that decode to "nothing": no bytes, or `null`.
pub(crate) fn is_null_or_empty(data: &[u8]) -> bool {
    data.is_empty() || data == NULL
}

/// An object whose concrete type was not resolved when it was decoded.
///
/// The serialized bytes are kept verbatim so that encoding the value
/// again reproduces them exactly, a decoded `null` included. Only an
/// `Unknown` that was never given any bytes has none, and it encodes as
/// `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Unknown {
    type_meta: TypeMeta,
    raw: Option<Vec<u8>>,
}

impl Unknown {
    /// Take ownership of already serialized bytes.
    pub fn new(raw: Vec<u8>) -> Self {
        let raw = (!raw.is_empty()).then_some(raw);
        Self {
            type_meta: TypeMeta::empty(),
            raw,
        }
    }

    /// Copy `data` into a fresh value. Never fails.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut unknown = Self::default();
        unknown.set_bytes(data);
        unknown
    }

    pub fn raw(&self) -> Option<&[u8]> {
        self.raw.as_deref()
    }

    /// The serialized form: the held bytes, or `null` when there are none.
    pub fn to_bytes(&self) -> &[u8] {
        self.raw.as_deref().unwrap_or(NULL)
    }

    fn set_bytes(&mut self, data: &[u8]) {
        self.type_meta = TypeMeta::empty();
        if data.is_empty() {
            self.raw = None;
            return;
        }
        // Reuse the previous allocation. The copy never aliases `data`.
        let raw = self.raw.get_or_insert_with(Vec::new);
        raw.clear();
        raw.extend_from_slice(data);
    }
}

impl Object for Unknown {
    fn object_kind(&self) -> &TypeMeta {
        &self.type_meta
    }

    fn as_unknown(&self) -> Option<&Unknown> {
        Some(self)
    }

    fn as_marshal(&self) -> Option<&dyn Marshal> {
        Some(self)
    }
}

impl Unmarshal for Unknown {
    fn unmarshal(&mut self, data: &[u8]) -> Result<()> {
        self.set_bytes(data);
        Ok(())
    }
}

impl Marshal for Unknown {
    fn marshal(&self) -> Result<Vec<u8>> {
        Ok(self.to_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest(input,
        case(br#"{"a":1}"#.as_slice()),
        case(b"[1,2,3]".as_slice()),
        case(b"\"text\"".as_slice()),
        case(b"nul".as_slice()),
        case(b"null ".as_slice()),
        case(b"null".as_slice()),
        case(b"\x00\xff\x10".as_slice()),
    )]
    fn test_unknown_keeps_bytes(input: &[u8]) {
        let unknown = Unknown::from_bytes(input);
        assert_eq!(unknown.raw(), Some(input));
        assert_eq!(unknown.to_bytes(), input);
        assert_eq!(unknown.marshal().unwrap(), input);
    }

    #[test]
    fn test_unknown_empty_input_has_no_bytes() {
        let unknown = Unknown::from_bytes(b"");
        assert_eq!(unknown.raw(), None);
        assert_eq!(unknown.to_bytes(), NULL);
        assert_eq!(unknown, Unknown::default());
        assert_eq!(Unknown::new(Vec::new()), Unknown::default());
    }

    #[test]
    fn test_unmarshal_resets_type_meta_and_bytes() {
        let mut unknown = Unknown {
            type_meta: TypeMeta::new("v1", "Pod"),
            raw: Some(br#"{"kind":"Pod"}"#.to_vec()),
        };
        assert_eq!(unknown.object_kind().kind(), "Pod");

        unknown.unmarshal(b"{}").unwrap();
        assert!(unknown.object_kind().is_empty());
        assert_eq!(unknown.raw(), Some(b"{}".as_slice()));

        unknown.unmarshal(b"null").unwrap();
        assert_eq!(unknown.raw(), Some(NULL));

        unknown.unmarshal(b"").unwrap();
        assert_eq!(unknown.raw(), None);
    }

    #[test]
    fn test_unmarshal_copies_input() {
        let mut buffer = br#"{"a":1}"#.to_vec();
        let unknown = Unknown::from_bytes(&buffer);

        buffer[1] = b'X';
        assert_eq!(unknown.raw(), Some(br#"{"a":1}"#.as_slice()));
    }

    #[test]
    fn test_unknown_is_its_own_opaque_view() {
        let unknown = Unknown::from_bytes(b"1");
        let obj: &dyn Object = &unknown;
        assert!(std::ptr::eq(obj.as_unknown().unwrap(), &unknown));
        assert!(obj.as_marshal().is_some());
    }

    proptest! {
        #[test]
        fn prop_unknown_round_trips_bytes(data in prop::collection::vec(any::<u8>(), 1..256)) {
            let unknown = Unknown::from_bytes(&data);
            prop_assert_eq!(unknown.to_bytes(), data.as_slice());
        }
    }
}
