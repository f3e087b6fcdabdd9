use crate::error::Result;

/// Populate a value in place from serialized bytes.
///
/// Implementors decide what the bytes mean. [`Unknown`](crate::Unknown)
/// and [`RawExtension`](crate::RawExtension) keep them verbatim and never
/// fail, while [`LazyEncodable`](crate::LazyEncodable) refuses them.
pub trait Unmarshal {
    fn unmarshal(&mut self, data: &[u8]) -> Result<()>;
}
