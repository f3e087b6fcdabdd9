use std::{fmt::Debug, sync::Arc};

use meta::TypeMeta;

use crate::encoder::Marshal;
use crate::extension::RawExtension;
use crate::unknown::Unknown;

/// Shared handle to a polymorphic object.
///
/// Identity is observable with [`Arc::ptr_eq`], which is how callers tell
/// a passed-through value from a rewrapped one.
pub type ObjectRef = Arc<dyn Object>;

/// A structured value that can report its kind descriptor.
pub trait Object: Debug + Send + Sync + 'static {
    /// The api version and kind of this value.
    fn object_kind(&self) -> &TypeMeta;

    /// Returns the opaque value when this object is one.
    ///
    /// Only [`Unknown`] overrides this. It is the check used to avoid
    /// wrapping or re-encoding data that was never decoded.
    fn as_unknown(&self) -> Option<&Unknown> {
        None
    }

    /// Returns the slot when this object is a [`RawExtension`].
    fn as_raw_extension(&self) -> Option<&RawExtension> {
        None
    }

    /// Returns the value's own byte producer, for objects that encode
    /// themselves without an external encoder.
    fn as_marshal(&self) -> Option<&dyn Marshal> {
        None
    }
}
