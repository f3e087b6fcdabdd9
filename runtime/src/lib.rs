//! # runtime
//!
//! Carrying objects across an encoding boundary without caring about their
//! concrete type.
//!
//! Two mechanisms live here:
//!
//! - [`LazyEncodable`], produced by [`new_encodable`], holds an object, an
//!   [`Encoder`] and target versions, and encodes only when its bytes are
//!   requested.
//! - [`RawExtension`] holds either a decoded object or undecoded bytes. Bytes
//!   of an unresolved type travel as an [`Unknown`] object and are written
//!   back exactly as they were read.
//!
//! The [`conversion`] module bridges a plain `Option<ObjectRef>` slot and a
//! [`RawExtension`] slot:
//!
//! ```text
//! Option<ObjectRef> --object_to_raw_extension--> RawExtension
//! RawExtension      --raw_extension_to_object--> Option<ObjectRef>
//! ```
//!
//! ## Example
//!
//! ```
//! use runtime::{Marshal, RawExtension, Unmarshal};
//!
//! let mut ext = RawExtension::default();
//! ext.unmarshal(br#"{"x":5}"#).unwrap();
//! assert_eq!(ext.marshal().unwrap(), br#"{"x":5}"#);
//!
//! ext.unmarshal(b"").unwrap();
//! assert_eq!(ext.marshal().unwrap(), b"null");
//! ```

pub mod conversion;
mod decoder;
mod encodable;
mod encoder;
pub mod error;
mod extension;
mod json;
mod object;
mod unknown;

pub use decoder::Unmarshal;
pub use encodable::{LazyEncodable, new_encodable, new_encodable_list};
pub use encoder::{EncodeError, Encoder, Marshal, encode};
pub use error::{Error, Result};
pub use extension::RawExtension;
pub use object::{Object, ObjectRef};
pub use unknown::Unknown;

/// The serialized form of "nothing".
pub const NULL: &[u8] = b"null";
