//! # meta
//!
//! Kind and version descriptors carried by runtime objects.
//!
//! Every object that crosses an encoding boundary reports a [`TypeMeta`],
//! the pair of `apiVersion` and `kind` strings found at the top of its
//! serialized form. The api version string is structured as
//! `group/version`, or just `version` for the core group:
//!
//! ```text
//! "v1"       -> GroupVersion { group: "",     version: "v1" }
//! "apps/v1"  -> GroupVersion { group: "apps", version: "v1" }
//! ```
//!
//! ## Example
//!
//! ```
//! use meta::{GroupVersion, TypeMeta};
//!
//! let gv: GroupVersion = "apps/v1".parse().unwrap();
//! let mut type_meta = TypeMeta::empty();
//! type_meta.set_group_version_kind(&gv.with_kind("Deployment"));
//!
//! assert_eq!(type_meta.api_version(), "apps/v1");
//! assert_eq!(type_meta.group_version_kind().unwrap().kind(), "Deployment");
//! ```

pub mod error;
mod group_version;
mod type_meta;

pub use error::{Error, Result};
pub use group_version::{GroupVersion, GroupVersionKind};
pub use type_meta::TypeMeta;
