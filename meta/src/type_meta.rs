use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::group_version::{GroupVersion, GroupVersionKind};

/// The `apiVersion` and `kind` header of a serialized object.
///
/// Both fields may be empty, which is how values of an unresolved type
/// and containers with nothing inside report themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeMeta {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    api_version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    kind: String,
}

impl TypeMeta {
    pub fn new(api_version: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            api_version: api_version.into(),
            kind: kind.into(),
        }
    }

    /// A descriptor with neither api version nor kind.
    pub const fn empty() -> Self {
        Self {
            api_version: String::new(),
            kind: String::new(),
        }
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn is_empty(&self) -> bool {
        self.api_version.is_empty() && self.kind.is_empty()
    }

    /// Parse the api version and pair it with the kind.
    pub fn group_version_kind(&self) -> Result<GroupVersionKind> {
        let gv = GroupVersion::parse(&self.api_version)?;
        Ok(gv.with_kind(self.kind.clone()))
    }

    pub fn set_group_version_kind(&mut self, gvk: &GroupVersionKind) {
        self.api_version = gvk.group_version().to_string();
        self.kind = gvk.kind().to_string();
    }
}

impl Display for TypeMeta {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "<unknown>");
        }
        write!(f, "{}/{}", self.api_version, self.kind)
    }
}
