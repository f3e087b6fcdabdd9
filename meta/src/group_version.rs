use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const SEPARATOR: char = '/';

/// An API group paired with a version inside that group.
///
/// The core group is the empty string, so `v1` and `/v1` style values
/// only carry a version. Serialized as its string form (`"apps/v1"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupVersion {
    group: String,
    version: String,
}

impl GroupVersion {
    pub fn new(group: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
        }
    }

    /// Parse `version` or `group/version`.
    ///
    /// An empty string yields the empty group version.
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Ok(Self::default());
        }
        match s.split_once(SEPARATOR) {
            None => Ok(Self::new("", s)),
            Some((group, version)) => {
                if group.is_empty() || version.is_empty() || version.contains(SEPARATOR) {
                    return Err(Error::InvalidGroupVersion(s.to_string()));
                }
                Ok(Self::new(group, version))
            }
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn is_empty(&self) -> bool {
        self.group.is_empty() && self.version.is_empty()
    }

    pub fn with_kind(&self, kind: impl Into<String>) -> GroupVersionKind {
        GroupVersionKind {
            group: self.group.clone(),
            version: self.version.clone(),
            kind: kind.into(),
        }
    }
}

impl Display for GroupVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.group.is_empty() {
            write!(f, "{}", self.version)
        } else {
            write!(f, "{}{}{}", self.group, SEPARATOR, self.version)
        }
    }
}

impl FromStr for GroupVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for GroupVersion {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<GroupVersion> for String {
    fn from(value: GroupVersion) -> Self {
        value.to_string()
    }
}

/// A group version plus the kind name of a type inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupVersionKind {
    group: String,
    version: String,
    kind: String,
}

impl GroupVersionKind {
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            kind: kind.into(),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn group_version(&self) -> GroupVersion {
        GroupVersion::new(self.group.clone(), self.version.clone())
    }
}

impl Display for GroupVersionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, Kind={}", self.group_version(), self.kind)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest(input, expected,
        case("", GroupVersion::default()),
        case("v1", GroupVersion::new("", "v1")),
        case("apps/v1", GroupVersion::new("apps", "v1")),
        case("batch/v2alpha1", GroupVersion::new("batch", "v2alpha1")),
    )]
    fn test_parse_group_version(input: &str, expected: GroupVersion) {
        let actual: GroupVersion = input.parse().unwrap();
        assert_eq!(expected, actual);
    }

    #[rstest(input, case("apps/"), case("/v1"), case("a/b/c"), case("/"))]
    fn test_parse_group_version_invalid(input: &str) {
        let err = GroupVersion::parse(input).unwrap_err();
        assert_eq!(err, Error::InvalidGroupVersion(input.to_string()));
    }

    #[rstest(gv, expected,
        case(GroupVersion::default(), ""),
        case(GroupVersion::new("", "v1"), "v1"),
        case(GroupVersion::new("apps", "v1"), "apps/v1"),
    )]
    fn test_group_version_display(gv: GroupVersion, expected: &str) {
        assert_eq!(expected, gv.to_string());
    }

    #[test]
    fn test_group_version_serde_as_string() {
        let gv = GroupVersion::new("apps", "v1");
        let json = serde_json::to_string(&gv).unwrap();
        assert_eq!(json, r#""apps/v1""#);

        let decoded: GroupVersion = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, gv);

        assert!(serde_json::from_str::<GroupVersion>(r#""a/b/c""#).is_err());
    }

    #[test]
    fn test_group_version_kind_display() {
        let gvk = GroupVersion::new("apps", "v1").with_kind("Deployment");
        assert_eq!(gvk.to_string(), "apps/v1, Kind=Deployment");
        assert_eq!(gvk.group_version(), GroupVersion::new("apps", "v1"));

        let core = GroupVersionKind::new("", "v1", "Pod");
        assert_eq!(core.to_string(), "v1, Kind=Pod");
    }
}
