//! The permission lattice applied by ACL entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Permission level granted by an ACL entry.
///
/// Levels form a total order, `Forbidden < ReadOnly < FullAccess`. The set
/// is deliberately closed: resolution asks only the two questions
/// [`Permission::can_read`] and [`Permission::can_write`], never for
/// intermediate capabilities.
///
/// # Examples
///
/// ```
/// use wardyn_acl::Permission;
///
/// assert!(Permission::ReadOnly.can_read());
/// assert!(!Permission::ReadOnly.can_write());
/// assert!(Permission::Forbidden < Permission::FullAccess);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// No access at all.
    Forbidden,

    /// Read access only.
    ReadOnly,

    /// Read and write access.
    FullAccess,
}

impl Permission {
    /// Returns `true` if this level allows reading.
    ///
    /// Every level except [`Permission::Forbidden`] allows reading.
    pub fn can_read(self) -> bool {
        self >= Permission::ReadOnly
    }

    /// Returns `true` if this level allows writing.
    ///
    /// Only [`Permission::FullAccess`] allows writing.
    pub fn can_write(self) -> bool {
        self == Permission::FullAccess
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Permission::Forbidden => write!(f, "forbidden"),
            Permission::ReadOnly => write!(f, "read_only"),
            Permission::FullAccess => write!(f, "full_access"),
        }
    }
}

impl FromStr for Permission {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "forbidden" => Ok(Permission::Forbidden),
            "read_only" => Ok(Permission::ReadOnly),
            "full_access" => Ok(Permission::FullAccess),
            other => Err(Error::UnknownPermission {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_order() {
        assert!(Permission::Forbidden < Permission::ReadOnly);
        assert!(Permission::ReadOnly < Permission::FullAccess);
    }

    #[test]
    fn test_can_read() {
        assert!(!Permission::Forbidden.can_read());
        assert!(Permission::ReadOnly.can_read());
        assert!(Permission::FullAccess.can_read());
    }

    #[test]
    fn test_can_write() {
        assert!(!Permission::Forbidden.can_write());
        assert!(!Permission::ReadOnly.can_write());
        assert!(Permission::FullAccess.can_write());
    }

    #[test]
    fn test_write_implies_read() {
        for level in [
            Permission::Forbidden,
            Permission::ReadOnly,
            Permission::FullAccess,
        ] {
            if level.can_write() {
                assert!(level.can_read(), "{level} allows write but not read");
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Permission::Forbidden.to_string(), "forbidden");
        assert_eq!(Permission::ReadOnly.to_string(), "read_only");
        assert_eq!(Permission::FullAccess.to_string(), "full_access");
    }

    #[test]
    fn test_display_parse_roundtrip() {
        for level in [
            Permission::Forbidden,
            Permission::ReadOnly,
            Permission::FullAccess,
        ] {
            let parsed: Permission = level.to_string().parse().unwrap();
            assert_eq!(parsed, level);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        let err = "admin".parse::<Permission>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown permission: admin");
    }

    #[test]
    fn test_serde_uses_snake_case_names() {
        let json = serde_json::to_string(&Permission::ReadOnly).unwrap();
        assert_eq!(json, "\"read_only\"");
        let level: Permission = serde_json::from_str("\"full_access\"").unwrap();
        assert_eq!(level, Permission::FullAccess);
    }
}
