//! Configuration types for queue ACLs
//!
//! Provides the shared ACL grammar constants, the JSON-serializable queue ACL
//! configuration and the identity presented at evaluation time.

use crate::acl::AclOptions;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

// ============================================================================
// ACL grammar constants
// ============================================================================

/// Matches every user and group
pub const WILDCARD: &str = "*";

/// Separates the user list from the group list
pub const SPACE: &str = " ";

/// Separates names within a user or group list
pub const SEPARATOR: &str = ",";

/// Separates the levels of a queue path
pub const DOT: &str = ".";

// ============================================================================
// Queue ACL Configuration
// ============================================================================

/// ACL configuration for a set of queues
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct SchedulerAclConfig {
    /// Do not log dropped names or wildcard notices while building ACLs
    pub silence_warnings: bool,

    /// Queues with their ACLs
    pub queues: Vec<QueueAclConfig>,
}

impl SchedulerAclConfig {
    /// Load the configuration from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read ACL configuration {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse ACL configuration {}", path.display()))?;
        Ok(config)
    }

    /// Build options derived from this configuration
    pub fn options(&self) -> AclOptions {
        AclOptions {
            silence_warnings: self.silence_warnings,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct QueueAclConfig {
    /// Fully qualified queue name, e.g. `root.analytics`
    pub name: String,

    /// Who may submit applications to the queue
    #[serde(default)]
    pub submit_acl: String,

    /// Who may administer the queue (administrators may also submit)
    #[serde(default)]
    pub admin_acl: String,
}

impl QueueAclConfig {
    pub fn new(name: &str, submit_acl: &str, admin_acl: &str) -> Self {
        Self {
            name: name.to_string(),
            submit_acl: submit_acl.to_string(),
            admin_acl: admin_acl.to_string(),
        }
    }
}

/// Privileged action checked against a queue's ACLs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AclAction {
    Submit,
    Admin,
}

impl fmt::Display for AclAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AclAction::Submit => write!(f, "submit"),
            AclAction::Admin => write!(f, "admin"),
        }
    }
}

impl FromStr for AclAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "submit" => Ok(AclAction::Submit),
            "admin" => Ok(AclAction::Admin),
            other => Err(format!("unknown ACL action '{}', expected submit or admin", other)),
        }
    }
}

// ============================================================================
// Identity (runtime state per request)
// ============================================================================

/// A user and the groups it belongs to, as resolved by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserGroup {
    /// User name
    pub user: String,
    /// Group memberships, order is not significant
    pub groups: Vec<String>,
}

impl UserGroup {
    pub fn new<U, G, S>(user: U, groups: G) -> Self
    where
        U: Into<String>,
        G: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            user: user.into(),
            groups: groups.into_iter().map(Into::into).collect(),
        }
    }

    /// An identity without group memberships
    pub fn user(name: impl Into<String>) -> Self {
        Self {
            user: name.into(),
            groups: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = SchedulerAclConfig::default();
        assert!(!config.silence_warnings);
        assert!(config.queues.is_empty());
        assert!(!config.options().silence_warnings);
    }

    #[test]
    fn test_deserialize_config() {
        let json = r#"{
            "silence-warnings": true,
            "queues": [
                {"name": "root", "admin-acl": "admin"},
                {"name": "root.analytics", "submit-acl": "alice,bob analysts"}
            ]
        }"#;

        let config: SchedulerAclConfig = serde_json::from_str(json).expect("Failed to parse");
        assert!(config.silence_warnings);
        assert!(config.options().silence_warnings);
        assert_eq!(config.queues.len(), 2);
        assert_eq!(config.queues[0], QueueAclConfig::new("root", "", "admin"));
        assert_eq!(config.queues[1].submit_acl, "alice,bob analysts");
        assert_eq!(config.queues[1].admin_acl, "");
    }

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"queues": [{{"name": "root", "submit-acl": "*"}}]}}"#).unwrap();

        let config = SchedulerAclConfig::load(file.path()).unwrap();
        assert_eq!(config.queues, vec![QueueAclConfig::new("root", "*", "")]);
    }

    #[test]
    fn test_load_invalid_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = SchedulerAclConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("failed to parse ACL configuration"));
    }

    #[test]
    fn test_action_parsing() {
        assert_eq!("submit".parse::<AclAction>(), Ok(AclAction::Submit));
        assert_eq!("ADMIN".parse::<AclAction>(), Ok(AclAction::Admin));
        assert!("delete".parse::<AclAction>().is_err());
        assert_eq!(AclAction::Admin.to_string(), "admin");
    }

    #[test]
    fn test_user_group_helpers() {
        let ug = UserGroup::new("alice", ["dev", "ops"]);
        assert_eq!(ug.user, "alice");
        assert_eq!(ug.groups, vec!["dev".to_string(), "ops".to_string()]);
        assert!(UserGroup::user("bob").groups.is_empty());
    }
}
