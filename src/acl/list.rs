//! ACL parsing and access checks
//!
//! An ACL string is either empty (nobody has access) or a user list
//! optionally followed by a single space and a group list:
//!
//! ```text
//! alice,bob admins,ops
//! ```
//!
//! Either list may be the wildcard `*`, which grants access to everyone.

use crate::config::{UserGroup, SEPARATOR, SPACE, WILDCARD};
use crate::error::AclError;
use std::collections::HashSet;
use std::str::FromStr;
use tracing::info;

use super::names::{is_valid_group_name, is_valid_user_name};

/// Options applied while building an ACL
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AclOptions {
    /// Suppress the informational logs about dropped names and wildcards
    pub silence_warnings: bool,
}

impl AclOptions {
    /// Options that suppress all build-time logging
    pub fn silent() -> Self {
        Self {
            silence_warnings: true,
        }
    }
}

/// A parsed, validated access-control list.
///
/// Built once from a configuration string and never modified afterwards; a
/// configuration reload builds a new list instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessControlList {
    users: HashSet<String>,
    groups: HashSet<String>,
    all_allowed: bool,
}

impl AccessControlList {
    /// Build an ACL from its string form.
    ///
    /// Only a structurally malformed string (more than one space) is an
    /// error. Empty or invalid names are skipped.
    ///
    /// # Examples
    /// ```
    /// use queue_acl::acl::{AccessControlList, AclOptions};
    /// use queue_acl::config::UserGroup;
    ///
    /// let acl = AccessControlList::build("alice,bob admins", &AclOptions::default()).unwrap();
    /// assert!(acl.check_access(&UserGroup::user("alice")));
    /// assert!(acl.check_access(&UserGroup::new("carol", ["admins"])));
    /// assert!(!acl.check_access(&UserGroup::user("carol")));
    /// ```
    pub fn build(acl: &str, options: &AclOptions) -> Result<Self, AclError> {
        let mut list = Self::default();
        if acl.is_empty() {
            return Ok(list);
        }

        // split before trimming: a leading space means "groups only"
        let fields: Vec<&str> = acl.split(SPACE).collect();
        if fields.len() > 2 {
            return Err(AclError::MultipleSpaces(acl.to_string()));
        }

        list.all_allowed = acl.trim() == WILDCARD;
        list.set_users(fields[0], options.silence_warnings);
        if let Some(groups) = fields.get(1) {
            list.set_groups(groups, options.silence_warnings);
        }
        Ok(list)
    }

    fn set_users(&mut self, field: &str, silence: bool) {
        self.users.clear();
        if field == WILDCARD {
            if !silence {
                info!("user list is wildcard, allowing all access");
            }
            self.all_allowed = true;
            return;
        }

        for user in field.split(SEPARATOR) {
            // empty when the ACL only lists groups
            if user.is_empty() {
                continue;
            }
            if is_valid_user_name(user) {
                self.users.insert(user.to_string());
            } else if !silence {
                info!(user = %user, "ignoring user in ACL definition");
            }
        }
    }

    fn set_groups(&mut self, field: &str, silence: bool) {
        self.groups.clear();
        if self.all_allowed {
            if !silence {
                info!("ignoring group list in ACL: wildcard set");
            }
            return;
        }
        if field == WILDCARD {
            if !silence {
                info!("group list is wildcard, allowing all access");
            }
            self.users.clear();
            self.all_allowed = true;
            return;
        }

        for group in field.split(SEPARATOR) {
            // empty when the ACL ends in a space
            if group.is_empty() {
                continue;
            }
            if is_valid_group_name(group) {
                self.groups.insert(group.to_string());
            } else if !silence {
                info!(group = %group, "ignoring group in ACL");
            }
        }
    }

    /// Check whether the identity is granted access by this list
    pub fn check_access(&self, identity: &UserGroup) -> bool {
        if self.all_allowed {
            return true;
        }
        if self.users.contains(&identity.user) {
            return true;
        }
        identity.groups.iter().any(|group| self.groups.contains(group))
    }

    /// Whether the list grants access to everyone
    pub fn allows_all(&self) -> bool {
        self.all_allowed
    }

    /// Whether the list grants access to nobody
    pub fn is_empty(&self) -> bool {
        !self.all_allowed && self.users.is_empty() && self.groups.is_empty()
    }

    /// Validated user names granted access
    pub fn users(&self) -> &HashSet<String> {
        &self.users
    }

    /// Validated group names granted access
    pub fn groups(&self) -> &HashSet<String> {
        &self.groups
    }
}

impl FromStr for AccessControlList {
    type Err = AclError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::build(s, &AclOptions::default())
    }
}
