//! Queue ACL types and matching logic

use crate::config::{AclAction, QueueAclConfig, UserGroup};
use crate::error::AclError;
use serde::Serialize;

use super::list::{AccessControlList, AclOptions};

/// ACL evaluation request
#[derive(Debug, Clone)]
pub struct AclRequest<'a> {
    /// Identity asking for access
    pub identity: &'a UserGroup,
    /// Fully qualified queue name
    pub queue: &'a str,
    /// Action being performed
    pub action: AclAction,
}

/// Result of ACL evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AclDecision {
    /// Whether access is allowed
    pub allowed: bool,
    /// Queue whose ACL granted access, or the requested queue on deny
    pub queue: Option<String>,
    /// Reason for the decision
    pub reason: String,
}

impl AclDecision {
    pub fn allow(queue: &str, action: AclAction) -> Self {
        Self {
            allowed: true,
            queue: Some(queue.to_string()),
            reason: format!("Allowed {} by ACLs of queue: {}", action, queue),
        }
    }

    pub fn deny(queue: &str) -> Self {
        Self {
            allowed: false,
            queue: Some(queue.to_string()),
            reason: format!("Denied by ACLs of queue: {}", queue),
        }
    }

    pub fn default_deny() -> Self {
        Self {
            allowed: false,
            queue: None,
            reason: "No ACL configured for queue, default deny".to_string(),
        }
    }
}

/// Submit and admin ACLs compiled for one queue
#[derive(Debug, Clone)]
pub struct CompiledQueueAcl {
    pub name: String,
    pub submit_acl: AccessControlList,
    pub admin_acl: AccessControlList,
}

impl CompiledQueueAcl {
    /// Compile a queue's ACLs from configuration
    pub fn from_config(queue: &QueueAclConfig, options: &AclOptions) -> Result<Self, AclError> {
        let name = queue.name.trim().to_lowercase();
        if name.is_empty() {
            return Err(AclError::EmptyQueueName);
        }

        let submit_acl = AccessControlList::build(&queue.submit_acl, options)
            .map_err(|e| e.for_queue(&name, AclAction::Submit))?;
        let admin_acl = AccessControlList::build(&queue.admin_acl, options)
            .map_err(|e| e.for_queue(&name, AclAction::Admin))?;

        Ok(Self {
            name,
            submit_acl,
            admin_acl,
        })
    }

    /// Check the identity against this queue only.
    ///
    /// Administrators may always submit.
    pub fn permits(&self, identity: &UserGroup, action: AclAction) -> bool {
        match action {
            AclAction::Admin => self.admin_acl.check_access(identity),
            AclAction::Submit => {
                self.submit_acl.check_access(identity) || self.admin_acl.check_access(identity)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(submit: &str, admin: &str) -> CompiledQueueAcl {
        CompiledQueueAcl::from_config(
            &QueueAclConfig::new("root.Test", submit, admin),
            &AclOptions::silent(),
        )
        .unwrap()
    }

    #[test]
    fn test_name_normalised() {
        let compiled = compile("", "");
        assert_eq!(compiled.name, "root.test");
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = CompiledQueueAcl::from_config(&QueueAclConfig::new("  ", "*", ""), &AclOptions::silent())
            .unwrap_err();
        assert_eq!(err, AclError::EmptyQueueName);
    }

    #[test]
    fn test_malformed_acl_names_queue() {
        let err = CompiledQueueAcl::from_config(
            &QueueAclConfig::new("root.a", "alice", "x y z"),
            &AclOptions::silent(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            AclError::MultipleSpaces("x y z".to_string()).for_queue("root.a", AclAction::Admin)
        );
    }

    #[test]
    fn test_submit_matching() {
        let compiled = compile("alice devs", "");
        assert!(compiled.permits(&UserGroup::user("alice"), AclAction::Submit));
        assert!(compiled.permits(&UserGroup::new("bob", ["devs"]), AclAction::Submit));
        assert!(!compiled.permits(&UserGroup::user("bob"), AclAction::Submit));
        assert!(!compiled.permits(&UserGroup::user("alice"), AclAction::Admin));
    }

    #[test]
    fn test_admin_implies_submit() {
        let compiled = compile("", "root_admin");
        let admin = UserGroup::user("root_admin");
        assert!(compiled.permits(&admin, AclAction::Admin));
        assert!(compiled.permits(&admin, AclAction::Submit));
    }

    #[test]
    fn test_decision_reasons() {
        let decision = AclDecision::allow("root.a", AclAction::Submit);
        assert!(decision.allowed);
        assert_eq!(decision.reason, "Allowed submit by ACLs of queue: root.a");

        let decision = AclDecision::deny("root.a");
        assert!(!decision.allowed);
        assert_eq!(decision.queue.as_deref(), Some("root.a"));

        assert_eq!(AclDecision::default_deny().queue, None);
    }
}
