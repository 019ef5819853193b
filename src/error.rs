//! Error types for ACL construction

use crate::config::AclAction;
use thiserror::Error;

/// Errors raised while building ACLs or compiling a queue ACL configuration.
///
/// Invalid or empty user and group names are not errors: they are dropped
/// from the list and logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AclError {
    /// The policy string has more than one space, so the user and group
    /// sections cannot be told apart.
    #[error("multiple spaces found in ACL: '{0}'")]
    MultipleSpaces(String),

    /// A configured queue has no name
    #[error("queue name must not be empty")]
    EmptyQueueName,

    /// The same queue is configured more than once
    #[error("duplicate queue in ACL configuration: '{0}'")]
    DuplicateQueue(String),

    /// One of the ACLs attached to a queue failed to build
    #[error("invalid {action} ACL for queue '{queue}': {source}")]
    Queue {
        queue: String,
        action: AclAction,
        #[source]
        source: Box<AclError>,
    },
}

impl AclError {
    /// Attach the queue and ACL kind to a build error
    pub fn for_queue(self, queue: &str, action: AclAction) -> Self {
        AclError::Queue {
            queue: queue.to_string(),
            action,
            source: Box::new(self),
        }
    }
}
