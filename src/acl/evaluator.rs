//! Queue ACL evaluation engine

use crate::config::{AclAction, SchedulerAclConfig, UserGroup, DOT};
use crate::error::AclError;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::rules::{AclDecision, AclRequest, CompiledQueueAcl};

type QueueMap = HashMap<String, Arc<CompiledQueueAcl>>;

/// Queue ACL Evaluator - decides submit and admin access for queues
///
/// Compiled ACLs are immutable; a reload swaps the whole queue map.
pub struct QueueAclEvaluator {
    /// Compiled queue ACLs keyed by lowercased queue name
    queues: RwLock<QueueMap>,
}

impl QueueAclEvaluator {
    /// Create a new ACL evaluator from configuration
    pub fn new(config: &SchedulerAclConfig) -> Result<Self, AclError> {
        let queues = compile(config).inspect_err(|e| {
            warn!(error = %e, "Failed to compile queue ACLs");
        })?;

        Ok(Self {
            queues: RwLock::new(queues),
        })
    }

    /// Replace all queue ACLs from a new configuration.
    ///
    /// The current ACLs stay in place if the new configuration fails to compile.
    pub fn reconfigure(&self, config: &SchedulerAclConfig) -> Result<(), AclError> {
        let new_queues = compile(config)?;
        let count = new_queues.len();

        *self.queues.write() = new_queues;

        info!(queues = count, "Queue ACLs reloaded");
        Ok(())
    }

    /// Evaluate an ACL request against the queue and its ancestors
    pub fn evaluate(&self, request: &AclRequest<'_>) -> AclDecision {
        let queue = request.queue.trim().to_lowercase();
        let queues = self.queues.read();
        let mut configured = false;

        for name in ancestors(&queue) {
            let Some(acl) = queues.get(name) else {
                continue;
            };
            configured = true;

            if acl.permits(request.identity, request.action) {
                debug!(
                    queue = %queue,
                    granted_by = %name,
                    user = %request.identity.user,
                    action = %request.action,
                    "Queue ACL granted access"
                );
                return AclDecision::allow(name, request.action);
            }
        }

        debug!(
            queue = %queue,
            user = %request.identity.user,
            action = %request.action,
            configured,
            "Queue ACL denied access"
        );

        if configured {
            AclDecision::deny(&queue)
        } else {
            AclDecision::default_deny()
        }
    }

    /// Check if the identity can submit applications to a queue
    pub fn can_submit(&self, identity: &UserGroup, queue: &str) -> AclDecision {
        self.evaluate(&AclRequest {
            identity,
            queue,
            action: AclAction::Submit,
        })
    }

    /// Check if the identity can administer a queue
    pub fn can_administer(&self, identity: &UserGroup, queue: &str) -> AclDecision {
        self.evaluate(&AclRequest {
            identity,
            queue,
            action: AclAction::Admin,
        })
    }

    /// Get the compiled ACLs of a single queue
    pub fn queue(&self, name: &str) -> Option<Arc<CompiledQueueAcl>> {
        self.queues.read().get(&name.trim().to_lowercase()).cloned()
    }

    /// Get the number of configured queues
    pub fn queue_count(&self) -> usize {
        self.queues.read().len()
    }
}

impl Default for QueueAclEvaluator {
    fn default() -> Self {
        Self {
            queues: RwLock::new(HashMap::new()),
        }
    }
}

fn compile(config: &SchedulerAclConfig) -> Result<QueueMap, AclError> {
    let options = config.options();
    let mut queues = HashMap::with_capacity(config.queues.len());

    for queue in &config.queues {
        let compiled = CompiledQueueAcl::from_config(queue, &options)?;
        if queues.contains_key(&compiled.name) {
            return Err(AclError::DuplicateQueue(compiled.name));
        }
        queues.insert(compiled.name.clone(), Arc::new(compiled));
    }

    Ok(queues)
}

/// The queue itself followed by each parent, e.g. `root.a.b`, `root.a`, `root`
fn ancestors(queue: &str) -> impl Iterator<Item = &str> {
    std::iter::successors(Some(queue), |&name| name.rsplit_once(DOT).map(|(parent, _)| parent))
}
