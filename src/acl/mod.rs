//! Access Control List (ACL) module
//!
//! Parses user/group ACL strings and checks identities against them, per
//! queue and across the queue hierarchy.

mod evaluator;
mod list;
pub mod names;
mod rules;

pub use evaluator::QueueAclEvaluator;
pub use list::{AccessControlList, AclOptions};
pub use rules::{AclDecision, AclRequest, CompiledQueueAcl};
