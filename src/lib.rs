//! Queue access control for a cluster resource scheduler
//!
//! Decides whether an identity (a user plus its groups) may submit
//! applications to, or administer, a queue:
//!
//! - **ACL strings**: `<users>[ <groups>]`, comma separated lists, `*` for everyone
//! - **Name validation**: invalid user or group names are dropped and logged
//! - **Queue ACLs**: a submit and an admin ACL per queue, admins may submit
//! - **Hierarchy**: access granted on a parent queue applies to its children
//!
//! # Example Configuration
//!
//! ```json
//! {
//!   "silence-warnings": false,
//!   "queues": [
//!     { "name": "root", "admin-acl": " ops" },
//!     { "name": "root.analytics", "submit-acl": "alice,bob analysts" }
//!   ]
//! }
//! ```

pub mod acl;
pub mod config;
pub mod error;

// Re-export main types
pub use acl::{AccessControlList, AclDecision, AclOptions, QueueAclEvaluator};
pub use config::{SchedulerAclConfig, UserGroup};
pub use error::AclError;
