//! Queue ACL CLI
//!
//! Loads a queue ACL configuration and checks one identity against it.

use anyhow::Result;
use clap::Parser;
use queue_acl::config::{AclAction, SchedulerAclConfig, UserGroup};
use queue_acl::{AclDecision, QueueAclEvaluator};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Check queue access for a user and its groups
#[derive(Parser, Debug)]
#[command(name = "queue-acl")]
#[command(version)]
#[command(about = "Check scheduler queue ACLs for a user", long_about = None)]
struct Args {
    /// Configuration file path (JSON)
    #[arg(short, long)]
    config: PathBuf,

    /// Fully qualified queue name, e.g. root.analytics
    #[arg(short, long)]
    queue: String,

    /// User name to check
    #[arg(short, long)]
    user: String,

    /// Group the user belongs to (repeatable)
    #[arg(short, long = "group")]
    groups: Vec<String>,

    /// Action to check (submit or admin)
    #[arg(short, long, default_value = "submit")]
    action: AclAction,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Enable JSON log format
    #[arg(long)]
    json_logs: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    if args.json_logs {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }

    info!(path = %args.config.display(), "Loading configuration from file");
    let config = SchedulerAclConfig::load(&args.config)?;
    let evaluator = QueueAclEvaluator::new(&config)?;
    info!(queues = evaluator.queue_count(), "Queue ACLs loaded");

    let identity = UserGroup::new(args.user, args.groups);
    let decision: AclDecision = match args.action {
        AclAction::Submit => evaluator.can_submit(&identity, &args.queue),
        AclAction::Admin => evaluator.can_administer(&identity, &args.queue),
    };

    println!("{}", serde_json::to_string_pretty(&decision)?);

    Ok(if decision.allowed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
