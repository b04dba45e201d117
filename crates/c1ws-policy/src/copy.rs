//! Copying one policy's configuration onto another.
//!
//! The payload is the source's full detail record minus the fields that
//! identify the source itself, so the target keeps its own name, place in
//! the hierarchy, and description.

use serde_json::Value;
use std::io::{BufRead, Write};

use crate::client::{PolicyClient, UpdateOutcome};
use crate::error::{PolicyError, Result};
use crate::model::{Policy, PolicyId, PolicySelector};
use crate::prompt::Prompter;
use crate::resolver::resolve;

/// Fields that describe which policy a record is, not how it is configured.
pub const IDENTITY_FIELDS: [&str; 4] = ["ID", "name", "description", "parentID"];

#[derive(Debug, Clone)]
pub enum CopySource {
    /// A policy on the server, resolved from the same listing as the target.
    Remote(PolicySelector),
    /// A detail record previously saved with `--save`.
    Snapshot(Value),
}

#[derive(Debug, Clone)]
pub struct CopyPlan {
    pub source_label: String,
    pub source_id: Option<PolicyId>,
    pub target: Policy,
    pub target_id: PolicyId,
    pub payload: Value,
}

impl CopyPlan {
    pub async fn apply(&self, client: &PolicyClient) -> Result<UpdateOutcome> {
        tracing::info!(
            "Copying {} onto {}",
            self.source_label,
            self.target.label()
        );
        client.update_policy(self.target_id, &self.payload).await
    }
}

pub fn copy_payload(detail: &Value) -> Value {
    let mut payload = detail.clone();
    if let Some(fields) = payload.as_object_mut() {
        for field in IDENTITY_FIELDS {
            fields.remove(field);
        }
    }
    payload
}

/// Resolve both ends against one listing and build the update payload.
///
/// Nothing is written; the remote source detail is the only extra call.
pub async fn plan_copy(
    client: &PolicyClient,
    source: &CopySource,
    target: &PolicySelector,
) -> Result<CopyPlan> {
    let policies = client.list_policies().await?;

    let resolved = match source {
        CopySource::Remote(selector) => {
            let policy = resolve(&policies, selector)?;
            let id = policy
                .id
                .ok_or_else(|| PolicyError::MissingId(selector.to_string()))?;
            ResolvedSource::Remote(policy.label(), id)
        }
        CopySource::Snapshot(detail) => {
            let snapshot: Option<Policy> = serde_json::from_value(detail.clone()).ok();
            let label = snapshot
                .as_ref()
                .map(|p| format!("snapshot of {}", p.label()))
                .unwrap_or_else(|| "snapshot".to_string());
            ResolvedSource::Snapshot(label, snapshot.and_then(|p| p.id), detail)
        }
    };

    let target_policy = resolve(&policies, target)?.clone();
    let target_id = target_policy
        .id
        .ok_or_else(|| PolicyError::MissingId(target.to_string()))?;
    tracing::info!("Resolved target '{}' to {}", target, target_policy.label());

    // A snapshot may be restored onto the policy it was saved from.
    if let ResolvedSource::Remote(_, id) = &resolved {
        if *id == target_id {
            return Err(PolicyError::SameSourceAndTarget(target_id));
        }
    }

    let (source_label, source_id, detail) = match resolved {
        ResolvedSource::Remote(label, id) => (label, Some(id), client.get_policy(id).await?),
        ResolvedSource::Snapshot(label, id, detail) => (label, id, detail.clone()),
    };

    Ok(CopyPlan {
        source_label,
        source_id,
        target: target_policy,
        target_id,
        payload: copy_payload(&detail),
    })
}

enum ResolvedSource<'a> {
    Remote(String, PolicyId),
    Snapshot(String, Option<PolicyId>, &'a Value),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExecuteOptions {
    /// Print the payload instead of sending it.
    pub dry_run: bool,
    /// Skip the y/N confirmation.
    pub assume_yes: bool,
}

#[derive(Debug)]
pub enum CopyOutcome {
    DryRun,
    Declined,
    Updated(UpdateOutcome),
}

/// Report the plan, then send it unless this is a dry run or the operator
/// declines. A rejected update is reported before it is returned as an error.
pub async fn execute<R: BufRead, W: Write>(
    plan: &CopyPlan,
    client: &PolicyClient,
    prompter: &mut Prompter<R, W>,
    options: ExecuteOptions,
) -> Result<CopyOutcome> {
    prompter.say(&format!("Source: {}", plan.source_label))?;
    prompter.say(&format!("Target: {}", plan.target.label()))?;

    if options.dry_run {
        prompter.say(&serde_json::to_string_pretty(&plan.payload)?)?;
        prompter.say(&format!(
            "Dry run: policy {} was not updated.",
            plan.target_id
        ))?;
        return Ok(CopyOutcome::DryRun);
    }

    if !options.assume_yes {
        let question = format!(
            "Apply configuration of '{}' to '{}'? [y/N]: ",
            plan.source_label,
            plan.target.label()
        );
        if !prompter.confirm(&question)? {
            prompter.say(&format!(
                "Aborted: policy {} was not updated.",
                plan.target_id
            ))?;
            return Ok(CopyOutcome::Declined);
        }
    }

    let outcome = plan.apply(client).await?;
    prompter.say(&format!("Response status: {}", outcome.status))?;
    prompter.say(&format!("Response text: {}", outcome.body))?;

    let outcome = outcome.into_result()?;
    prompter.say(&format!("Policy {} updated successfully.", outcome.id))?;
    Ok(CopyOutcome::Updated(outcome))
}
