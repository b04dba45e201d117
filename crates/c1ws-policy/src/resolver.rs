//! Name and path lookup over an in-memory policy collection.
//!
//! Both lookups are pure: they never touch the network and borrow the
//! matching record out of the collection they were given.

use std::collections::HashSet;

use crate::error::{PolicyError, Result};
use crate::model::{Policy, PolicyPath, PolicySelector};

/// First policy whose name matches exactly (case-sensitive).
pub fn resolve_by_name<'a>(policies: &'a [Policy], name: &str) -> Result<&'a Policy> {
    policies
        .iter()
        .find(|p| p.has_name(name))
        .ok_or_else(|| PolicyError::NotFound(name.to_string()))
}

/// Walk `path` from the root: every segment after the first must be a
/// child (by `parentID`) of the record matched for the previous segment.
///
/// Candidates are tried in list order, so when several chains exist the one
/// built from the earliest records wins. A dead end on an early duplicate
/// falls back to the next same-named record.
pub fn resolve_by_path<'a>(policies: &'a [Policy], path: &PolicyPath) -> Result<&'a Policy> {
    let mut dead_ends = HashSet::new();
    descend(policies, path.segments(), 0, None, &mut dead_ends)
        .map(|index| &policies[index])
        .ok_or_else(|| PolicyError::PathNotFound(path.clone()))
}

pub fn resolve<'a>(policies: &'a [Policy], selector: &PolicySelector) -> Result<&'a Policy> {
    match selector {
        PolicySelector::Name(name) => resolve_by_name(policies, name),
        PolicySelector::Path(path) => resolve_by_path(policies, path),
    }
}

/// `dead_ends` holds (segment, record) pairs already known not to lead to
/// a full match, so each pair is walked at most once.
fn descend(
    policies: &[Policy],
    segments: &[String],
    depth: usize,
    parent: Option<usize>,
    dead_ends: &mut HashSet<(usize, usize)>,
) -> Option<usize> {
    let Some(name) = segments.get(depth) else {
        return parent;
    };
    let parent_id = parent.map(|index| policies[index].id);

    for (index, candidate) in policies.iter().enumerate() {
        if !candidate.has_name(name) || dead_ends.contains(&(depth, index)) {
            continue;
        }
        if parent_id.map_or(false, |id| candidate.parent_id != id) {
            continue;
        }
        if let Some(found) = descend(policies, segments, depth + 1, Some(index), dead_ends) {
            return Some(found);
        }
        dead_ends.insert((depth, index));
    }

    None
}
