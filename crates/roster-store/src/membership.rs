//! Group membership normalization.

use std::collections::HashSet;

use roster_core::ids::ResourceId;

/// Remove duplicate identifiers, keeping the first occurrence of each.
pub fn dedup_members(members: &mut Vec<ResourceId>) {
    let mut seen = HashSet::with_capacity(members.len());
    members.retain(|id| seen.insert(*id));
}

/// Normalize a replacement membership list against the stored one.
///
/// The dedup pass runs only when `next` differs element-wise from
/// `previous`. The comparison is order-sensitive, so a pure reorder also runs
/// the pass, which leaves an already duplicate-free list untouched.
/// Returns whether the pass ran.
pub fn normalize_members(previous: &[ResourceId], next: &mut Vec<ResourceId>) -> bool {
    if previous == next.as_slice() {
        return false;
    }
    dedup_members(next);
    true
}
