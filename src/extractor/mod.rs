//! Time-windowed sub-profile extraction.
//!
//! Derives a new, self-consistent Profile restricted to a closed time window.
//! The extracted frame table carries every selected leaf frame plus all of
//! its transitive ancestors, so a tree built from the result can never hit an
//! unresolved frame.

use crate::parser::{frame_order, Profile, Sample, StackFrame, TimeRange};
use crate::utils::error::ExtractError;
use indexmap::IndexMap;
use log::debug;
use std::collections::HashMap;

/// Extract the sub-profile of `profile` inside `window`
///
/// **Public** - main entry point
///
/// Selection uses the window's own inclusive containment test, so a sample
/// exactly on a boundary is kept. The result's sample count is recomputed
/// from the selection, its sample period is copied from the parent, and its
/// time range is exactly `window` (not reclipped to the selected min/max
/// timestamps). An empty selection is valid: zero samples, empty frame table.
///
/// # Errors
/// * `ExtractError::UnresolvedFrame` - a selected leaf (or one of its
///   ancestors) is missing from the parent's frame table
/// * `ExtractError::Order` - a kept identifier lacks the numeric suffix
///   needed to lay the new frame table out deterministically
pub fn sub_profile(profile: &Profile, window: TimeRange) -> Result<Profile, ExtractError> {
    let selected: Vec<Sample> = profile
        .samples()
        .iter()
        .filter(|sample| window.contains(sample.ts))
        .cloned()
        .collect();

    debug!(
        "Selected {} of {} samples in window [{}, {}]",
        selected.len(),
        profile.samples().len(),
        window.start,
        window.end
    );

    // Ancestor closure over the selected leaves
    let mut kept: HashMap<&str, &StackFrame> = HashMap::new();
    for sample in &selected {
        let mut cursor: &str = &sample.sf;
        loop {
            if kept.contains_key(cursor) {
                break;
            }
            let frame = profile
                .frames()
                .get(cursor)
                .ok_or_else(|| ExtractError::UnresolvedFrame(cursor.to_string()))?;
            kept.insert(cursor, frame);
            match frame.parent.as_deref() {
                Some(parent) => cursor = parent,
                None => break,
            }
        }
    }

    // Lay the new table out ascending per the ordering comparator so the
    // output is deterministic and diff-friendly
    let ordered = frame_order::sorted_ids(kept.keys().copied())?;
    let frames: IndexMap<String, StackFrame> = ordered
        .into_iter()
        .map(|id| (id.to_string(), kept[id].clone()))
        .collect();

    let sample_count = selected.len() as u64;
    Ok(Profile::from_parts(
        frames,
        selected,
        sample_count,
        profile.sample_period(),
        Some(window),
    ))
}
