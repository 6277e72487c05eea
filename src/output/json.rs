//! JSON re-encoding of a Profile.
//!
//! The serialized shape mirrors the input record shape field for field so
//! that `parse(serialize(p))` reproduces an equivalent Profile. Frame tables
//! are emitted ascending per the ordering comparator; `serde_json` is built
//! with `preserve_order`, so that order survives into the emitted value.

use crate::parser::{frame_order, Profile};
use crate::utils::error::OutputError;
use indexmap::IndexMap;

/// Serialize a Profile back into its raw JSON record shape
///
/// **Public** - the only output surface of this crate
///
/// # Errors
/// * `OutputError::Order` - a frame identifier lacks the numeric suffix
///   required for deterministic ordering
/// * `OutputError::SerializationFailed` - JSON encoding failed
pub fn to_json(profile: &Profile) -> Result<serde_json::Value, OutputError> {
    let mut raw = profile.to_raw_unordered();

    let order: Vec<String> = frame_order::sorted_ids(raw.stack_frames.keys().map(String::as_str))?
        .into_iter()
        .map(str::to_string)
        .collect();

    let mut sorted = IndexMap::with_capacity(raw.stack_frames.len());
    for id in order {
        if let Some(frame) = raw.stack_frames.shift_remove(&id) {
            sorted.insert(id, frame);
        }
    }
    raw.stack_frames = sorted;

    Ok(serde_json::to_value(raw)?)
}
