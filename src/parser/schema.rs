//! Raw record shapes consumed from the external transport collaborator.
//!
//! Field names are fixed for interop and must not change: the transport layer
//! hands us JSON with exactly these keys, and `output::json` re-emits them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One entry of the raw `stackFrames` mapping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawStackFrame {
    /// Display name of the frame
    pub name: String,

    /// Category label (e.g. interpreter, native, GC)
    #[serde(default)]
    pub category: String,

    /// Identifier of the parent frame; absent for root frames
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// Source/resolved-URL string for the frame
    #[serde(default, rename = "resolvedUrl")]
    pub resolved_url: String,
}

/// One entry of the raw `traceEvents` sequence
///
/// A single timestamped CPU sample pointing at the leaf frame observed at
/// that instant. Storage order carries no meaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTraceEvent {
    /// Leaf frame identifier
    pub sf: String,

    /// Timestamp in microseconds
    pub ts: u64,
}

/// Top-level raw profile record
///
/// **Public** - entry shape for [`crate::Profile::parse`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProfile {
    /// `type` tag; written on serialization, ignored on parse
    #[serde(default, rename = "type", skip_serializing_if = "String::is_empty")]
    pub profile_type: String,

    /// Declared sampling period (informative metadata)
    #[serde(default)]
    pub sample_period: u64,

    /// Declared sample count (informative metadata, not necessarily equal
    /// to the number of trace events)
    #[serde(default)]
    pub sample_count: u64,

    /// Start of the covered time window, microseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_origin_micros: Option<u64>,

    /// Extent of the covered time window, microseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_extent_micros: Option<u64>,

    /// Frame table: identifier -> frame record
    #[serde(default)]
    pub stack_frames: IndexMap<String, RawStackFrame>,

    /// Flat sample records
    #[serde(default)]
    pub trace_events: Vec<RawTraceEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_profile_defaults() {
        // Every field except the containers is optional on the wire
        let raw: RawProfile = serde_json::from_str("{}").unwrap();
        assert!(raw.stack_frames.is_empty());
        assert!(raw.trace_events.is_empty());
        assert_eq!(raw.sample_count, 0);
        assert!(raw.time_origin_micros.is_none());
    }

    #[test]
    fn test_raw_frame_parent_omitted_when_absent() {
        let frame = RawStackFrame {
            name: "main".to_string(),
            category: "user".to_string(),
            parent: None,
            resolved_url: String::new(),
        };
        let json = serde_json::to_string(&frame).unwrap();
        assert!(!json.contains("parent"));
    }

    #[test]
    fn test_interop_field_names() {
        let raw: RawProfile = serde_json::from_str(
            r#"{
                "type": "cpu-profile",
                "samplePeriod": 1000,
                "sampleCount": 1,
                "timeOriginMicros": 10,
                "timeExtentMicros": 90,
                "stackFrames": {
                    "f-1": {"name": "main", "category": "user", "resolvedUrl": "app.js"}
                },
                "traceEvents": [{"sf": "f-1", "ts": 42}]
            }"#,
        )
        .unwrap();

        assert_eq!(raw.sample_period, 1000);
        assert_eq!(raw.time_origin_micros, Some(10));
        assert_eq!(raw.stack_frames["f-1"].resolved_url, "app.js");
        assert_eq!(raw.trace_events[0].ts, 42);
    }
}
