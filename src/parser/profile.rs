//! The Profile store: frame table + raw sample records.
//!
//! A `Profile` owns its frame table and trace records outright. It is created
//! by parsing an external record set (or by sub-profile extraction) and is
//! read-only thereafter, so independent Profiles never alias mutable state.

use super::schema::{RawProfile, RawStackFrame, RawTraceEvent};
use crate::tree::CallTree;
use crate::utils::error::{ParseError, TreeError};
use indexmap::IndexMap;
use log::{debug, warn};

/// A single frame record as stored in the frame table
///
/// Immutable once ingested. The identifier itself is the frame-table key and
/// is not repeated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame {
    /// Display name
    pub name: String,

    /// Category label
    pub category: String,

    /// Source/resolved-URL string
    pub resolved_url: String,

    /// Identifier of the parent frame; `None` for root frames
    pub parent: Option<String>,
}

/// A single timestamped CPU sample
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// Timestamp, microseconds
    pub ts: u64,

    /// Leaf frame identifier observed at that instant
    pub sf: String,
}

/// A closed time interval `[start, end]` in microseconds
///
/// Both bounds are inclusive; [`TimeRange::contains`] is the single
/// containment test used everywhere (sub-profile selection included).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: u64,
    pub end: u64,
}

impl TimeRange {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Inclusive containment test
    pub fn contains(&self, ts: u64) -> bool {
        self.start <= ts && ts <= self.end
    }

    /// Extent of the interval, microseconds
    pub fn extent(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }
}

/// An in-memory CPU sampling profile
///
/// **Public** - the central data structure of this crate
///
/// Aggregates the frame table, the flat sample records, the declared sample
/// count/period (informative metadata) and an optional closed time range.
/// Sample ordering within `samples` carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    frames: IndexMap<String, StackFrame>,
    samples: Vec<Sample>,
    sample_count: u64,
    sample_period: u64,
    range: Option<TimeRange>,
}

impl Profile {
    /// Assemble a Profile from already-owned parts
    ///
    /// **Public** - used by the sub-profile extractor; external callers
    /// normally go through [`Profile::parse`] or [`Profile::from_json`]
    pub fn from_parts(
        frames: IndexMap<String, StackFrame>,
        samples: Vec<Sample>,
        sample_count: u64,
        sample_period: u64,
        range: Option<TimeRange>,
    ) -> Self {
        Self {
            frames,
            samples,
            sample_count,
            sample_period,
            range,
        }
    }

    /// Parse a raw record set into a Profile
    ///
    /// **Public** - main entry point for ingestion
    ///
    /// Missing `stackFrames`/`traceEvents` have already defaulted to empty
    /// during deserialization. The time range exists only when both
    /// `timeOriginMicros` and `timeExtentMicros` were supplied; the range is
    /// `[origin, origin + extent]`. No cross-reference validation happens
    /// here: a dangling `sf` or `parent` surfaces later as
    /// `TreeError::UnresolvedFrame` during tree construction.
    pub fn parse(raw: RawProfile) -> Self {
        debug!(
            "Parsing profile: {} stack frames, {} trace events",
            raw.stack_frames.len(),
            raw.trace_events.len()
        );

        let frames: IndexMap<String, StackFrame> = raw
            .stack_frames
            .into_iter()
            .map(|(id, f)| {
                (
                    id,
                    StackFrame {
                        name: f.name,
                        category: f.category,
                        resolved_url: f.resolved_url,
                        parent: f.parent,
                    },
                )
            })
            .collect();

        let samples: Vec<Sample> = raw
            .trace_events
            .into_iter()
            .map(|e| Sample { ts: e.ts, sf: e.sf })
            .collect();

        let range = match (raw.time_origin_micros, raw.time_extent_micros) {
            (Some(origin), Some(extent)) => {
                Some(TimeRange::new(origin, origin.saturating_add(extent)))
            }
            _ => None,
        };

        if raw.sample_count != samples.len() as u64 {
            warn!(
                "Declared sample count {} differs from {} trace events",
                raw.sample_count,
                samples.len()
            );
        }

        Self {
            frames,
            samples,
            sample_count: raw.sample_count,
            sample_period: raw.sample_period,
            range,
        }
    }

    /// Parse a Profile from a JSON value
    ///
    /// **Public** - convenience wrapper over [`Profile::parse`]
    ///
    /// # Errors
    /// * `ParseError::InvalidFormat` - the value is not a JSON object
    /// * `ParseError::JsonError` - the object does not match the wire shape
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ParseError> {
        if !value.is_object() {
            return Err(ParseError::InvalidFormat(
                "profile must be a JSON object".to_string(),
            ));
        }
        let raw: RawProfile = serde_json::from_value(value.clone())?;
        Ok(Self::parse(raw))
    }

    /// Frame table: identifier -> frame record
    pub fn frames(&self) -> &IndexMap<String, StackFrame> {
        &self.frames
    }

    /// Flat sample records (storage order carries no meaning)
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Declared sample count (metadata; may differ from `samples().len()`)
    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    /// Declared sampling period (metadata)
    pub fn sample_period(&self) -> u64 {
        self.sample_period
    }

    /// Closed time interval bounding the samples, if one was declared
    pub fn time_range(&self) -> Option<TimeRange> {
        self.range
    }

    /// Build the call tree for this profile
    ///
    /// **Public** - the root-building entry point
    ///
    /// Construction is a single pass over the samples; the returned tree is
    /// frozen and computes its metrics lazily.
    ///
    /// # Errors
    /// `TreeError::UnresolvedFrame` if a leaf or ancestor identifier is
    /// missing from the frame table.
    pub fn build_call_tree(&self) -> Result<CallTree, TreeError> {
        CallTree::build(self)
    }

    /// Re-encode this Profile as a raw record set (unordered)
    ///
    /// **Private to the crate** - `output::json` layers the deterministic
    /// frame ordering on top of this
    pub(crate) fn to_raw_unordered(&self) -> RawProfile {
        RawProfile {
            profile_type: crate::utils::config::PROFILE_TYPE.to_string(),
            sample_period: self.sample_period,
            sample_count: self.sample_count,
            time_origin_micros: self.range.map(|r| r.start),
            time_extent_micros: self.range.map(|r| r.extent()),
            stack_frames: self
                .frames
                .iter()
                .map(|(id, f)| {
                    (
                        id.clone(),
                        RawStackFrame {
                            name: f.name.clone(),
                            category: f.category.clone(),
                            parent: f.parent.clone(),
                            resolved_url: f.resolved_url.clone(),
                        },
                    )
                })
                .collect(),
            trace_events: self
                .samples
                .iter()
                .map(|s| RawTraceEvent {
                    sf: s.sf.clone(),
                    ts: s.ts,
                })
                .collect(),
        }
    }
}
