//! Ingestion of raw profile records and the Profile store.

pub mod frame_order;
pub mod profile;
pub mod schema;

pub use profile::{Profile, Sample, StackFrame, TimeRange};
pub use schema::{RawProfile, RawStackFrame, RawTraceEvent};
