//! cpuprofile-model
//!
//! Core model for CPU sampling profiles: parse a raw record set (a frame
//! table plus flat timestamped samples) into a [`Profile`], build a navigable
//! call tree with per-frame sample statistics, and derive time-windowed
//! sub-profiles that stay structurally self-contained.
//!
//! Capture, rendering, transport, and persistence are explicitly someone
//! else's job: this crate only transforms in-memory records.
//!
//! ## Getting started
//!
//! ```
//! use cpuprofile_model::{sub_profile, Profile, TimeRange};
//! use serde_json::json;
//!
//! let profile = Profile::from_json(&json!({
//!     "stackFrames": {
//!         "f-1": {"name": "main", "category": "user"},
//!         "f-2": {"name": "work", "category": "user", "parent": "f-1"}
//!     },
//!     "traceEvents": [
//!         {"sf": "f-2", "ts": 0},
//!         {"sf": "f-2", "ts": 10}
//!     ]
//! })).unwrap();
//!
//! let tree = profile.build_call_tree().unwrap();
//! assert_eq!(tree.inclusive_samples(tree.root()), 2);
//!
//! let sub = sub_profile(&profile, TimeRange::new(0, 5)).unwrap();
//! assert_eq!(sub.sample_count(), 1);
//! ```

pub mod extractor;
pub mod output;
pub mod parser;
pub mod tree;
pub mod utils;

pub use extractor::sub_profile;
pub use output::to_json;
pub use parser::{Profile, RawProfile, Sample, StackFrame, TimeRange};
pub use tree::{CallNode, CallTree, NodeId};
pub use utils::error::{ExtractError, OrderError, OutputError, ParseError, TreeError};
