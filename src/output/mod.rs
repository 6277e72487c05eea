//! Serialized output surface.

pub mod json;

pub use json::to_json;
