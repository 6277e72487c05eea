//! Fixed constants shared across the crate.

/// Identifier of the synthetic super-root node.
///
/// Every call tree has exactly one entry point regardless of how many
/// distinct root frames appear in the data. The super-root never exists in
/// any frame table, so its identifier is exempt from the numeric-suffix rule.
pub const SUPER_ROOT_ID: &str = "(root)";

/// Display name of the synthetic super-root node.
pub const SUPER_ROOT_NAME: &str = "(root)";

/// Category label of the synthetic super-root node.
pub const SUPER_ROOT_CATEGORY: &str = "root";

/// `type` tag written into serialized profiles.
pub const PROFILE_TYPE: &str = "cpu-profile";
