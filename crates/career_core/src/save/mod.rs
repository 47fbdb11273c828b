// Snapshot persistence: JSON with a validating loader.
// The engine does not own storage; callers read and write the text.

pub mod error;
pub mod format;
pub mod normalize;

pub use error::SnapshotError;
pub use format::{from_json, from_value, to_json, to_value, validate};
pub use normalize::normalize;
