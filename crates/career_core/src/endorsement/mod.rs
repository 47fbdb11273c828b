pub mod lifecycle;

pub use lifecycle::{advance_all, EndorsementEarnings, EndorsementLifecycle};
