//! Small helpers used by shells around the runtime.

pub mod keys;
pub mod meta_type;
pub mod params;
pub mod random;
