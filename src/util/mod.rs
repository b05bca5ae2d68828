//! Small shared helpers with no state of their own.

pub mod mailto;
