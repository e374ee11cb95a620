//! CLI command implementations.

pub(crate) mod declare;
pub(crate) mod fetch;
