//! CLI command implementations

pub mod new;
