//! Command implementations

pub mod prepare;
pub mod version;
