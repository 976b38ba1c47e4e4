//! Type-safe wrappers for roster tracker data.

pub mod ids;

pub use ids::MlbId;
