//! Error conversions for infrastructure code.

pub mod conversions;

pub use conversions::InfraError;
