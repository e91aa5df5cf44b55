//! Field encryption port

pub mod ports;

pub use ports::FieldCipher;
