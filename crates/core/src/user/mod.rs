//! User directory: ports and service

pub mod ports;
pub mod service;

pub use ports::UserRepository;
pub use service::UserDirectory;
