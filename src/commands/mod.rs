//! Command implementations

pub mod session;

pub use session::Session;
