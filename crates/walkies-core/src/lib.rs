pub mod booking;
pub mod chat;
pub mod error;
pub mod gateway;
pub mod ids;
pub mod pet;
pub mod session;
pub mod user;
pub mod walker;

// Re-export common error type
pub use error::WalkiesError;
