//! Stateful use cases of the Walkies client: the session store, the polling
//! chat feed and the booking dashboards. Everything here talks to the API
//! through the core gateway traits and receives its collaborators by explicit
//! injection, never via globals.

pub mod bookings;
pub mod chat_feed;
pub mod session_store;

pub use bookings::{BookingDesk, ConfirmCompletion};
pub use chat_feed::{ChatFeed, ChatWindow, MessagesCallback};
pub use session_store::SessionStore;
