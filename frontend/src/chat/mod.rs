//! Lifecycle of the chat modal: visibility with its page side effects, and
//! the load/timeout/reload state of the embedded chat frame.

pub mod modal;
pub mod session;
pub mod web;

pub use modal::{HostPage, ModalVisibilityController};
pub use session::{LoadState, SessionKey};
pub use web::{WebHostPage, WebScheduler};
