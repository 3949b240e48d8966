//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `conversations`, `transcript`, etc.)
//! so components can depend on small focused models. `chat` holds the pure
//! transitions that page handlers drive around each API call.

pub mod audio;
pub mod chat;
pub mod conversations;
pub mod session;
pub mod toast;
pub mod transcript;
pub mod ui;
