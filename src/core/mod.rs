//! Watch session lifecycle: start, forward, stop, replace.

mod forwarder;
mod manager;
mod session;

pub use manager::SessionManager;
pub(crate) use session::WatchSession;
