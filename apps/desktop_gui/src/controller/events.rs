//! Events sent from the backend worker to the UI thread.

use client_core::ClientState;

use crate::backend_bridge::commands::CommandKind;

pub enum UiEvent {
    /// Full client state after a command (or the startup fetch) finished.
    StateChanged {
        state: ClientState,
        origin: CommandKind,
        write_landed: bool,
    },
    /// The worker could not start; no commands will be served.
    BackendUnavailable(String),
}
